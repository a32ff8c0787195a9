use crate::error::Result;
use crate::utils::constants::{
    CONFIG_FILE_STEM, DEFAULT_FIGURE_HEIGHT, DEFAULT_FIGURE_WIDTH, DEFAULT_HIST_MAX,
    DEFAULT_HIST_MIN, DEFAULT_HIST_STEP, ENV_PREFIX,
};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_histogram_bounds"))]
pub struct HistogramSettings {
    pub min: i32,
    pub max: i32,

    #[validate(range(min = 1))]
    pub step: i32,
}

fn validate_histogram_bounds(settings: &HistogramSettings) -> std::result::Result<(), ValidationError> {
    if settings.min.saturating_add(settings.step) > settings.max {
        return Err(ValidationError::new("histogram_range_too_small"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FigureSettings {
    #[validate(range(min = 100))]
    pub width: u32,

    #[validate(range(min = 100))]
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub histogram: HistogramSettings,

    #[validate(nested)]
    pub figure: FigureSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            histogram: HistogramSettings {
                min: DEFAULT_HIST_MIN,
                max: DEFAULT_HIST_MAX,
                step: DEFAULT_HIST_STEP,
            },
            figure: FigureSettings {
                width: DEFAULT_FIGURE_WIDTH,
                height: DEFAULT_FIGURE_HEIGHT,
            },
        }
    }
}

impl Settings {
    /// Layer defaults, then a config file, then `GHCN_SEASONS__*` variables.
    ///
    /// Without an explicit path, `ghcn-seasons.toml` in the working directory
    /// is used when present.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("histogram.min", i64::from(DEFAULT_HIST_MIN))?
            .set_default("histogram.max", i64::from(DEFAULT_HIST_MAX))?
            .set_default("histogram.step", i64::from(DEFAULT_HIST_STEP))?
            .set_default("figure.width", i64::from(DEFAULT_FIGURE_WIDTH))?
            .set_default("figure.height", i64::from(DEFAULT_FIGURE_HEIGHT))?;

        builder = match config_path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(CONFIG_FILE_STEM).required(false)),
        };

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        debug!(?settings, "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::Builder;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.histogram.min, -40);
        assert_eq!(settings.histogram.max, 110);
        assert_eq!(settings.histogram.step, 5);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file("[histogram]\nstep = 10\n\n[figure]\nwidth = 1200\n");
        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.histogram.step, 10);
        assert_eq!(settings.histogram.min, -40);
        assert_eq!(settings.figure.width, 1200);
        assert_eq!(settings.figure.height, 1000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = toml_file("[histogram]\nstep = 0\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ProcessingError::Validation(_)));

        let file = toml_file("[histogram]\nmin = 100\nmax = 50\n");
        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Settings::load(Some(Path::new("/nonexistent/ghcn-seasons.toml"))).unwrap_err();
        assert!(matches!(err, ProcessingError::Config(_)));
    }
}
