/// Element codes
pub const ELEMENT_TMIN: &str = "TMIN";
pub const ELEMENT_TMAX: &str = "TMAX";

/// File naming
pub const INPUT_EXTENSION: &str = "csv";
pub const OUTPUT_EXTENSION: &str = "png";
pub const CONFIG_FILE_STEM: &str = "ghcn-seasons";
pub const ENV_PREFIX: &str = "GHCN_SEASONS";

/// Histogram defaults, in the output unit
pub const DEFAULT_HIST_MIN: i32 = -40;
pub const DEFAULT_HIST_MAX: i32 = 110;
pub const DEFAULT_HIST_STEP: i32 = 5;

/// Figure defaults (8 x 10 inches at 100 dpi)
pub const DEFAULT_FIGURE_WIDTH: u32 = 800;
pub const DEFAULT_FIGURE_HEIGHT: u32 = 1000;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const DAYS_PER_YEAR: f64 = 365.25;
