use crate::models::{Hemisphere, TemperatureUnit};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghcn-seasons")]
#[command(about = "Seasonal min/max temperature histograms for a GHCN-Daily station")]
#[command(version)]
pub struct Cli {
    /// Station identifier, e.g. USW00014837
    pub station_id: String,

    #[arg(short, long, help = "Station CSV file [default: {STATION_ID}.csv]")]
    pub input: Option<PathBuf>,

    #[arg(short, long, help = "Output image path, .png or .svg [default: {STATION_ID}.png]")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Report temperatures in Celsius instead of Fahrenheit")]
    pub celsius: bool,

    #[arg(long, help = "Use southern hemisphere seasons")]
    pub southern: bool,

    #[arg(short, long, help = "Settings file (TOML) [default: ghcn-seasons.toml if present]")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide progress spinners")]
    pub quiet: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn unit(&self) -> TemperatureUnit {
        TemperatureUnit::from_celsius(self.celsius)
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_southern(self.southern)
    }

    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| crate::utils::default_input_path(&self.station_id))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| crate::utils::default_output_path(&self.station_id))
    }
}
