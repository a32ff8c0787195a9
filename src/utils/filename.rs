use crate::utils::constants::{INPUT_EXTENSION, OUTPUT_EXTENSION};
use std::path::PathBuf;

/// Station data file in the working directory: `{station_id}.csv`
pub fn default_input_path(station_id: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", station_id, INPUT_EXTENSION))
}

/// Rendered figure in the working directory: `{station_id}.png`
pub fn default_output_path(station_id: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", station_id, OUTPUT_EXTENSION))
}
