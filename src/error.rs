use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file {} could not be opened", path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date encoding: {0} (expected an 8-digit YYYYMMDD integer)")]
    InvalidDateEncoding(i64),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Duplicate {element} observation on {date}")]
    DuplicateObservation {
        date: chrono::NaiveDate,
        element: String,
    },

    #[error("Invalid histogram range: min={min}, max={max}, step={step}")]
    InvalidBinRange { min: i32, max: i32, step: i32 },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Missing required data: {0}")]
    NoData(String),

    #[error("Rendering error: {0}")]
    Render(String),
}
