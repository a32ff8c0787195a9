use crate::error::{ProcessingError, Result};
use crate::models::RawObservation;
use crate::readers::ObservationSource;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use tracing::debug;

/// Reads station CSV files with at least `DATE`, `ELEMENT` and `DATA_VALUE`
/// columns. Extra columns are ignored.
pub struct CsvObservationReader {
    path: PathBuf,
}

impl CsvObservationReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every row of the configured file
    pub fn read_observations(&self) -> Result<Vec<RawObservation>> {
        let file = File::open(&self.path).map_err(|source| ProcessingError::MissingInputFile {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows = self.read_from(reader)?;

        debug!(path = %self.path.display(), rows = rows.len(), "read station file");
        Ok(rows)
    }

    /// Read rows from any CSV source (used for in-memory data as well as files)
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<RawObservation>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: RawObservation = result?;
            rows.push(row);
        }

        Ok(rows)
    }
}

impl ObservationSource for CsvObservationReader {
    fn observations(&self) -> Result<Vec<RawObservation>> {
        self.read_observations()
    }
}
