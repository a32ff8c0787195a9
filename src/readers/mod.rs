pub mod observation_reader;

pub use observation_reader::CsvObservationReader;

use crate::error::Result;
use crate::models::RawObservation;

/// Anything that can produce rows in the station file schema.
pub trait ObservationSource {
    fn observations(&self) -> Result<Vec<RawObservation>>;
}
