pub mod daily;
pub mod observation;
pub mod season;

pub use daily::{celsius_to_fahrenheit, tenths_to_celsius, DailyRecord, TemperatureUnit};
pub use observation::{Element, RawObservation};
pub use season::{Hemisphere, Season};
