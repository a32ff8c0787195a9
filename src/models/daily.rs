use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn from_celsius(celsius: bool) -> Self {
        if celsius {
            TemperatureUnit::Celsius
        } else {
            TemperatureUnit::Fahrenheit
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Degrees C",
            TemperatureUnit::Fahrenheit => "Degrees F",
        }
    }

    /// Convert a raw tenths-of-a-degree-Celsius reading into this unit.
    pub fn convert_tenths(&self, tenths: i32) -> f64 {
        let celsius = tenths_to_celsius(tenths);
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }
}

pub fn tenths_to_celsius(tenths: i32) -> f64 {
    f64::from(tenths) / 10.0
}

/// `F = 32 + 9/5 * C`. Multiplying before dividing keeps whole and
/// one-decimal Celsius inputs free of visible rounding noise.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    32.0 + celsius * 9.0 / 5.0
}

/// A station's minimum and maximum temperature for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub min: f64,
    pub max: f64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, min: f64, max: f64) -> Self {
        Self { date, min, max }
    }
}
