use crate::utils::constants::{ELEMENT_TMAX, ELEMENT_TMIN};
use serde::{Deserialize, Serialize};

/// Element codes this tool understands. Every other code in the source data
/// is skipped during reshaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    MinTemperature, // TMIN
    MaxTemperature, // TMAX
}

impl Element {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            ELEMENT_TMIN => Some(Element::MinTemperature),
            ELEMENT_TMAX => Some(Element::MaxTemperature),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Element::MinTemperature => ELEMENT_TMIN,
            Element::MaxTemperature => ELEMENT_TMAX,
        }
    }
}

/// One (date, element, value) row as it appears in a station file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    #[serde(rename = "DATE")]
    pub date: i64,

    #[serde(rename = "ELEMENT")]
    pub element: String,

    /// Tenths of a degree Celsius for temperature elements.
    #[serde(rename = "DATA_VALUE", deserialize_with = "csv::invalid_option")]
    pub value: Option<i32>,
}

impl RawObservation {
    pub fn new(date: i64, element: &str, value: i32) -> Self {
        Self {
            date,
            element: element.to_string(),
            value: Some(value),
        }
    }

    pub fn element_kind(&self) -> Option<Element> {
        Element::from_code(&self.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_codes() {
        assert_eq!(Element::from_code("TMIN"), Some(Element::MinTemperature));
        assert_eq!(Element::from_code(" TMAX "), Some(Element::MaxTemperature));
        assert_eq!(Element::from_code("PRCP"), None);
        assert_eq!(Element::MaxTemperature.code(), "TMAX");
    }

    #[test]
    fn test_element_kind() {
        let obs = RawObservation::new(20200101, "SNWD", 0);
        assert!(obs.element_kind().is_none());

        let obs = RawObservation::new(20200101, "TMIN", -50);
        assert_eq!(obs.element_kind(), Some(Element::MinTemperature));
    }
}
