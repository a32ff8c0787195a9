use crate::error::{ProcessingError, Result};
use crate::models::{DailyRecord, Element, RawObservation, TemperatureUnit};
use crate::processors::date_codec::decode_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Outer `Option` records whether the element was seen, inner whether it
/// carried a usable value.
#[derive(Debug, Default, Clone, Copy)]
struct DayReadings {
    min: Option<Option<i32>>,
    max: Option<Option<i32>>,
}

/// Pivots raw element rows into one min/max record per day.
pub struct ObservationReshaper {
    unit: TemperatureUnit,
}

impl ObservationReshaper {
    pub fn new() -> Self {
        Self {
            unit: TemperatureUnit::default(),
        }
    }

    pub fn with_unit(unit: TemperatureUnit) -> Self {
        Self { unit }
    }

    /// Group rows by date and keep the days that carry both TMIN and TMAX.
    ///
    /// Records come back sorted by date, one per day.
    pub fn reshape(&self, rows: &[RawObservation]) -> Result<Vec<DailyRecord>> {
        let grouped = self.group_by_date(rows)?;
        let total_days = grouped.len();

        let records: Vec<DailyRecord> = grouped
            .into_iter()
            .filter_map(|(date, readings)| match (readings.min, readings.max) {
                (Some(Some(min)), Some(Some(max))) => Some(DailyRecord::new(
                    date,
                    self.unit.convert_tenths(min),
                    self.unit.convert_tenths(max),
                )),
                _ => None,
            })
            .collect();

        debug!(
            days = total_days,
            complete = records.len(),
            dropped = total_days - records.len(),
            "reshaped observations"
        );

        Ok(records)
    }

    fn group_by_date(&self, rows: &[RawObservation]) -> Result<BTreeMap<NaiveDate, DayReadings>> {
        let mut grouped: BTreeMap<NaiveDate, DayReadings> = BTreeMap::new();

        for row in rows {
            let date = decode_date(row.date)?;
            let entry = grouped.entry(date).or_default();

            let Some(element) = row.element_kind() else {
                continue;
            };

            let slot = match element {
                Element::MinTemperature => &mut entry.min,
                Element::MaxTemperature => &mut entry.max,
            };

            if slot.is_some() {
                return Err(ProcessingError::DuplicateObservation {
                    date,
                    element: element.code().to_string(),
                });
            }
            *slot = Some(row.value);
        }

        Ok(grouped)
    }
}

impl Default for ObservationReshaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around [`ObservationReshaper::reshape`].
pub fn reshape_observations(rows: &[RawObservation], unit: TemperatureUnit) -> Result<Vec<DailyRecord>> {
    ObservationReshaper::with_unit(unit).reshape(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_incomplete_day_is_dropped() {
        let rows = vec![
            RawObservation::new(20200101, "TMIN", -50),
            RawObservation::new(20200101, "TMAX", 10),
            RawObservation::new(20200102, "TMIN", 0),
        ];

        let records = reshape_observations(&rows, TemperatureUnit::Fahrenheit).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, date(2020, 1, 1));
        assert_eq!(records[0].min, 23.0);
        assert!((records[0].max - 33.8).abs() < 1e-9);
    }

    #[test]
    fn test_celsius_output() {
        let rows = vec![
            RawObservation::new(20200101, "TMIN", -50),
            RawObservation::new(20200101, "TMAX", 90),
        ];

        let records = ObservationReshaper::with_unit(TemperatureUnit::Celsius)
            .reshape(&rows)
            .unwrap();

        assert_eq!(records, vec![DailyRecord::new(date(2020, 1, 1), -5.0, 9.0)]);

        let fahrenheit = ObservationReshaper::new().reshape(&rows).unwrap();
        assert!((fahrenheit[0].max - 48.2).abs() < 1e-9);
    }

    #[test]
    fn test_other_elements_ignored_and_sorted() {
        let rows = vec![
            RawObservation::new(20200103, "TMAX", 200),
            RawObservation::new(20200103, "PRCP", 12),
            RawObservation::new(20200103, "TMIN", 100),
            RawObservation::new(20200101, "SNOW", 0),
            RawObservation::new(20200101, "TMAX", 50),
            RawObservation::new(20200101, "TMIN", 0),
        ];

        let records = ObservationReshaper::with_unit(TemperatureUnit::Celsius)
            .reshape(&rows)
            .unwrap();

        let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2020, 1, 1), date(2020, 1, 3)]);
        assert_eq!(records[1].min, 10.0);
        assert_eq!(records[1].max, 20.0);
    }

    #[test]
    fn test_missing_value_drops_day() {
        let mut missing = RawObservation::new(20200101, "TMAX", 0);
        missing.value = None;
        let rows = vec![RawObservation::new(20200101, "TMIN", 0), missing];

        let records = ObservationReshaper::new().reshape(&rows).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_duplicate_element_is_rejected() {
        let rows = vec![
            RawObservation::new(20200101, "TMIN", 0),
            RawObservation::new(20200101, "TMIN", 5),
        ];

        let err = ObservationReshaper::new().reshape(&rows).unwrap_err();
        assert!(matches!(err, ProcessingError::DuplicateObservation { ref element, .. } if element == "TMIN"));
    }

    #[test]
    fn test_repeated_unrelated_element_is_ignored() {
        let rows = vec![
            RawObservation::new(20200101, "TMIN", 0),
            RawObservation::new(20200101, "TMAX", 100),
            RawObservation::new(20200101, "PRCP", 3),
            RawObservation::new(20200101, "PRCP", 5),
        ];

        let records = ObservationReshaper::new().reshape(&rows).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_bad_date_fails() {
        let rows = vec![RawObservation::new(20231301, "TMIN", 0)];
        let err = ObservationReshaper::new().reshape(&rows).unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidDateEncoding(20231301)));
    }
}
