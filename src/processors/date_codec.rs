use crate::error::{ProcessingError, Result};
use chrono::{Datelike, NaiveDate};

const MIN_ENCODED: i64 = 10_000_000;
const MAX_ENCODED: i64 = 99_999_999;

/// Decode a YYYYMMDD integer into a calendar date.
///
/// The value must have exactly eight digits and name a real date, so
/// `20230231` and `20231301` are rejected along with `2023011`.
pub fn decode_date(date_int: i64) -> Result<NaiveDate> {
    if !(MIN_ENCODED..=MAX_ENCODED).contains(&date_int) {
        return Err(ProcessingError::InvalidDateEncoding(date_int));
    }

    let year = (date_int / 10_000) as i32;
    let month = ((date_int / 100) % 100) as u32;
    let day = (date_int % 100) as u32;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ProcessingError::InvalidDateEncoding(date_int))
}

/// Encode a date back into YYYYMMDD form
pub fn encode_date(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}
