use crate::error::{ProcessingError, Result};
use crate::models::{DailyRecord, Hemisphere, Season};
use chrono::{Datelike, NaiveDate};

use Season::{Fall, Spring, Summer, Winter};

/// Season by month for the northern hemisphere, January first.
const NORTHERN_SEASONS: [Season; 12] = [
    Winter, Winter, // Jan, Feb
    Spring, Spring, Spring, // Mar - May
    Summer, Summer, Summer, // Jun - Aug
    Fall, Fall, Fall, // Sep - Nov
    Winter, // Dec
];

/// Season by month for the southern hemisphere, January first.
const SOUTHERN_SEASONS: [Season; 12] = [
    Summer, Summer, // Jan, Feb
    Fall, Fall, Fall, // Mar - May
    Winter, Winter, Winter, // Jun - Aug
    Spring, Spring, Spring, // Sep - Nov
    Summer, // Dec
];

/// A daily record tagged with its season
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalRecord {
    pub record: DailyRecord,
    pub season: Season,
}

pub fn season_for_month(month: u32, hemisphere: Hemisphere) -> Result<Season> {
    if !(1..=12).contains(&month) {
        return Err(ProcessingError::InvalidMonth(month));
    }

    let table = match hemisphere {
        Hemisphere::Northern => &NORTHERN_SEASONS,
        Hemisphere::Southern => &SOUTHERN_SEASONS,
    };
    Ok(table[(month - 1) as usize])
}

pub fn classify(date: NaiveDate, hemisphere: Hemisphere) -> Result<Season> {
    season_for_month(date.month(), hemisphere)
}

pub fn label_seasons(records: &[DailyRecord], hemisphere: Hemisphere) -> Result<Vec<SeasonalRecord>> {
    records
        .iter()
        .map(|record| {
            Ok(SeasonalRecord {
                record: *record,
                season: classify(record.date, hemisphere)?,
            })
        })
        .collect()
}
