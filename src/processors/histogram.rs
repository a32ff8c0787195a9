use crate::error::{ProcessingError, Result};
use crate::models::Season;
use crate::processors::season_classifier::SeasonalRecord;
use serde::Serialize;

/// Half-open interval `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
}

impl Bin {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Plot position only; membership always uses the edges.
    pub fn center(&self) -> f64 {
        self.lower + self.width() / 2.0
    }
}

/// Fixed-width bins covering `[min, max)`. A trailing partial bin is dropped.
pub fn build_bins(min: i32, max: i32, step: i32) -> Result<Vec<Bin>> {
    if step <= 0 || min >= max {
        return Err(ProcessingError::InvalidBinRange { min, max, step });
    }

    let count = (max - min) / step;
    let bins = (0..count)
        .map(|i| {
            let lower = min + i * step;
            Bin {
                lower: f64::from(lower),
                upper: f64::from(lower + step),
            }
        })
        .collect::<Vec<_>>();

    if bins.is_empty() {
        return Err(ProcessingError::InvalidBinRange { min, max, step });
    }

    Ok(bins)
}

/// Index of the bin holding `value`, if any.
pub fn bin_index(bins: &[Bin], value: f64) -> Option<usize> {
    let idx = bins.partition_point(|b| b.upper <= value);
    bins.get(idx).filter(|b| b.contains(value)).map(|_| idx)
}

/// Count values per bin. Values outside every bin (and NaN) are not counted.
pub fn histogram<I>(values: I, bins: &[Bin]) -> Vec<u64>
where
    I: IntoIterator<Item = f64>,
{
    let mut counts = vec![0u64; bins.len()];
    for value in values {
        if let Some(idx) = bin_index(bins, value) {
            counts[idx] += 1;
        }
    }
    counts
}

/// True (non-negative) per-bin counts of one season's max and min readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonCounts {
    pub season: Season,
    pub days: usize,
    pub max_counts: Vec<u64>,
    pub min_counts: Vec<u64>,
}

impl SeasonCounts {
    pub fn total_max(&self) -> u64 {
        self.max_counts.iter().sum()
    }

    pub fn total_min(&self) -> u64 {
        self.min_counts.iter().sum()
    }

    /// Min counts negated so they hang below the axis in a mirrored chart.
    pub fn mirrored_min(&self) -> Vec<i64> {
        self.min_counts.iter().map(|&c| -(c as i64)).collect()
    }

    pub fn peak(&self) -> u64 {
        self.max_counts
            .iter()
            .chain(self.min_counts.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

pub fn count_per_season(records: &[SeasonalRecord], season: Season, bins: &[Bin]) -> SeasonCounts {
    let in_season: Vec<&SeasonalRecord> = records.iter().filter(|r| r.season == season).collect();

    SeasonCounts {
        season,
        days: in_season.len(),
        max_counts: histogram(in_season.iter().map(|r| r.record.max), bins),
        min_counts: histogram(in_season.iter().map(|r| r.record.min), bins),
    }
}
