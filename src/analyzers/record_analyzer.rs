use crate::error::{ProcessingError, Result};
use crate::models::{DailyRecord, TemperatureUnit};
use crate::utils::constants::DAYS_PER_YEAR;
use chrono::NaiveDate;

/// Descriptive statistics for one temperature column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; NaN for a single value.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Returns `None` for an empty column
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            var.sqrt()
        } else {
            f64::NAN
        };

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.median),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    pub unit: TemperatureUnit,
    pub min: ColumnStats,
    pub max: ColumnStats,
}

impl Description {
    pub fn table(&self) -> String {
        let mut table = format!("{:<8}{:>12}{:>12}\n", self.unit.symbol(), "TMIN", "TMAX");
        for ((label, min), (_, max)) in self.min.rows().into_iter().zip(self.max.rows()) {
            table.push_str(&format!("{:<8}{:>12.6}{:>12.6}\n", label, min, max));
        }
        table
    }
}

/// Size and time span of a record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOverview {
    pub days: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RecordOverview {
    /// Span in years, rounded to one decimal.
    pub fn years(&self) -> f64 {
        let days = self.end.signed_duration_since(self.start).num_days() as f64;
        (days / DAYS_PER_YEAR * 10.0).round() / 10.0
    }

    pub fn summary_line(&self, destination: &str) -> String {
        format!(
            "Plotting histograms of observations for {} days, spanning {:.1} years from {} to {}, to '{}'.",
            format_thousands(self.days),
            self.years(),
            self.start,
            self.end,
            destination
        )
    }
}

pub struct RecordAnalyzer;

impl RecordAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn describe(&self, records: &[DailyRecord], unit: TemperatureUnit) -> Result<Description> {
        let mins: Vec<f64> = records.iter().map(|r| r.min).collect();
        let maxs: Vec<f64> = records.iter().map(|r| r.max).collect();

        match (ColumnStats::from_values(&mins), ColumnStats::from_values(&maxs)) {
            (Some(min), Some(max)) => Ok(Description { unit, min, max }),
            _ => Err(ProcessingError::NoData(
                "No complete TMIN/TMAX days to describe".to_string(),
            )),
        }
    }

    pub fn overview(&self, records: &[DailyRecord]) -> Result<RecordOverview> {
        let start = records.iter().map(|r| r.date).min();
        let end = records.iter().map(|r| r.date).max();

        match (start, end) {
            (Some(start), Some(end)) => Ok(RecordOverview {
                days: records.len(),
                start,
                end,
            }),
            _ => Err(ProcessingError::NoData(
                "No complete TMIN/TMAX days in input".to_string(),
            )),
        }
    }
}

impl Default for RecordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
