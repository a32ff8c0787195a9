use crate::error::{ProcessingError, Result};
use crate::models::{Season, TemperatureUnit};
use crate::processors::histogram::{count_per_season, Bin, SeasonCounts};
use crate::processors::season_classifier::SeasonalRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarSeries {
    /// Daily maxima, drawn upward in red
    Max,
    /// Daily minima, drawn downward in blue
    Min,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub series: BarSeries,
    pub lower: f64,
    pub upper: f64,
    /// Signed display height; negative for [`BarSeries::Min`].
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub title: String,
    pub counts: SeasonCounts,
    pub bars: Vec<Bar>,
}

impl PanelLayout {
    fn new(counts: SeasonCounts, bins: &[Bin]) -> Self {
        let max_bars = bins
            .iter()
            .zip(&counts.max_counts)
            .filter(|(_, &count)| count > 0)
            .map(|(bin, &count)| Bar {
                series: BarSeries::Max,
                lower: bin.lower,
                upper: bin.upper,
                height: count as i64,
            });

        let min_bars = bins
            .iter()
            .zip(counts.mirrored_min())
            .filter(|(_, height)| *height < 0)
            .map(|(bin, height)| Bar {
                series: BarSeries::Min,
                lower: bin.lower,
                upper: bin.upper,
                height,
            });

        let bars = max_bars.chain(min_bars).collect();

        Self {
            title: counts.season.name().to_string(),
            counts,
            bars,
        }
    }

    /// Total observations drawn for one series.
    pub fn bar_total(&self, series: BarSeries) -> u64 {
        self.bars
            .iter()
            .filter(|b| b.series == series)
            .map(|b| b.height.unsigned_abs())
            .sum()
    }

    pub fn y_extent(&self) -> f64 {
        self.counts.peak().max(1) as f64
    }
}

/// Everything needed to draw the seasonal figure, independent of any backend.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureLayout {
    pub title_lines: Vec<String>,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub panels: Vec<PanelLayout>,
}

/// Build one panel per season, in [`Season::ALL`] order.
pub fn plan_figure(
    records: &[SeasonalRecord],
    station_id: &str,
    bins: &[Bin],
    unit: TemperatureUnit,
) -> Result<FigureLayout> {
    let start = records.iter().map(|r| r.record.date).min();
    let end = records.iter().map(|r| r.record.date).max();
    let (Some(start), Some(end)) = (start, end) else {
        return Err(ProcessingError::NoData(format!(
            "No complete TMIN/TMAX days to plot for station {}",
            station_id
        )));
    };
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        return Err(ProcessingError::NoData("Histogram has no bins".to_string()));
    };

    let panels = Season::ALL
        .iter()
        .map(|&season| PanelLayout::new(count_per_season(records, season, bins), bins))
        .collect();

    Ok(FigureLayout {
        title_lines: vec![
            "Distribution of Min, Max temperatures across the Seasons".to_string(),
            format!("for station {} from {} to {}.", station_id, start, end),
        ],
        x_label: unit.axis_label().to_string(),
        y_label: "Number of observations".to_string(),
        x_range: (first.lower, last.upper),
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyRecord;
    use crate::processors::histogram::build_bins;
    use chrono::NaiveDate;

    fn seasonal(m: u32, d: u32, min: f64, max: f64, season: Season) -> SeasonalRecord {
        SeasonalRecord {
            record: DailyRecord::new(NaiveDate::from_ymd_opt(2022, m, d).unwrap(), min, max),
            season,
        }
    }

    #[test]
    fn test_panel_order_and_titles() {
        let bins = build_bins(-40, 110, 5).unwrap();
        let records = vec![seasonal(7, 1, 60.0, 80.0, Season::Summer)];

        let layout = plan_figure(&records, "USW00014837", &bins, TemperatureUnit::Fahrenheit).unwrap();

        let titles: Vec<&str> = layout.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["WINTER", "SPRING", "SUMMER", "FALL"]);
        assert_eq!(layout.x_range, (-40.0, 110.0));
        assert_eq!(layout.x_label, "Degrees F");
        assert!(layout.title_lines[1].contains("USW00014837 from 2022-07-01 to 2022-07-01"));
    }

    #[test]
    fn test_mirrored_bars() {
        let bins = build_bins(-40, 110, 5).unwrap();
        let records = vec![
            seasonal(1, 1, 10.0, 30.0, Season::Winter),
            seasonal(1, 2, 11.0, 31.0, Season::Winter),
            seasonal(1, 3, 20.0, 44.0, Season::Winter),
        ];

        let layout = plan_figure(&records, "X", &bins, TemperatureUnit::Fahrenheit).unwrap();
        let winter = &layout.panels[0];

        assert!(winter
            .bars
            .iter()
            .all(|b| (b.series == BarSeries::Max) == (b.height > 0)));
        assert_eq!(winter.bar_total(BarSeries::Max), 3);
        assert_eq!(winter.bar_total(BarSeries::Min), 3);
        assert_eq!(winter.counts.min_counts.iter().sum::<u64>(), 3);
        assert_eq!(winter.y_extent(), 2.0);

        let min_bar = winter
            .bars
            .iter()
            .find(|b| b.series == BarSeries::Min && b.lower == 10.0)
            .unwrap();
        assert_eq!(min_bar.height, -2);

        assert!(layout.panels[1].bars.is_empty());
        assert_eq!(layout.panels[1].y_extent(), 1.0);
    }

    #[test]
    fn test_empty_records() {
        let bins = build_bins(-40, 110, 5).unwrap();
        let result = plan_figure(&[], "X", &bins, TemperatureUnit::Fahrenheit);
        assert!(matches!(result, Err(ProcessingError::NoData(_))));
    }
}
