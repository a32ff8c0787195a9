use crate::analyzers::RecordAnalyzer;
use crate::error::{ProcessingError, Result};
use crate::models::{DailyRecord, Hemisphere, TemperatureUnit};
use crate::processors::histogram::{build_bins, Bin};
use crate::processors::season_classifier::label_seasons;
use crate::settings::Settings;
use crate::utils::constants::{DEFAULT_FIGURE_HEIGHT, DEFAULT_FIGURE_WIDTH};
use crate::writers::figure_layout::{plan_figure, Bar, BarSeries, FigureLayout, PanelLayout};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{debug, info};

const FONT: &str = "sans-serif";
const SIDE_LABEL_SIZE: i32 = 30;

fn render_error<E: std::fmt::Display>(e: E) -> ProcessingError {
    ProcessingError::Render(e.to_string())
}

/// Draws the four-panel seasonal mirrored histogram.
pub struct HistogramRenderer {
    bins: Vec<Bin>,
    unit: TemperatureUnit,
    hemisphere: Hemisphere,
    width: u32,
    height: u32,
}

impl HistogramRenderer {
    pub fn new(bins: Vec<Bin>, unit: TemperatureUnit) -> Self {
        Self {
            bins,
            unit,
            hemisphere: Hemisphere::default(),
            width: DEFAULT_FIGURE_WIDTH,
            height: DEFAULT_FIGURE_HEIGHT,
        }
    }

    pub fn from_settings(settings: &Settings, unit: TemperatureUnit) -> Result<Self> {
        let hist = &settings.histogram;
        let bins = build_bins(hist.min, hist.max, hist.step)?;

        Ok(Self::new(bins, unit).with_size(settings.figure.width, settings.figure.height))
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_hemisphere(mut self, hemisphere: Hemisphere) -> Self {
        self.hemisphere = hemisphere;
        self
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Label the records by season and lay out the figure without drawing it
    pub fn plan(&self, records: &[DailyRecord], station_id: &str) -> Result<FigureLayout> {
        let seasonal = label_seasons(records, self.hemisphere)?;
        plan_figure(&seasonal, station_id, &self.bins, self.unit)
    }

    /// Summarize, lay out and write the figure to `output_path`, replacing
    /// any file already there.
    pub fn render(&self, records: &[DailyRecord], station_id: &str, output_path: &Path) -> Result<FigureLayout> {
        self.announce(records, output_path)?;

        let layout = self.plan(records, station_id)?;
        self.write(&layout, output_path)?;

        Ok(layout)
    }

    /// Print and log the one-line overview of what is about to be plotted.
    pub fn announce(&self, records: &[DailyRecord], output_path: &Path) -> Result<String> {
        let overview = RecordAnalyzer::new().overview(records)?;
        let line = overview.summary_line(&output_path.display().to_string());

        println!("{}", line);
        info!("{}", line);
        Ok(line)
    }

    /// Write an already planned figure. `.svg` selects the SVG backend,
    /// anything else goes through the bitmap backend.
    pub fn write(&self, layout: &FigureLayout, output_path: &Path) -> Result<()> {
        let size = (self.width, self.height);
        let is_svg = output_path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

        debug!(path = %output_path.display(), svg = is_svg, width = self.width, height = self.height, "drawing figure");

        if is_svg {
            draw_figure(SVGBackend::new(output_path, size).into_drawing_area(), layout)
        } else {
            draw_figure(BitMapBackend::new(output_path, size).into_drawing_area(), layout)
        }
    }
}

fn draw_figure<DB>(root: DrawingArea<DB, Shift>, layout: &FigureLayout) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(render_error)?;

    let mut body = root.clone();
    for line in &layout.title_lines {
        body = body.titled(line, (FONT, 18)).map_err(render_error)?;
    }

    let (width, height) = body.dim_in_pixel();
    let (body, x_label_area) = body.split_vertically(height as i32 - SIDE_LABEL_SIZE);
    let (y_label_area, body) = body.split_horizontally(SIDE_LABEL_SIZE);

    let centered = Pos::new(HPos::Center, VPos::Center);
    x_label_area
        .draw_text(
            &layout.x_label,
            &TextStyle::from((FONT, 16).into_font()).pos(centered),
            (width as i32 / 2, SIDE_LABEL_SIZE / 2),
        )
        .map_err(render_error)?;

    let (_, label_height) = y_label_area.dim_in_pixel();
    y_label_area
        .draw_text(
            &layout.y_label,
            &TextStyle::from((FONT, 16).into_font().transform(FontTransform::Rotate270)).pos(centered),
            (SIDE_LABEL_SIZE / 2, label_height as i32 / 2),
        )
        .map_err(render_error)?;

    let areas = body.split_evenly((layout.panels.len(), 1));
    for (area, panel) in areas.iter().zip(&layout.panels) {
        draw_panel(area, panel, layout.x_range)?;
    }

    root.present().map_err(render_error)?;
    Ok(())
}

fn draw_panel<DB>(area: &DrawingArea<DB, Shift>, panel: &PanelLayout, x_range: (f64, f64)) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let y_top = panel.y_extent() * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 16))
        .margin(6)
        .x_label_area_size(20)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range.0..x_range.1, -y_top..y_top)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_labels(5)
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(render_error)?;

    let rect = |bar: &Bar| [(bar.lower, 0.0), (bar.upper, bar.height as f64)];

    chart
        .draw_series(panel.bars.iter().map(|bar| {
            let color = match bar.series {
                BarSeries::Max => RED,
                BarSeries::Min => BLUE,
            };
            Rectangle::new(rect(bar), color.filled())
        }))
        .map_err(render_error)?;

    chart
        .draw_series(
            panel
                .bars
                .iter()
                .map(|bar| Rectangle::new(rect(bar), BLACK.stroke_width(1))),
        )
        .map_err(render_error)?;

    Ok(())
}
