pub mod figure_layout;
pub mod histogram_renderer;

pub use figure_layout::{plan_figure, Bar, BarSeries, FigureLayout, PanelLayout};
pub use histogram_renderer::HistogramRenderer;
