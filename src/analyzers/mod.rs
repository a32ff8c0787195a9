pub mod record_analyzer;

pub use record_analyzer::{ColumnStats, Description, RecordAnalyzer, RecordOverview};
