pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{default_input_path, default_output_path};
pub use progress::ProgressReporter;
