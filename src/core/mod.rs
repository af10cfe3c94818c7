pub mod filter;
pub mod histogram;
pub mod log_file;
pub mod pipeline;

pub use filter::TaskFilter;
pub use histogram::HistogramStyle;
pub use pipeline::{run_pipeline, PipelineConfig};
