mod format;
mod output;

pub use format::ReportFormat;
pub use output::{OutputOptions, emit, render};
