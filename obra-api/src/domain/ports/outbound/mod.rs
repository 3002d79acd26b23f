mod project_snapshot;
mod report_generator;

pub use project_snapshot::*;
pub use report_generator::*;
