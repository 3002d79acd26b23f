mod report;

pub use report::{ReportServiceImpl, DEFAULT_REPORT_TIMEOUT};
