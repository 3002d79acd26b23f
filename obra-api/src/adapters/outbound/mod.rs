mod gemini;
#[cfg(test)]
mod mock;
mod unconfigured;

pub use self::gemini::GeminiReportAdapter;
#[cfg(test)]
pub use mock::{sample_report, MockReportGenerator};
pub use unconfigured::UnconfiguredReportGenerator;
