use async_trait::async_trait;

use crate::domain::{
    models::{HealthReport, ProjectSnapshot},
    ReportError,
};

/// Outbound port for the AI collaborator that writes health reports.
///
/// Implementations make exactly one attempt per call; retry policy, if any,
/// belongs to the caller.
#[async_trait]
pub trait HealthReportGenerator: Send + Sync + 'static {
    async fn generate(&self, snapshot: &ProjectSnapshot) -> Result<HealthReport, ReportError>;
}
