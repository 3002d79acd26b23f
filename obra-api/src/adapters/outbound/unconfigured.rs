use async_trait::async_trait;

use crate::domain::{
    models::{HealthReport, ProjectSnapshot},
    ports::outbound::HealthReportGenerator,
    ReportError,
};

/// Stand-in used when no API key is configured; every report fails with
/// [`ReportError::NotConfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredReportGenerator;

#[async_trait]
impl HealthReportGenerator for UnconfiguredReportGenerator {
    async fn generate(&self, _snapshot: &ProjectSnapshot) -> Result<HealthReport, ReportError> {
        Err(ReportError::NotConfigured)
    }
}
