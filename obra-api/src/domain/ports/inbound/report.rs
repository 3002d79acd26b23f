use async_trait::async_trait;

use crate::domain::{
    models::{ProjectId, ReportState},
    ReportError,
};

/// Inbound port for project health reports.
#[async_trait]
pub trait ReportService: Send + Sync + 'static {
    /// Starts generating a report for `project_id` and returns the pending
    /// state right away. Fails with [`ReportError::AlreadyPending`] while a
    /// previous request for the same project is still running.
    async fn request_report(&self, project_id: &ProjectId) -> Result<ReportState, ReportError>;

    /// Current state for `project_id`; `Idle` if never requested.
    async fn report_state(&self, project_id: &ProjectId) -> ReportState;
}
