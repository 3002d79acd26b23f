use crate::domain::{
    models::{ProjectId, ProjectSnapshot},
    StoreError,
};

/// Read access to the records a health report is written from.
pub trait ProjectSnapshotProvider: Send + Sync + 'static {
    fn snapshot(&self, project_id: &ProjectId) -> Result<ProjectSnapshot, StoreError>;
}
