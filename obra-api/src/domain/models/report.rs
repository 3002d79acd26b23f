use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Expense, Material, Project};

/// Narrative health report produced by the AI collaborator.
///
/// All four fields are required; a response missing any of them is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub summary: String,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
    pub savings_potential: String,
}

/// Data handed to the report generator.
#[derive(Debug, Clone)]
pub struct ProjectSnapshot {
    pub project: Project,
    pub expenses: Vec<Expense>,
    pub materials: Vec<Material>,
}

/// Per-project view model of the report request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ReportState {
    Idle,
    #[serde(rename_all = "camelCase")]
    Pending {
        #[serde(with = "time::serde::rfc3339")]
        requested_at: OffsetDateTime,
    },
    #[serde(rename_all = "camelCase")]
    Ready {
        report: HealthReport,
        #[serde(with = "time::serde::rfc3339")]
        generated_at: OffsetDateTime,
    },
    #[serde(rename_all = "camelCase")]
    Failed {
        message: String,
        #[serde(with = "time::serde::rfc3339")]
        failed_at: OffsetDateTime,
    },
}

impl ReportState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ReportState::Pending { .. })
    }

    pub fn report(&self) -> Option<&HealthReport> {
        match self {
            ReportState::Ready { report, .. } => Some(report),
            _ => None,
        }
    }
}
