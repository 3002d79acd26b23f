use std::str::FromStr;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;
use tracing::instrument;

use super::{ApiError, QueryParams};
use crate::{
    adapters::inbound::http::DashboardResponse,
    app_state::AppState,
    domain::{analysis::kpi, models::ProjectStatus},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusQuery {
    status: Option<String>,
}

impl StatusQuery {
    /// `None` for a missing, empty or `all` filter.
    pub(crate) fn status(&self) -> Result<Option<ProjectStatus>, ApiError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
            Some(s) => ProjectStatus::from_str(s)
                .map(Some)
                .map_err(|_| ApiError::bad_request(format!("unknown project status: {s}"))),
        }
    }
}

#[instrument(name = "GET /dashboard", skip(app_state))]
async fn dashboard(
    State(app_state): State<AppState>,
    QueryParams(query): QueryParams<StatusQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let projects = app_state.store.list_projects(query.status()?);
    let kpis = kpi::aggregate(&projects);
    tracing::debug!(
        "Dashboard over {} projects, {:.1}% of budget spent",
        kpis.project_count,
        kpis.budget_utilization
    );

    Ok(Json(DashboardResponse { kpis, projects }))
}
