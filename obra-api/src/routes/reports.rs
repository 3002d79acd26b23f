use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::ReportStatusResponse,
    app_state::AppState,
    domain::models::ProjectId,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/:project_id", get(report_status).post(request_report))
}

/// Starts a health report; poll `GET /reports/:project_id` for the outcome.
#[instrument(name = "POST /reports/:project_id", skip(app_state))]
async fn request_report(
    State(app_state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> Result<(StatusCode, Json<ReportStatusResponse>), ApiError> {
    let state = app_state.reports.request_report(&project_id).await?;
    tracing::info!("Health report requested for project {}", project_id);

    Ok((
        StatusCode::ACCEPTED,
        Json(ReportStatusResponse { project_id, state }),
    ))
}

#[instrument(name = "GET /reports/:project_id", skip(app_state))]
async fn report_status(
    State(app_state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> Result<Json<ReportStatusResponse>, ApiError> {
    app_state.store.get_project(&project_id)?;
    let state = app_state.reports.report_state(&project_id).await;

    Ok(Json(ReportStatusResponse { project_id, state }))
}
