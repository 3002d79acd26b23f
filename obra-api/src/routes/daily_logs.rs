use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::{ApiError, JsonBody, QueryParams};
use crate::{
    app_state::AppState,
    domain::models::{DailyLog, DailyLogId, NewDailyLog, ProjectId},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_daily_logs).post(create_daily_log))
        .route("/:id", get(get_daily_log))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyLogsQuery {
    project_id: Option<ProjectId>,
}

#[instrument(name = "GET /daily-logs", skip(app_state))]
async fn list_daily_logs(
    State(app_state): State<AppState>,
    QueryParams(query): QueryParams<DailyLogsQuery>,
) -> Json<Vec<DailyLog>> {
    Json(app_state.store.list_daily_logs(query.project_id.as_ref()))
}

#[instrument(name = "POST /daily-logs", skip(app_state))]
async fn create_daily_log(
    State(app_state): State<AppState>,
    JsonBody(body): JsonBody<NewDailyLog>,
) -> Result<(StatusCode, Json<DailyLog>), ApiError> {
    let log = app_state.store.create_daily_log(body)?;
    Ok((StatusCode::CREATED, Json(log)))
}

#[instrument(name = "GET /daily-logs/:id", skip(app_state))]
async fn get_daily_log(
    State(app_state): State<AppState>,
    Path(id): Path<DailyLogId>,
) -> Result<Json<DailyLog>, ApiError> {
    Ok(Json(app_state.store.get_daily_log(&id)?))
}
