use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{ApiError, JsonBody};
use crate::{
    app_state::AppState,
    domain::models::{NewWorker, Worker, WorkerId, WorkerUpdate},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workers).post(create_worker))
        .route("/:id", get(get_worker).patch(update_worker))
}

#[instrument(name = "GET /workers", skip(app_state))]
async fn list_workers(State(app_state): State<AppState>) -> Json<Vec<Worker>> {
    Json(app_state.store.list_workers())
}

#[instrument(name = "POST /workers", skip(app_state))]
async fn create_worker(
    State(app_state): State<AppState>,
    JsonBody(body): JsonBody<NewWorker>,
) -> Result<(StatusCode, Json<Worker>), ApiError> {
    let worker = app_state.store.create_worker(body)?;
    Ok((StatusCode::CREATED, Json(worker)))
}

#[instrument(name = "GET /workers/:id", skip(app_state))]
async fn get_worker(
    State(app_state): State<AppState>,
    Path(id): Path<WorkerId>,
) -> Result<Json<Worker>, ApiError> {
    Ok(Json(app_state.store.get_worker(&id)?))
}

#[instrument(name = "PATCH /workers/:id", skip(app_state))]
async fn update_worker(
    State(app_state): State<AppState>,
    Path(id): Path<WorkerId>,
    JsonBody(body): JsonBody<WorkerUpdate>,
) -> Result<Json<Worker>, ApiError> {
    Ok(Json(app_state.store.update_worker(&id, body)?))
}
