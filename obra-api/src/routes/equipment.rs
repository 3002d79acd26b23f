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
    domain::models::{Equipment, EquipmentId, EquipmentStatus, EquipmentUpdate, NewEquipment},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_equipment).post(create_equipment))
        .route("/:id", get(get_equipment).patch(update_equipment))
}

#[derive(Debug, Deserialize)]
struct EquipmentQuery {
    status: Option<EquipmentStatus>,
}

#[instrument(name = "GET /equipment", skip(app_state))]
async fn list_equipment(
    State(app_state): State<AppState>,
    QueryParams(query): QueryParams<EquipmentQuery>,
) -> Json<Vec<Equipment>> {
    Json(app_state.store.list_equipment(query.status))
}

#[instrument(name = "POST /equipment", skip(app_state))]
async fn create_equipment(
    State(app_state): State<AppState>,
    JsonBody(body): JsonBody<NewEquipment>,
) -> Result<(StatusCode, Json<Equipment>), ApiError> {
    let equipment = app_state.store.create_equipment(body)?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

#[instrument(name = "GET /equipment/:id", skip(app_state))]
async fn get_equipment(
    State(app_state): State<AppState>,
    Path(id): Path<EquipmentId>,
) -> Result<Json<Equipment>, ApiError> {
    Ok(Json(app_state.store.get_equipment(&id)?))
}

#[instrument(name = "PATCH /equipment/:id", skip(app_state))]
async fn update_equipment(
    State(app_state): State<AppState>,
    Path(id): Path<EquipmentId>,
    JsonBody(body): JsonBody<EquipmentUpdate>,
) -> Result<Json<Equipment>, ApiError> {
    Ok(Json(app_state.store.update_equipment(&id, body)?))
}
