use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::{ApiError, JsonBody, QueryParams};
use crate::{
    adapters::inbound::http::MaterialResponse,
    app_state::AppState,
    domain::models::{MaterialConsumption, MaterialId, NewMaterial, ProjectId},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_materials).post(create_material))
        .route("/:id", get(get_material))
        .route("/:id/consumption", post(record_consumption))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MaterialsQuery {
    project_id: Option<ProjectId>,
}

#[instrument(name = "GET /materials", skip(app_state))]
async fn list_materials(
    State(app_state): State<AppState>,
    QueryParams(query): QueryParams<MaterialsQuery>,
) -> Json<Vec<MaterialResponse>> {
    let materials = app_state.store.list_materials(query.project_id.as_ref());
    Json(materials.into_iter().map(MaterialResponse::from).collect())
}

#[instrument(name = "POST /materials", skip(app_state))]
async fn create_material(
    State(app_state): State<AppState>,
    JsonBody(body): JsonBody<NewMaterial>,
) -> Result<(StatusCode, Json<MaterialResponse>), ApiError> {
    let material = app_state.store.create_material(body)?;
    Ok((StatusCode::CREATED, Json(material.into())))
}

#[instrument(name = "GET /materials/:id", skip(app_state))]
async fn get_material(
    State(app_state): State<AppState>,
    Path(id): Path<MaterialId>,
) -> Result<Json<MaterialResponse>, ApiError> {
    Ok(Json(app_state.store.get_material(&id)?.into()))
}

#[instrument(name = "POST /materials/:id/consumption", skip(app_state))]
async fn record_consumption(
    State(app_state): State<AppState>,
    Path(id): Path<MaterialId>,
    JsonBody(body): JsonBody<MaterialConsumption>,
) -> Result<Json<MaterialResponse>, ApiError> {
    let material = app_state.store.record_consumption(&id, body)?;
    if material.is_low_stock() {
        tracing::warn!(
            "Material {} is low on stock: {} {} left",
            material.name,
            material.remaining(),
            material.unit
        );
    }

    Ok(Json(material.into()))
}
