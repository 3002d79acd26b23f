use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::ApiError;
use crate::{
    app_state::AppState,
    domain::models::{Supplier, SupplierId},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers))
        .route("/:id", get(get_supplier))
}

#[instrument(name = "GET /suppliers", skip(app_state))]
async fn list_suppliers(State(app_state): State<AppState>) -> Json<Vec<Supplier>> {
    Json(app_state.store.list_suppliers())
}

#[instrument(name = "GET /suppliers/:id", skip(app_state))]
async fn get_supplier(
    State(app_state): State<AppState>,
    Path(id): Path<SupplierId>,
) -> Result<Json<Supplier>, ApiError> {
    Ok(Json(app_state.store.get_supplier(&id)?))
}
