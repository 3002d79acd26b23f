use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{ApiError, JsonBody, QueryParams};
use crate::{
    adapters::inbound::http::ExpenseListResponse,
    app_state::AppState,
    domain::{
        analysis::budget,
        models::{Expense, ExpenseFilter, ExpenseId, ExpenseUpdate, NewExpense},
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/:id", get(get_expense).patch(update_expense))
}

#[instrument(name = "GET /expenses", skip(app_state))]
async fn list_expenses(
    State(app_state): State<AppState>,
    QueryParams(filter): QueryParams<ExpenseFilter>,
) -> Json<ExpenseListResponse> {
    let expenses = app_state.store.list_expenses(&filter);
    let total = budget::total(&expenses);

    Json(ExpenseListResponse { expenses, total })
}

#[instrument(name = "POST /expenses", skip(app_state))]
async fn create_expense(
    State(app_state): State<AppState>,
    JsonBody(body): JsonBody<NewExpense>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = app_state.store.create_expense(body)?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[instrument(name = "GET /expenses/:id", skip(app_state))]
async fn get_expense(
    State(app_state): State<AppState>,
    Path(id): Path<ExpenseId>,
) -> Result<Json<Expense>, ApiError> {
    Ok(Json(app_state.store.get_expense(&id)?))
}

#[instrument(name = "PATCH /expenses/:id", skip(app_state))]
async fn update_expense(
    State(app_state): State<AppState>,
    Path(id): Path<ExpenseId>,
    JsonBody(body): JsonBody<ExpenseUpdate>,
) -> Result<Json<Expense>, ApiError> {
    Ok(Json(app_state.store.update_expense(&id, body)?))
}
