use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::{ApiError, QueryParams};
use crate::{
    adapters::inbound::http::{AbcAnalysisResponse, BudgetBreakdownResponse},
    app_state::AppState,
    domain::{
        analysis::budget,
        models::{ExpenseFilter, ProjectId},
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/abc", get(abc_analysis))
        .route("/breakdown/:project_id", get(budget_breakdown))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AbcQuery {
    project_id: Option<ProjectId>,
}

/// ABC curve over every expense, or over one project's expenses.
#[instrument(name = "GET /budget/abc", skip(app_state))]
async fn abc_analysis(
    State(app_state): State<AppState>,
    QueryParams(query): QueryParams<AbcQuery>,
) -> Result<Json<AbcAnalysisResponse>, ApiError> {
    if let Some(project_id) = &query.project_id {
        app_state.store.get_project(project_id)?;
    }
    let expenses = app_state.store.list_expenses(&ExpenseFilter {
        project_id: query.project_id,
        ..Default::default()
    });

    Ok(Json(AbcAnalysisResponse::from_expenses(expenses)))
}

#[instrument(name = "GET /budget/breakdown/:project_id", skip(app_state))]
async fn budget_breakdown(
    State(app_state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> Result<Json<BudgetBreakdownResponse>, ApiError> {
    let project = app_state.store.get_project(&project_id)?;
    let expenses = app_state.store.list_expenses(&ExpenseFilter {
        project_id: Some(project_id.clone()),
        ..Default::default()
    });

    Ok(Json(BudgetBreakdownResponse {
        project_id,
        budget_total: project.budget_total,
        budget_spent: project.budget_spent,
        breakdown: budget::breakdown(&expenses, project.bdi),
    }))
}
