use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tracing::instrument;

use super::{dashboard::StatusQuery, ApiError, JsonBody, QueryParams};
use crate::{
    adapters::inbound::http::ProjectOverviewResponse,
    app_state::AppState,
    domain::models::{
        CostCurvePoint, ExpenseFilter, NewProject, Project, ProjectId, ProjectUpdate, StageId,
        StageUpdate,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/:id", get(get_project).patch(update_project))
        .route("/:id/stages/:stage_id", patch(update_stage))
        .route("/:id/overview", get(project_overview))
        .route("/:id/cost-curve", get(cost_curve))
}

#[instrument(name = "GET /projects", skip(app_state))]
async fn list_projects(
    State(app_state): State<AppState>,
    QueryParams(query): QueryParams<StatusQuery>,
) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(app_state.store.list_projects(query.status()?)))
}

#[instrument(name = "POST /projects", skip(app_state))]
async fn create_project(
    State(app_state): State<AppState>,
    JsonBody(body): JsonBody<NewProject>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = app_state.store.create_project(body)?;
    tracing::info!("Created project {} ({})", project.name, project.id);

    Ok((StatusCode::CREATED, Json(project)))
}

#[instrument(name = "GET /projects/:id", skip(app_state))]
async fn get_project(
    State(app_state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(app_state.store.get_project(&id)?))
}

#[instrument(name = "PATCH /projects/:id", skip(app_state))]
async fn update_project(
    State(app_state): State<AppState>,
    Path(id): Path<ProjectId>,
    JsonBody(body): JsonBody<ProjectUpdate>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(app_state.store.update_project(&id, body)?))
}

#[instrument(name = "PATCH /projects/:id/stages/:stage_id", skip(app_state))]
async fn update_stage(
    State(app_state): State<AppState>,
    Path((id, stage_id)): Path<(ProjectId, StageId)>,
    JsonBody(body): JsonBody<StageUpdate>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(app_state.store.update_stage(&id, &stage_id, body)?))
}

#[instrument(name = "GET /projects/:id/overview", skip(app_state))]
async fn project_overview(
    State(app_state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> Result<Json<ProjectOverviewResponse>, ApiError> {
    let store = &app_state.store;
    let project = store.get_project(&id)?;
    let expenses = store.list_expenses(&ExpenseFilter {
        project_id: Some(id.clone()),
        ..Default::default()
    });

    Ok(Json(ProjectOverviewResponse::new(
        project,
        expenses,
        store.list_materials(Some(&id)),
        store.list_daily_logs(Some(&id)),
        store.cost_curve(&id)?,
    )))
}

#[instrument(name = "GET /projects/:id/cost-curve", skip(app_state))]
async fn cost_curve(
    State(app_state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> Result<Json<Vec<CostCurvePoint>>, ApiError> {
    Ok(Json(app_state.store.cost_curve(&id)?))
}
