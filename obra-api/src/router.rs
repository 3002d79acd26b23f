use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

/// All API routes, without middleware.
pub fn app(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/", get(|| async { "Obra API is running" }))
        .nest("/dashboard", routes::dashboard::router())
        .nest("/projects", routes::projects::router())
        .nest("/expenses", routes::expenses::router())
        .nest("/budget", routes::budget::router())
        .nest("/materials", routes::materials::router())
        .nest("/workers", routes::workers::router())
        .nest("/equipment", routes::equipment::router())
        .nest("/daily-logs", routes::daily_logs::router())
        .nest("/suppliers", routes::suppliers::router())
        .nest("/reports", routes::reports::router())
        .with_state(app_state)
}

pub fn create(app_state: AppState, config: &Settings) -> Router<()> {
    let app_url = config.application.app_url.clone();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _| origin.as_bytes() == app_url.as_bytes(),
        ));

    app(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tokio::sync::Notify;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        adapters::outbound::{sample_report, MockReportGenerator, UnconfiguredReportGenerator},
        domain::{ports::outbound::HealthReportGenerator, services::ReportServiceImpl},
        repositories::{demo_data, SiteStore},
    };

    fn test_app<G: HealthReportGenerator>(generator: G) -> Router<()> {
        let store = Arc::new(SiteStore::with_data(demo_data()));
        let reports = ReportServiceImpl::new(store.clone(), Arc::new(generator));
        app(AppState::new(store, Arc::new(reports)))
    }

    fn demo_app() -> Router<()> {
        test_app(MockReportGenerator::returning(sample_report()))
    }

    async fn send(app: &Router<()>, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn settled_report(app: &Router<()>, project_id: &str) -> Value {
        for _ in 0..200 {
            let body = json_body(send(app, "GET", &format!("/reports/{project_id}"), None).await).await;
            if body["state"] != "pending" {
                return body;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("report never settled");
    }

    #[tokio::test]
    async fn root_answers() {
        let response = send(&demo_app(), "GET", "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn dashboard_aggregates_filtered_projects() {
        let app = demo_app();

        let all = json_body(send(&app, "GET", "/dashboard", None).await).await;
        assert_eq!(all["kpis"]["projectCount"], 2);
        assert_eq!(all["kpis"]["totalBudget"], 1_850_000.0);

        let active = json_body(send(&app, "GET", "/dashboard?status=active", None).await).await;
        assert_eq!(active["kpis"]["projectCount"], 1);
        assert_eq!(active["projects"][0]["name"], "Residencial Altos do Lago");

        let everything = json_body(send(&app, "GET", "/dashboard?status=all", None).await).await;
        assert_eq!(everything["kpis"]["projectCount"], 2);
    }

    #[tokio::test]
    async fn unknown_status_filter_is_a_bad_request() {
        let response = send(&demo_app(), "GET", "/dashboard?status=demolished", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn empty_portfolio_dashboard_is_all_zero() {
        let store = Arc::new(SiteStore::new());
        let reports = ReportServiceImpl::new(store.clone(), Arc::new(UnconfiguredReportGenerator));
        let app = app(AppState::new(store, Arc::new(reports)));

        let body = json_body(send(&app, "GET", "/dashboard", None).await).await;
        assert_eq!(body["kpis"]["projectCount"], 0);
        assert_eq!(body["kpis"]["averageCostPerSqm"], 0.0);
        assert_eq!(body["projects"], json!([]));
    }

    #[tokio::test]
    async fn creates_and_lists_expense_first() {
        let app = demo_app();
        let response = send(
            &app,
            "POST",
            "/expenses",
            Some(json!({
                "description": "Brita 1",
                "category": "Material",
                "amount": 2200,
                "date": "2024-02-21",
                "projectId": "1"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["status"], "pending");

        let list = json_body(send(&app, "GET", "/expenses?projectId=1", None).await).await;
        assert_eq!(list["expenses"][0]["id"], created["id"]);
        assert_eq!(list["total"], 49_900.0);
    }

    #[tokio::test]
    async fn expense_search_is_case_insensitive() {
        let list = json_body(send(&demo_app(), "GET", "/expenses?search=CONCRETO", None).await).await;
        assert_eq!(list["expenses"].as_array().unwrap().len(), 1);
        assert_eq!(list["total"], 15_000.0);
    }

    #[tokio::test]
    async fn invalid_expense_is_rejected_and_not_stored() {
        let app = demo_app();
        let response = send(
            &app,
            "POST",
            "/expenses",
            Some(json!({ "category": "Labor", "amount": -10, "projectId": "1" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], "VALIDATION_FAILED");

        let list = json_body(send(&app, "GET", "/expenses", None).await).await;
        assert_eq!(list["expenses"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn malformed_json_gets_json_error() {
        let response = send(&demo_app(), "POST", "/projects", Some(json!({ "budgetTotal": "lots" }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let response = send(&demo_app(), "GET", "/projects/404", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["error"], "project not found: 404");
    }

    #[tokio::test]
    async fn abc_analysis_classifies_project_expenses() {
        let body = json_body(send(&demo_app(), "GET", "/budget/abc?projectId=1", None).await).await;
        let entries = body["entries"].as_array().unwrap();

        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0]["amount"], 15_000.0);
        assert_eq!(entries.last().unwrap()["cumulativePercentage"], 100.0);
        assert_eq!(body["summary"]["total"], 47_700.0);
    }

    #[tokio::test]
    async fn abc_analysis_of_project_without_expenses_is_empty() {
        let body = json_body(send(&demo_app(), "GET", "/budget/abc?projectId=2", None).await).await;
        assert_eq!(body["entries"], json!([]));
        assert_eq!(body["summary"]["total"], 0.0);
    }

    #[tokio::test]
    async fn budget_breakdown_applies_bdi() {
        let body = json_body(send(&demo_app(), "GET", "/budget/breakdown/1", None).await).await;
        assert_eq!(body["directCosts"], 44_200.0);
        assert_eq!(body["indirectCosts"], 3_500.0);
        assert_eq!(body["pending"], 5_300.0);
        assert_eq!(body["bdi"], 22.5);
        assert_eq!(body["budgetTotal"], 1_500_000.0);
    }

    #[tokio::test]
    async fn overview_combines_derived_views() {
        let body = json_body(send(&demo_app(), "GET", "/projects/1/overview", None).await).await;
        assert_eq!(body["project"]["id"], "1");
        assert_eq!(body["topExpenses"].as_array().unwrap().len(), 5);
        assert_eq!(body["lowStock"][0]["name"], "Porcelanato 80x80");
        assert_eq!(body["latestLog"]["id"], "d1");
        assert_eq!(body["costCurve"].as_array().unwrap().len(), 6);
        assert_eq!(body["kpis"]["remainingBudget"], 520_000.0);
    }

    #[tokio::test]
    async fn stage_update_validates_progress() {
        let app = demo_app();
        let response = send(&app, "PATCH", "/projects/1/stages/s4", Some(json!({ "progress": 140 }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "PATCH", "/projects/1/stages/s4", Some(json!({ "progress": 60 }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["stages"][3]["progress"], 60);
    }

    #[tokio::test]
    async fn material_consumption_updates_stock() {
        let app = demo_app();
        let response = send(
            &app,
            "POST",
            "/materials/3/consumption",
            Some(json!({ "used": 4, "wasted": 0.5 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["quantityUsed"], 16.0);
        assert_eq!(body["lowStock"], true);

        let response = send(&app, "POST", "/materials/3/consumption", Some(json!({ "used": 100 }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn material_form_without_supplier_is_created() {
        let response = send(
            &demo_app(),
            "POST",
            "/materials",
            Some(json!({
                "name": "Areia média",
                "unit": "m³",
                "quantityTotal": 40,
                "costPerUnit": 120,
                "projectId": "1",
                "supplierId": ""
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(json_body(response).await.get("supplierId").is_none());
    }

    #[tokio::test]
    async fn equipment_in_use_requires_assignment() {
        let response = send(
            &demo_app(),
            "POST",
            "/equipment",
            Some(json!({ "name": "Grua", "costPerDay": 900, "status": "InUse" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn report_flow_goes_from_pending_to_ready() {
        let app = demo_app();

        let idle = json_body(send(&app, "GET", "/reports/1", None).await).await;
        assert_eq!(idle["state"], "idle");

        let response = send(&app, "POST", "/reports/1", None).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(json_body(response).await["state"], "pending");

        let ready = settled_report(&app, "1").await;
        assert_eq!(ready["state"], "ready");
        assert_eq!(ready["report"]["risks"].as_array().unwrap().len(), 3);
        assert!(ready["report"]["savingsPotential"].is_string());
    }

    #[tokio::test]
    async fn concurrent_report_request_conflicts() {
        let gate = Arc::new(Notify::new());
        let app = test_app(MockReportGenerator::returning(sample_report()).with_gate(gate.clone()));

        assert_eq!(send(&app, "POST", "/reports/1", None).await.status(), StatusCode::ACCEPTED);
        let second = send(&app, "POST", "/reports/1", None).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(second).await["code"], "REPORT_PENDING");

        gate.notify_one();
        assert_eq!(settled_report(&app, "1").await["state"], "ready");
    }

    #[tokio::test]
    async fn failed_report_shows_message() {
        let app = test_app(MockReportGenerator::failing());

        send(&app, "POST", "/reports/1", None).await;
        let failed = settled_report(&app, "1").await;
        assert_eq!(failed["state"], "failed");
        assert!(failed["message"].as_str().unwrap().contains("Falha ao analisar"));
        assert!(failed.get("report").is_none());
    }

    #[tokio::test]
    async fn unconfigured_reports_fail_without_crashing() {
        let app = test_app(UnconfiguredReportGenerator);

        assert_eq!(send(&app, "POST", "/reports/1", None).await.status(), StatusCode::ACCEPTED);
        let failed = settled_report(&app, "1").await;
        assert_eq!(failed["state"], "failed");
        assert!(failed["message"].as_str().unwrap().contains("não está configurada"));
    }

    #[tokio::test]
    async fn report_for_unknown_project_is_not_found() {
        let app = demo_app();
        assert_eq!(send(&app, "POST", "/reports/404", None).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(send(&app, "GET", "/reports/404", None).await.status(), StatusCode::NOT_FOUND);
    }
}
