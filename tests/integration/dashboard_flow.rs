//! Drives the dashboard router the way the browser form does.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use section321::config::AppConfig;
use section321::dashboard::build_router;
use section321::dashboard::routes::DashboardState;

fn router(config: &str) -> axum::Router {
    let cfg = AppConfig::parse(config).unwrap();
    build_router(Arc::new(DashboardState::new(cfg.defaults)))
}

async fn call(app: axum::Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_configured_defaults_drive_blank_fields() {
    let config = r#"
        [defaults.orders]
        monthly_orders = 3000
        avg_cost_per_order = 50.0
        freight_cost = 5000.0
        hts_percentage = 5.0
    "#;

    let (status, defaults) = call(
        router(config),
        Request::builder().uri("/api/defaults").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(defaults["orders"]["monthly_orders"], 3000);

    let (status, json) = call(router(config), post("/api/savings/orders", "{}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["report"]["input"]["monthly_orders"], 3000);
    // 3000 orders is above the 2000-order breakeven
    assert_eq!(json["report"]["breakeven"]["verdict"], "beneficial");
    assert_eq!(
        json["insights"][3],
        "You're above the breakeven point, Section 321 is beneficial."
    );
}

#[tokio::test]
async fn test_zero_rate_reports_no_breakeven() {
    let (status, json) = call(
        router(""),
        post("/api/savings/purchase-orders", r#"{"hts_percentage": 0}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["report"]["savings"].as_f64(), Some(0.0));
    assert_eq!(json["report"]["breakeven"]["status"], "unreachable");
    assert_eq!(
        json["insights"][2],
        "No savings calculated. Please check your input values."
    );
}

#[tokio::test]
async fn test_out_of_range_percentage_is_rejected() {
    let (status, json) = call(
        router(""),
        post("/api/savings/purchase-orders", r#"{"hts_percentage": 120}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "hts_percentage");
}

#[tokio::test]
async fn test_negative_count_gets_json_error() {
    let (status, json) = call(
        router(""),
        post("/api/savings/orders", r#"{"monthly_orders": -5}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("monthly_orders"));
    assert_eq!(json["field"], "monthly_orders");
}

#[tokio::test]
async fn test_chart_series_are_stacked_pairs() {
    let (_, json) = call(router(""), post("/api/savings/orders", "{}")).await;
    let chart = &json["chart"];
    assert_eq!(chart["stacked"], true);
    assert_eq!(chart["categories"][0], "Without Section 321");
    assert_eq!(chart["series"][0]["values"][0].as_f64(), Some(55000.0));
    assert_eq!(chart["series"][0]["values"][1].as_f64(), Some(52250.0));
    assert_eq!(chart["series"][1]["values"][0].as_f64(), Some(0.0));
    assert_eq!(chart["series"][1]["values"][1].as_f64(), Some(2750.0));
}
