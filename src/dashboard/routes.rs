//! Dashboard API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<DashboardState>`
//! and is read-only: each request is an independent calculation.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::DefaultsConfig;
use crate::engine;
use crate::form::{OrderForm, PurchaseOrderForm};
use crate::report::Presentation;
use crate::types::{SavingsError, SavingsInput};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct DashboardState {
    pub defaults: DefaultsConfig,
}

impl DashboardState {
    pub fn new(defaults: DefaultsConfig) -> Self {
        Self { defaults }
    }
}

pub type AppState = Arc<DashboardState>;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error surfaced to the browser as `{ "error": ..., "field": ... }`.
///
/// Engine errors are always 422. Bodies that fail to parse keep axum's
/// rejection status but use the same JSON shape.
#[derive(Debug)]
pub enum ApiError {
    Calculation(SavingsError),
    Body(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, field) = match self {
            ApiError::Calculation(err) => {
                let field = match &err {
                    SavingsError::InvalidInput { field, .. } => Some(field.to_string()),
                    _ => None,
                };
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string(), field)
            }
            ApiError::Body(rejection) => {
                let error = rejection.body_text();
                let field = rejected_field(&error);
                (rejection.status(), error, field)
            }
        };
        (status, Json(json!({ "error": error, "field": field }))).into_response()
    }
}

impl From<SavingsError> for ApiError {
    fn from(err: SavingsError) -> Self {
        Self::Calculation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Request body rejected");
        Self::Body(rejection)
    }
}

/// Field name from a serde path in a rejection message, e.g.
/// `"...target type: monthly_orders: invalid value..."`.
fn rejected_field(message: &str) -> Option<String> {
    let (_, detail) = message.split_once("target type: ")?;
    let (path, _) = detail.split_once(": ")?;
    let valid = !path.is_empty()
        && path.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then(|| path.to_string())
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct DefaultsResponse {
    pub orders: OrderForm,
    pub purchase_orders: PurchaseOrderForm,
}

/// GET /api/defaults
pub async fn get_defaults(State(state): State<AppState>) -> Json<DefaultsResponse> {
    Json(DefaultsResponse {
        orders: state.defaults.orders.into(),
        purchase_orders: state.defaults.purchase_orders.into(),
    })
}

/// POST /api/savings/orders
pub async fn post_order_savings(
    State(state): State<AppState>,
    body: Result<Json<OrderForm>, JsonRejection>,
) -> Result<Json<Presentation>, ApiError> {
    let Json(form) = body?;
    let input = form.resolve(&state.defaults.orders);
    run(input.into())
}

/// POST /api/savings/purchase-orders
pub async fn post_purchase_order_savings(
    State(state): State<AppState>,
    body: Result<Json<PurchaseOrderForm>, JsonRejection>,
) -> Result<Json<Presentation>, ApiError> {
    let Json(form) = body?;
    let input = form.resolve(&state.defaults.purchase_orders);
    run(input.into())
}

fn run(input: SavingsInput) -> Result<Json<Presentation>, ApiError> {
    match engine::calculate(&input) {
        Ok(report) => {
            info!(report = %report, "Calculation served");
            Ok(Json(Presentation::new(report)))
        }
        Err(e) => {
            warn!(error = %e, "Calculation rejected");
            Err(e.into())
        }
    }
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
