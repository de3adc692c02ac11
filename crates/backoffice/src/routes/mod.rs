//! HTTP route handlers for the back office API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Health check
//!
//! # Customers
//! GET    /api/customers          - List customers
//! POST   /api/customers          - Create customer
//! GET    /api/customers/{id}     - Customer by id
//! PUT    /api/customers/{id}     - Update customer
//! DELETE /api/customers/{id}     - Delete customer
//!
//! # Categories        (same verbs under /api/categories)
//! # Shop items        (same verbs under /api/shop-items)
//! # Orders            (same verbs under /api/orders)
//! ```
//!
//! Anything else, including unsupported methods on known paths, falls
//! through to a JSON 404.

pub mod categories;
pub mod customers;
pub mod orders;
pub mod shop_items;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::error::{AppError, ErrorBody, Result};
use crate::middleware::security_headers_middleware;
use crate::state::AppState;

/// Build the complete application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/customers", customers::router())
        .nest("/api/categories", categories::router())
        .nest("/api/shop-items", shop_items::router())
        .nest("/api/orders", orders::router())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Health check payload.
#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

/// Liveness check.
async fn health() -> Json<Health> {
    Json(Health {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// JSON 404 for unmatched paths.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Endpoint not found".to_owned(),
        }),
    )
}

/// Parse a path id segment into a typed id.
///
/// Ids are plain integers; anything else is a 400 with the entity-specific
/// message.
pub(crate) fn parse_id<I: From<i32>>(raw: &str, message: &str) -> Result<I> {
    raw.parse::<i32>()
        .map(I::from)
        .map_err(|_| AppError::BadRequest(message.to_owned()))
}

// ============================================================================
// Tests
// ============================================================================
