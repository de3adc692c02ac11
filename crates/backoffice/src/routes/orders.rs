//! Order route handlers.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use shopdesk_core::OrderId;

use crate::error::Result;
use crate::extract::Json;
use crate::models::{CreateOrderInput, Order, UpdateOrderInput};
use crate::state::AppState;

use super::parse_id;

/// Build the order routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(create))
        .route("/{id}", get(show).put(update).delete(destroy))
}

/// List all orders.
async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_all()?))
}

/// Get an order by id.
async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Order>> {
    let id: OrderId = parse_id(&id, "Invalid order ID")?;
    Ok(Json(state.orders().get_by_id(id)?))
}

/// Create an order.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderInput>,
) -> Result<(StatusCode, Json<Order>)> {
    let order = state.orders().create(input)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Update an order.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateOrderInput>,
) -> Result<Json<Order>> {
    let id: OrderId = parse_id(&id, "Invalid order ID")?;
    Ok(Json(state.orders().update(id, input)?))
}

/// Delete an order.
async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id: OrderId = parse_id(&id, "Invalid order ID")?;
    state.orders().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
