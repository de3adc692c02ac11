//! Customer route handlers.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use shopdesk_core::CustomerId;

use crate::error::Result;
use crate::extract::Json;
use crate::models::{CreateCustomerInput, Customer, UpdateCustomerInput};
use crate::state::AppState;

use super::parse_id;

/// Build the customer routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(create))
        .route("/{id}", get(show).put(update).delete(destroy))
}

/// List all customers.
async fn index(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    Ok(Json(state.customers().list_all()?))
}

/// Get a customer by id.
async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Customer>> {
    let id: CustomerId = parse_id(&id, "Invalid customer ID")?;
    Ok(Json(state.customers().get_by_id(id)?))
}

/// Create a customer.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomerInput>,
) -> Result<(StatusCode, Json<Customer>)> {
    let customer = state.customers().create(input)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Update a customer.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCustomerInput>,
) -> Result<Json<Customer>> {
    let id: CustomerId = parse_id(&id, "Invalid customer ID")?;
    Ok(Json(state.customers().update(id, input)?))
}

/// Delete a customer.
async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id: CustomerId = parse_id(&id, "Invalid customer ID")?;
    state.customers().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
