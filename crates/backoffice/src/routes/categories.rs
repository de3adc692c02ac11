//! Category route handlers.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use shopdesk_core::CategoryId;

use crate::error::Result;
use crate::extract::Json;
use crate::models::{CreateCategoryInput, ShopItemCategory, UpdateCategoryInput};
use crate::state::AppState;

use super::parse_id;

/// Build the category routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(create))
        .route("/{id}", get(show).put(update).delete(destroy))
}

/// List all categories.
async fn index(State(state): State<AppState>) -> Result<Json<Vec<ShopItemCategory>>> {
    Ok(Json(state.categories().list_all()?))
}

/// Get a category by id.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShopItemCategory>> {
    let id: CategoryId = parse_id(&id, "Invalid category ID")?;
    Ok(Json(state.categories().get_by_id(id)?))
}

/// Create a category.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategoryInput>,
) -> Result<(StatusCode, Json<ShopItemCategory>)> {
    let category = state.categories().create(input)?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCategoryInput>,
) -> Result<Json<ShopItemCategory>> {
    let id: CategoryId = parse_id(&id, "Invalid category ID")?;
    Ok(Json(state.categories().update(id, input)?))
}

/// Delete a category.
async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id: CategoryId = parse_id(&id, "Invalid category ID")?;
    state.categories().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
