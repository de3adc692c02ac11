//! Shop item route handlers.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use shopdesk_core::ShopItemId;

use crate::error::Result;
use crate::extract::Json;
use crate::models::{CreateShopItemInput, ShopItem, UpdateShopItemInput};
use crate::state::AppState;

use super::parse_id;

/// Build the shop item routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(create))
        .route("/{id}", get(show).put(update).delete(destroy))
}

/// List all shop items.
async fn index(State(state): State<AppState>) -> Result<Json<Vec<ShopItem>>> {
    Ok(Json(state.shop_items().list_all()?))
}

/// Get a shop item by id.
async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ShopItem>> {
    let id: ShopItemId = parse_id(&id, "Invalid shop item ID")?;
    Ok(Json(state.shop_items().get_by_id(id)?))
}

/// Create a shop item.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShopItemInput>,
) -> Result<(StatusCode, Json<ShopItem>)> {
    let item = state.shop_items().create(input)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update a shop item.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateShopItemInput>,
) -> Result<Json<ShopItem>> {
    let id: ShopItemId = parse_id(&id, "Invalid shop item ID")?;
    Ok(Json(state.shop_items().update(id, input)?))
}

/// Delete a shop item.
async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id: ShopItemId = parse_id(&id, "Invalid shop item ID")?;
    state.shop_items().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
