use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::extractors::{ApiJson, ApiPath};
use crate::models::{Item, ItemCreate, ItemUpdate};
use crate::startup::AppState;

// Each handler copies what it needs out of the store before building the
// response, so JSON encoding never runs under the store lock.

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.list())
}

pub async fn get_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Item>> {
    Ok(Json(state.items.get(id)?))
}

pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ItemCreate>,
) -> (StatusCode, Json<Item>) {
    let item = state.items.create(payload.name);
    (StatusCode::CREATED, Json(item))
}

pub async fn update_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<ItemUpdate>,
) -> AppResult<Json<Item>> {
    Ok(Json(state.items.update(id, payload.name)?))
}

pub async fn delete_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    state.items.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
