//! Create endpoints for the entities that live in external datasources.
//!
//! - `POST /api/v1/users`
//! - `POST /api/v2/companies`
//! - `POST /api/v3/brands`

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::extractors::ApiJson;
use crate::models::{Brand, Company, CreatedId, User};
use crate::startup::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<User>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    let id = state
        .users
        .create_user(&payload.name, &payload.last_name)
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

pub async fn create_company(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Company>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    let id = state.companies.create_company(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

pub async fn create_brand(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Brand>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    let id = state.brands.create_brand(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(CreatedId { id })))
}
