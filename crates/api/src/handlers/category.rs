//! Handlers for the `/categories` resource.
//!
//! `parent_category_id` is passed through to the database as received.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use opendata_core::entities::{validate_category_name, ENTITY_CATEGORY};
use opendata_core::error::CoreError;
use opendata_core::types::DbId;
use opendata_db::models::category::{Category, CategoryInput};
use opendata_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(category_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_CATEGORY,
        id: category_id,
    })
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CategoryInput>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_category_name(&input.name)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.category_id,
        parent_category_id = ?category.parent_category_id,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categories/{category_id}
///
/// Full replacement: an omitted `parent_category_id` clears the parent.
pub async fn update(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
    AppJson(input): AppJson<CategoryInput>,
) -> AppResult<Json<Category>> {
    validate_category_name(&input.name)?;

    let category = CategoryRepo::update(&state.pool, category_id, &input)
        .await?
        .ok_or_else(|| not_found(category_id))?;

    tracing::info!(
        category_id,
        parent_category_id = ?category.parent_category_id,
        "Category updated"
    );

    Ok(Json(category))
}

/// DELETE /categories/{category_id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !CategoryRepo::delete(&state.pool, category_id).await? {
        return Err(not_found(category_id));
    }

    tracing::info!(category_id, "Category deleted");

    Ok(Json(MessageResponse::new("Category deleted")))
}
