//! Handlers for the `/roles` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use opendata_core::entities::{validate_role_name, ENTITY_ROLE, ROLE_NAME_TAKEN};
use opendata_core::error::CoreError;
use opendata_core::types::DbId;
use opendata_db::models::role::{Role, RoleInput};
use opendata_db::repositories::role_repo::UQ_ROLE_NAME;
use opendata_db::repositories::{is_unique_violation, RoleRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Turn a unique violation on the role name into a typed conflict.
fn map_name_conflict(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err, UQ_ROLE_NAME) {
        AppError::Core(CoreError::Conflict(ROLE_NAME_TAKEN.to_string()))
    } else {
        AppError::Database(err)
    }
}

fn not_found(role_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_ROLE,
        id: role_id,
    })
}

/// GET /roles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(roles))
}

/// POST /roles
///
/// Fails with 400 if another role already has this name.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<RoleInput>,
) -> AppResult<(StatusCode, Json<Role>)> {
    validate_role_name(&input.name)?;

    let role = RoleRepo::create(&state.pool, &input)
        .await
        .map_err(map_name_conflict)?;

    tracing::info!(role_id = role.role_id, name = %role.name, "Role created");

    Ok((StatusCode::CREATED, Json(role)))
}

/// PUT /roles/{role_id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(role_id): AppPath<DbId>,
    AppJson(input): AppJson<RoleInput>,
) -> AppResult<Json<Role>> {
    validate_role_name(&input.name)?;

    let role = RoleRepo::update(&state.pool, role_id, &input)
        .await
        .map_err(map_name_conflict)?
        .ok_or_else(|| not_found(role_id))?;

    tracing::info!(role_id, name = %role.name, "Role updated");

    Ok(Json(role))
}

/// DELETE /roles/{role_id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(role_id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !RoleRepo::delete(&state.pool, role_id).await? {
        return Err(not_found(role_id));
    }

    tracing::info!(role_id, "Role deleted");

    Ok(Json(MessageResponse::new("Role deleted")))
}
