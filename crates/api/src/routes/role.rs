//! Route definitions for roles.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::role;
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// PUT    /{role_id}   -> update
/// DELETE /{role_id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(role::list).post(role::create))
        .route("/{role_id}", put(role::update).delete(role::delete))
}
