//! Route definitions for categories.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// PUT    /{category_id}   -> update
/// DELETE /{category_id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list).post(category::create))
        .route(
            "/{category_id}",
            put(category::update).delete(category::delete),
        )
}
