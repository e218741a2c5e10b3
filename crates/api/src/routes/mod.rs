pub mod category;
pub mod health;
pub mod role;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /roles                          list, create
/// /roles/{role_id}                update, delete
///
/// /categories                     list, create
/// /categories/{category_id}       update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/roles", role::router())
        .nest("/categories", category::router())
}
