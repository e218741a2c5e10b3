//! Request handlers.
//!
//! Each submodule provides async handler functions (list, create, update,
//! delete) for a single table. Handlers validate input in `opendata_core`,
//! delegate to the corresponding repository in `opendata_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod category;
pub mod role;
