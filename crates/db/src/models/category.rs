//! Category entity model and DTOs.
//!
//! `parent_category_id` is stored as given; it is neither checked for
//! existence nor for cycles.

use opendata_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `category` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub category_id: DbId,
    pub name: String,
    pub parent_category_id: Option<DbId>,
}

/// DTO for creating a category or replacing an existing one.
///
/// An omitted `parent_category_id` deserializes to `None`, so a PUT without
/// it clears the parent.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub parent_category_id: Option<DbId>,
}
