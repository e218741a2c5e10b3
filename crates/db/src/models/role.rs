//! Role entity model and DTOs.

use opendata_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `role` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Role {
    pub role_id: DbId,
    pub name: String,
}

/// DTO for creating a role or replacing an existing one.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleInput {
    pub name: String,
}
