//! Repository for the `role` table.

use opendata_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::{Role, RoleInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "role_id, name";

/// Unique constraint guarding `role.name`.
pub const UQ_ROLE_NAME: &str = "uq_role_name";

/// Provides CRUD operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a new role, returning the created row.
    ///
    /// Fails with a unique violation on [`UQ_ROLE_NAME`] if the name is taken.
    pub async fn create(pool: &PgPool, input: &RoleInput) -> Result<Role, sqlx::Error> {
        let query = format!("INSERT INTO role (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Role>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all roles ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM role ORDER BY role_id ASC");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Overwrite the name of a role.
    ///
    /// Returns `None` if no row with the given `role_id` exists.
    pub async fn update(
        pool: &PgPool,
        role_id: DbId,
        input: &RoleInput,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("UPDATE role SET name = $2 WHERE role_id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Role>(&query)
            .bind(role_id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a role. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, role_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM role WHERE role_id = $1")
            .bind(role_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
