//! Repository for the `category` table.

use opendata_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategoryInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "category_id, name, parent_category_id";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CategoryInput) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO category (name, parent_category_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.parent_category_id)
            .fetch_one(pool)
            .await
    }

    /// List all categories ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category ORDER BY category_id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Replace the name and parent of a category. Both columns are written,
    /// so a `None` parent clears it.
    ///
    /// Returns `None` if no row with the given `category_id` exists.
    pub async fn update(
        pool: &PgPool,
        category_id: DbId,
        input: &CategoryInput,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE category SET \
                name = $2, \
                parent_category_id = $3 \
             WHERE category_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category_id)
            .bind(&input.name)
            .bind(input.parent_category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Returns `true` if a row was removed.
    ///
    /// Children keep their `parent_category_id` pointing at the removed row.
    pub async fn delete(pool: &PgPool, category_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM category WHERE category_id = $1")
            .bind(category_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
