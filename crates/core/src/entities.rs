//! Entity names and input validation for roles and categories.
//!
//! Validation runs before any SQL is issued so that malformed names never
//! reach the database.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Display name used in errors and logs for the `role` table.
pub const ENTITY_ROLE: &str = "Role";

/// Display name used in errors and logs for the `category` table.
pub const ENTITY_CATEGORY: &str = "Category";

/// Maximum allowed length for a role or category name.
///
/// Matches the `VARCHAR(255)` columns in the schema.
pub const MAX_NAME_LENGTH: usize = 255;

/// Message returned when a role name collides with an existing row.
pub const ROLE_NAME_TAKEN: &str = "Role with this name already exists";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an entity name: must contain at least one non-whitespace
/// character, no control characters (Postgres text cannot hold NUL), and be
/// at most [`MAX_NAME_LENGTH`] characters long.
///
/// `entity` is only used to build the error message.
pub fn validate_name(entity: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    if name.chars().any(char::is_control) {
        return Err(CoreError::Validation(format!(
            "{entity} name must not contain control characters"
        )));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{entity} name must not exceed {MAX_NAME_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate a role name.
pub fn validate_role_name(name: &str) -> Result<(), CoreError> {
    validate_name(ENTITY_ROLE, name)
}

/// Validate a category name.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    validate_name(ENTITY_CATEGORY, name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
