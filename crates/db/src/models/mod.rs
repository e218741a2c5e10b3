//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` DTO carrying every mutable column, used by both
//!   create and full-replacement update

pub mod category;
pub mod role;
