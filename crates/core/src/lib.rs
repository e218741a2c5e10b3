//! Domain primitives shared by the database and API crates.

pub mod entities;
pub mod error;
pub mod types;
