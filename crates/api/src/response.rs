//! Shared response body types for API handlers.
//!
//! Entity endpoints return the row itself (no envelope); only acknowledgements
//! without a row, such as deletes, use [`MessageResponse`].

use serde::Serialize;

/// `{ "message": "..." }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
