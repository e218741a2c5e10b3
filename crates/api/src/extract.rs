//! Extractors whose rejections render through [`AppError`].
//!
//! Plain `axum::Json` / `axum::extract::Path` answer malformed input with a
//! text body; these wrappers keep the JSON error shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
