//! Extractors whose rejections render through [`AppError`].
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies (and 422 for
//! type mismatches). Wrapping them keeps every failure in the
//! `{ "error", "code" }` envelope with a 400 status.

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
