use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` with body rejections reported as `AppError::Validation`,
/// so malformed or mistyped fields get the same 400 error body as every
/// other validation failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
