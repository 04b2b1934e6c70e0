//! Positive integer path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extracts a single numeric path parameter that must be `>= 1`.
///
/// Non-numeric, zero, negative and out-of-range values are rejected with a
/// 400 `INVALID_ID` error.
///
/// ```ignore
/// async fn get_account(IdPath(id): IdPath) -> String {
///     format!("Account ID: {id}")
/// }
///
/// let app = Router::new().route("/accounts/{id}", get(get_account));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl IdPath {
    /// Parse a raw path segment.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().parse::<i32>() {
            Ok(id) if id >= 1 => Ok(IdPath(id)),
            _ => Err(AppError::InvalidId(raw.to_string())),
        }
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        IdPath::parse(&raw).map_err(IntoResponse::into_response)
    }
}
