//! JSON extractor with validation through the `validator` crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes a JSON body and runs its `Validate` rules.
///
/// Rejections go through [`AppError`]:
/// - body fields with the wrong type or missing: 400 `VALIDATION_ERROR`
/// - rule violations: 400 `VALIDATION_ERROR` with per-field `details`
/// - malformed JSON: 400 `INVALID_JSON`
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateAccount {
///     #[validate(email)]
///     institutional_email: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateAccount>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
