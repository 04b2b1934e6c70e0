use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Account not found: {0}")]
    NotFound(i32),

    #[error("Account with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Database(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    /// Prefixes data-store failures with the operation that hit them.
    /// Other variants pass through untouched.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            AccountError::Database(msg) => AccountError::Database(format!("{context}: {msg}")),
            other => other,
        }
    }
}

impl From<sea_orm::DbErr> for AccountError {
    fn from(err: sea_orm::DbErr) -> Self {
        AccountError::Database(err.to_string())
    }
}

/// Convert AccountError to AppError for standardized error responses
impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(id) => AppError::NotFound(format!("Account {id} not found")),
            AccountError::DuplicateEmail(email) => {
                AppError::Conflict(format!("Account with email '{email}' already exists"))
            }
            AccountError::Validation(errors) => AppError::ValidationError(errors),
            AccountError::Database(msg) => AppError::BadRequest(msg),
            AccountError::PasswordHash(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
