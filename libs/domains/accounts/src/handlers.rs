use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::AccountResult;
use crate::models::{AccountResponse, AccountSummary, CreateAccount, Role};
use crate::repository::AccountRepository;
use crate::service::AccountService;

const TAG: &str = "accounts";

/// OpenAPI documentation for Accounts API
#[derive(OpenApi)]
#[openapi(
    paths(list_accounts, create_account, get_account),
    components(
        schemas(AccountResponse, AccountSummary, CreateAccount, Role),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Account registration and lookup")
    )
)]
pub struct ApiDoc;

/// Create the accounts router
pub fn router<R: AccountRepository + 'static>(service: AccountService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route("/{id}", get(get_account))
        .with_state(shared_service)
}

/// List all accounts, newest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of accounts", body = Vec<AccountSummary>),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn list_accounts<R: AccountRepository>(
    State(service): State<Arc<AccountService<R>>>,
) -> AccountResult<Json<Vec<AccountSummary>>> {
    let accounts = service.list_accounts().await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateAccount,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_account<R: AccountRepository>(
    State(service): State<Arc<AccountService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateAccount>,
) -> AccountResult<impl IntoResponse> {
    let account = service.create_account(input).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// Get an account by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_account<R: AccountRepository>(
    State(service): State<Arc<AccountService<R>>>,
    IdPath(id): IdPath,
) -> AccountResult<Json<AccountResponse>> {
    let account = service.get_account(id).await?;
    Ok(Json(account.into()))
}
