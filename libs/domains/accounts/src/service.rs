use std::sync::Arc;
use validator::Validate;

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, CreateAccount, NewAccount, Role};
use crate::password::hash_password;
use crate::repository::AccountRepository;

/// Service layer for Account business logic
#[derive(Clone)]
pub struct AccountService<R: AccountRepository> {
    repository: Arc<R>,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every account, newest first
    pub async fn list_accounts(&self) -> AccountResult<Vec<Account>> {
        let accounts = self
            .repository
            .list()
            .await
            .map_err(|e| e.with_context("Failed to list accounts"))?;

        tracing::debug!(count = accounts.len(), "Listed accounts");
        Ok(accounts)
    }

    /// Get an account by ID
    pub async fn get_account(&self, id: i32) -> AccountResult<Account> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| e.with_context("Failed to get account"))?
            .ok_or(AccountError::NotFound(id))
    }

    /// Validate, hash the password, and store a new account
    pub async fn create_account(&self, input: CreateAccount) -> AccountResult<Account> {
        input.validate()?;

        self.insert(input)
            .await
            .map_err(|e| e.with_context("Failed to create account"))
    }

    async fn insert(&self, input: CreateAccount) -> AccountResult<Account> {
        if self
            .repository
            .get_by_email(&input.institutional_email)
            .await?
            .is_some()
        {
            tracing::info!("Email already registered");
            return Err(AccountError::DuplicateEmail(input.institutional_email));
        }

        // Already validated, so anything unparsable is absent
        let role = input
            .role
            .as_deref()
            .and_then(|role| role.parse::<Role>().ok())
            .unwrap_or_default();

        let account = self
            .repository
            .create(NewAccount {
                password_hash: hash_password(&input.password)?,
                institutional_email: input.institutional_email,
                name: input.name,
                role,
                signing_key: input.signing_key,
            })
            .await?;

        tracing::info!(account_id = account.id, role = %account.role, "Account registered");
        Ok(account)
    }
}
