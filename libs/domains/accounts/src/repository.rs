use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, NewAccount};

/// Repository trait for Account persistence
///
/// Implementations must treat `institutional_email` as unique and report a
/// clash as [`AccountError::DuplicateEmail`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account; id and created_at are assigned by the store
    async fn create(&self, input: NewAccount) -> AccountResult<Account>;

    /// Get an account by ID
    async fn get_by_id(&self, id: i32) -> AccountResult<Option<Account>>;

    /// Get an account by exact institutional email
    async fn get_by_email(&self, email: &str) -> AccountResult<Option<Account>>;

    /// All accounts, newest first
    async fn list(&self) -> AccountResult<Vec<Account>>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    accounts: HashMap<i32, Account>,
}

/// In-memory implementation of AccountRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, input: NewAccount) -> AccountResult<Account> {
        let mut store = self.store.write().await;

        if store
            .accounts
            .values()
            .any(|a| a.institutional_email == input.institutional_email)
        {
            return Err(AccountError::DuplicateEmail(input.institutional_email));
        }

        store.next_id += 1;
        let account = Account {
            id: store.next_id,
            institutional_email: input.institutional_email,
            name: input.name,
            password_hash: input.password_hash,
            role: input.role,
            signing_key: input.signing_key,
            created_at: Utc::now(),
        };
        store.accounts.insert(account.id, account.clone());

        tracing::info!(account_id = account.id, "Created account");
        Ok(account)
    }

    async fn get_by_id(&self, id: i32) -> AccountResult<Option<Account>> {
        let store = self.store.read().await;
        Ok(store.accounts.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let store = self.store.read().await;
        Ok(store
            .accounts
            .values()
            .find(|a| a.institutional_email == email)
            .cloned())
    }

    async fn list(&self) -> AccountResult<Vec<Account>> {
        let store = self.store.read().await;
        let mut result: Vec<Account> = store.accounts.values().cloned().collect();

        // Ties on created_at fall back to the later id first
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(result)
    }
}
