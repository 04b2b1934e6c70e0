//! Accounts Domain
//!
//! Registration and lookup of institutional user accounts.
//!
//! # Architecture
//!
//! ```text
//! handlers  ->  AccountService  ->  AccountRepository
//!                    |                 |-- InMemoryAccountRepository
//!                 password             `-- PgAccountRepository (entity)
//! ```
//!
//! The service owns validation, the duplicate-email check and password
//! hashing. Repositories only persist, but must still surface a unique
//! email clash as [`AccountError::DuplicateEmail`].

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{AccountError, AccountResult};
pub use handlers::ApiDoc;
pub use models::{Account, AccountResponse, AccountSummary, CreateAccount, NewAccount, Role};
pub use password::{hash_password, verify_password};
pub use postgres::PgAccountRepository;
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use service::AccountService;
