//! PostgreSQL connectivity for the accounts service.
//!
//! # Features
//!
//! - `postgres` (default): SeaORM connector, migrations runner, health check
//! - `config`: `core_config::FromEnv` for [`postgres::PostgresConfig`]
//! - `all`: everything above
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "accounts_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
