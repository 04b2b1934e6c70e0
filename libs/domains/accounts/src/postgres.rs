use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::{
    entity,
    error::{AccountError, AccountResult},
    models::{Account, NewAccount},
    repository::AccountRepository,
};

pub struct PgAccountRepository {
    db: DatabaseConnection,
}

impl PgAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn insert_error(err: DbErr, email: String) -> AccountError {
    match err.sql_err() {
        Some(violation) => constraint_error(violation, err, email),
        None => AccountError::from(err),
    }
}

// The unique index on institutional_email is the only unique key besides the id
fn constraint_error(violation: SqlErr, err: DbErr, email: String) -> AccountError {
    match violation {
        SqlErr::UniqueConstraintViolation(detail) => {
            tracing::info!(%detail, "Insert lost a duplicate-email race");
            AccountError::DuplicateEmail(email)
        }
        _ => AccountError::from(err),
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, input: NewAccount) -> AccountResult<Account> {
        let email = input.institutional_email.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(e, email))?;

        tracing::info!(account_id = model.id, "Created account");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> AccountResult<Option<Account>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let model = entity::Entity::find()
            .filter(entity::Column::InstitutionalEmail.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> AccountResult<Vec<Account>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: i32, email: &str) -> entity::Model {
        entity::Model {
            id,
            institutional_email: email.to_string(),
            name: "Jane Doe".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: Role::User,
            signing_key: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap().into(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "jane@uni.edu")]])
            .into_connection();
        let repo = PgAccountRepository::new(db);

        let account = repo
            .create(NewAccount {
                institutional_email: "jane@uni.edu".to_string(),
                name: "Jane Doe".to_string(),
                password_hash: "$argon2id$hash".to_string(),
                role: Role::User,
                signing_key: None,
            })
            .await
            .unwrap();

        assert_eq!(account.id, 1);
        assert_eq!(account.institutional_email, "jane@uni.edu");
    }

    #[tokio::test]
    async fn test_get_by_email_and_missing_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(4, "jane@uni.edu")]])
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgAccountRepository::new(db);

        let found = repo.get_by_email("jane@uni.edu").await.unwrap();
        assert_eq!(found.map(|a| a.id), Some(4));

        assert!(repo.get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_keeps_store_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(2, "b@uni.edu"), model(1, "a@uni.edu")]])
            .into_connection();
        let repo = PgAccountRepository::new(db);

        let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_query_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgAccountRepository::new(db);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, AccountError::Database(ref m) if m.contains("connection reset")));
    }

    #[test]
    fn test_unique_violation_becomes_duplicate_email() {
        let violation = SqlErr::UniqueConstraintViolation(
            "duplicate key value violates unique constraint \"accounts_institutional_email_key\""
                .to_string(),
        );
        let err = constraint_error(
            violation,
            DbErr::Custom("insert rejected".to_string()),
            "jane@uni.edu".into(),
        );
        assert!(matches!(err, AccountError::DuplicateEmail(ref e) if e == "jane@uni.edu"));
    }

    #[test]
    fn test_foreign_key_violation_stays_database_error() {
        let violation = SqlErr::ForeignKeyConstraintViolation("fk".to_string());
        let err = constraint_error(
            violation,
            DbErr::Custom("insert rejected".to_string()),
            "jane@uni.edu".into(),
        );
        assert!(matches!(err, AccountError::Database(ref m) if m.contains("insert rejected")));
    }

    #[test]
    fn test_non_unique_insert_error_stays_database_error() {
        let err = insert_error(DbErr::Custom("disk full".to_string()), "a@uni.edu".into());
        assert!(matches!(err, AccountError::Database(_)));
    }
}
