use crate::models::{Account, NewAccount, Role};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the accounts table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub institutional_email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub signing_key: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            institutional_email: model.institutional_email,
            name: model.name,
            password_hash: model.password_hash,
            role: model.role,
            signing_key: model.signing_key,
            created_at: model.created_at.into(),
        }
    }
}

// id and created_at are left to the database defaults
impl From<NewAccount> for ActiveModel {
    fn from(input: NewAccount) -> Self {
        ActiveModel {
            institutional_email: Set(input.institutional_email),
            name: Set(input.name),
            password_hash: Set(input.password_hash),
            role: Set(input.role),
            signing_key: Set(input.signing_key),
            ..Default::default()
        }
    }
}
