use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(AccountRole::Enum)
                    .values([AccountRole::Admin, AccountRole::User])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Accounts::Id))
                    .col(
                        ColumnDef::new(Accounts::InstitutionalEmail)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(string(Accounts::Name))
                    .col(string(Accounts::PasswordHash))
                    .col(
                        ColumnDef::new(Accounts::Role)
                            .enumeration(AccountRole::Enum, [AccountRole::Admin, AccountRole::User])
                            .not_null()
                            .default("user"),
                    )
                    .col(string_null(Accounts::SigningKey))
                    .col(
                        timestamp_with_time_zone(Accounts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing sorts newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_accounts_created_at")
                    .table(Accounts::Table)
                    .col(Accounts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(AccountRole::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    InstitutionalEmail,
    Name,
    PasswordHash,
    Role,
    SigningKey,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AccountRole {
    #[sea_orm(iden = "account_role")]
    Enum,
    #[sea_orm(iden = "admin")]
    Admin,
    #[sea_orm(iden = "user")]
    User,
}
