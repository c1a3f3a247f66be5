//! Initial schema migration.
//!
//! - `authors`: people a budget record can be attributed to
//! - `budget_records`: yearly/monthly income and expense entries
//!
//! `budget_records.author_id` is a plain nullable column with no foreign key:
//! removing an author leaves its records in place with a dangling id.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Authors {
    Table,
    Id,
    FullName,
    CreatedAt,
}

#[derive(Iden)]
enum BudgetRecords {
    Table,
    Id,
    Year,
    Month,
    Amount,
    Kind,
    AuthorId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Authors::FullName).string().not_null())
                    .col(
                        ColumnDef::new(Authors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BudgetRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BudgetRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BudgetRecords::Year).integer().not_null())
                    .col(ColumnDef::new(BudgetRecords::Month).integer().not_null())
                    .col(ColumnDef::new(BudgetRecords::Amount).big_integer().not_null())
                    .col(ColumnDef::new(BudgetRecords::Kind).string().not_null())
                    .col(ColumnDef::new(BudgetRecords::AuthorId).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-budget_records-year")
                    .table(BudgetRecords::Table)
                    .col(BudgetRecords::Year)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BudgetRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await?;
        Ok(())
    }
}
