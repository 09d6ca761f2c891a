use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hall::Table)
                    .if_not_exists()
                    .col(pk_auto(Hall::Id))
                    .col(string_len(Hall::Name, 50))
                    .col(string_len(Hall::Street, 100))
                    .col(string_len(Hall::City, 50))
                    .col(string_len(Hall::PostalCode, 5))
                    .col(string_len(Hall::Country, 50))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hall_name_address")
                    .table(Hall::Table)
                    .col(Hall::Name)
                    .col(Hall::Street)
                    .col(Hall::City)
                    .col(Hall::PostalCode)
                    .col(Hall::Country)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hall::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hall {
    Table,
    Id,
    Name,
    Street,
    City,
    PostalCode,
    Country,
}
