use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // AUTOINCREMENT keeps SQLite from handing out the id of a deleted row.
        manager
            .create_table(
                Table::create()
                    .table(Widgets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Widgets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Widgets::Name).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Widgets::NumberOfParts)
                            .integer()
                            .not_null()
                            .check(Expr::cust("number_of_parts > 0")),
                    )
                    .col(
                        ColumnDef::new(Widgets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Widgets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_widgets_name")
                    .table(Widgets::Table)
                    .col(Widgets::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_widgets_created_at")
                    .table(Widgets::Table)
                    .col(Widgets::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Widgets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Widgets {
    Table,
    Id,
    Name,
    NumberOfParts,
    CreatedAt,
    UpdatedAt,
}
