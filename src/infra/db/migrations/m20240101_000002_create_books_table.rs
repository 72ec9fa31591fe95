//! Migration: Create the books table.
//!
//! Title and ISBN carry unique indexes; deleted_at is indexed for efficient
//! filtering of active books.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Books::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Books::Title).string().not_null())
                    .col(ColumnDef::new(Books::Excerpt).string().not_null())
                    .col(ColumnDef::new(Books::UserId).uuid().not_null())
                    .col(ColumnDef::new(Books::Isbn).string().not_null())
                    .col(ColumnDef::new(Books::Category).string().not_null())
                    .col(ColumnDef::new(Books::Subcategory).string().not_null())
                    .col(ColumnDef::new(Books::ReleasedAt).date().not_null())
                    .col(
                        ColumnDef::new(Books::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Books::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Books::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_user_id")
                            .from(Books::Table, Books::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_books_title_unique")
                    .table(Books::Table)
                    .col(Books::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_books_isbn_unique")
                    .table(Books::Table)
                    .col(Books::Isbn)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_books_deleted_at")
                    .table(Books::Table)
                    .col(Books::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
    Title,
    Excerpt,
    UserId,
    Isbn,
    Category,
    Subcategory,
    ReleasedAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
