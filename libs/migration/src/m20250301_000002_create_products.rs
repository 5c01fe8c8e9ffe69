use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_categories::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::ProductId))
                    .col(integer(Products::CategoryId))
                    .col(string_len(Products::Name, 200))
                    .col(big_integer(Products::Price))
                    .col(text(Products::Description).default(""))
                    .col(string(Products::SubCategory).default(""))
                    .col(integer(Products::Stock).default(0))
                    .col(boolean(Products::IsFeatured).default(false))
                    .col(string(Products::ImageUrl).default(""))
                    // Deleting a category that still has products must fail
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category_id")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::CategoryId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category_id")
                    .table(Products::Table)
                    .col(Products::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ProductId,
    CategoryId,
    Name,
    Price,
    Description,
    SubCategory,
    Stock,
    IsFeatured,
    ImageUrl,
}
