use sea_orm_migration::{prelude::*, schema::*};

static IDX_INGREDIENT_NAME: &str = "idx-ingredient-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredient::Id))
                    .col(string_len(Ingredient::Name, 200))
                    .col(string_len(Ingredient::MeasurementUnit, 200))
                    .to_owned(),
            )
            .await?;

        // Ingredient search is a name prefix match
        manager
            .create_index(
                Index::create()
                    .name(IDX_INGREDIENT_NAME)
                    .table(Ingredient::Table)
                    .col(Ingredient::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INGREDIENT_NAME)
                    .table(Ingredient::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    MeasurementUnit,
}
