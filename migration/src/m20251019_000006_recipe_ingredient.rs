use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251019_000002_ingredient::Ingredient, m20251019_000004_recipe::Recipe};

static FK_RECIPE_INGREDIENT_RECIPE_ID: &str = "fk-recipe_ingredient-recipe_id";
static FK_RECIPE_INGREDIENT_INGREDIENT_ID: &str = "fk-recipe_ingredient-ingredient_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite key keeps ingredient IDs unique within one recipe
        manager
            .create_table(
                Table::create()
                    .table(RecipeIngredient::Table)
                    .if_not_exists()
                    .col(integer(RecipeIngredient::RecipeId))
                    .col(integer(RecipeIngredient::IngredientId))
                    .col(integer(RecipeIngredient::Amount))
                    .primary_key(
                        Index::create()
                            .col(RecipeIngredient::RecipeId)
                            .col(RecipeIngredient::IngredientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_INGREDIENT_RECIPE_ID)
                            .from(RecipeIngredient::Table, RecipeIngredient::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_INGREDIENT_INGREDIENT_ID)
                            .from(RecipeIngredient::Table, RecipeIngredient::IngredientId)
                            .to(Ingredient::Table, Ingredient::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecipeIngredient::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecipeIngredient {
    Table,
    RecipeId,
    IngredientId,
    Amount,
}
