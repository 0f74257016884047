use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251019_000001_foodgram_user::FoodgramUser, m20251019_000004_recipe::Recipe};

static FK_SHOPPING_CART_USER_ID: &str = "fk-shopping_cart-user_id";
static FK_SHOPPING_CART_RECIPE_ID: &str = "fk-shopping_cart-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShoppingCart::Table)
                    .if_not_exists()
                    .col(integer(ShoppingCart::UserId))
                    .col(integer(ShoppingCart::RecipeId))
                    .primary_key(Index::create().col(ShoppingCart::UserId).col(ShoppingCart::RecipeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOPPING_CART_USER_ID)
                            .from(ShoppingCart::Table, ShoppingCart::UserId)
                            .to(FoodgramUser::Table, FoodgramUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOPPING_CART_RECIPE_ID)
                            .from(ShoppingCart::Table, ShoppingCart::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShoppingCart::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShoppingCart {
    Table,
    UserId,
    RecipeId,
}
