use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251019_000003_tag::Tag, m20251019_000004_recipe::Recipe};

static FK_RECIPE_TAG_RECIPE_ID: &str = "fk-recipe_tag-recipe_id";
static FK_RECIPE_TAG_TAG_ID: &str = "fk-recipe_tag-tag_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeTag::Table)
                    .if_not_exists()
                    .col(integer(RecipeTag::RecipeId))
                    .col(integer(RecipeTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(RecipeTag::RecipeId)
                            .col(RecipeTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_TAG_RECIPE_ID)
                            .from(RecipeTag::Table, RecipeTag::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_TAG_TAG_ID)
                            .from(RecipeTag::Table, RecipeTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecipeTag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecipeTag {
    Table,
    RecipeId,
    TagId,
}
