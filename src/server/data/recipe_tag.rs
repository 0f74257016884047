use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct RecipeTagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeTagRepository<'a, C> {
    /// Creates a new instance of [`RecipeTagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces the tag set of a recipe
    ///
    /// Run inside a transaction so the delete and insert are applied together.
    pub async fn replace(&self, recipe_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::RecipeTag::delete_many()
            .filter(entity::recipe_tag::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let rows = tag_ids.iter().map(|tag_id| entity::recipe_tag::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            tag_id: ActiveValue::Set(*tag_id),
        });

        entity::prelude::RecipeTag::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use foodgram_test_utils::prelude::*;

    use crate::server::data::{recipe_tag::RecipeTagRepository, tag::TagRepository};

    /// Expect previous tags to be dropped and the new set stored
    #[tokio::test]
    async fn replaces_tags() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_recipe_tables()
            .with_user("author")
            .with_tag("Breakfast", "#E26C2D", "breakfast")
            .with_tag("Lunch", "#49B64E", "lunch")
            .build()
            .await?;
        let recipe = test.recipe().insert_recipe(1, "Eggs", &[1], &[]).await?;

        let recipe_tag_repository = RecipeTagRepository::new(&test.db);
        recipe_tag_repository.replace(recipe.id, &[2]).await?;

        let tags = TagRepository::new(&test.db).get_for_recipe(recipe.id).await?;
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].slug, "lunch");

        Ok(())
    }

    /// Expect an error when a tag does not exist
    #[tokio::test]
    async fn fails_for_unknown_tag() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_recipe_tables()
            .with_user("author")
            .build()
            .await?;
        let recipe = test.recipe().insert_recipe(1, "Eggs", &[], &[]).await?;

        let recipe_tag_repository = RecipeTagRepository::new(&test.db);
        let result = recipe_tag_repository.replace(recipe.id, &[99]).await;

        assert!(result.is_err());

        Ok(())
    }
}
