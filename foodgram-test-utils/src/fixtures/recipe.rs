use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_COOKING_TIME,
    error::TestError,
    model::{IngredientModel, RecipeModel, TagModel},
    TestContext,
};

impl TestContext {
    pub fn recipe<'a>(&'a self) -> RecipeFixtures<'a> {
        RecipeFixtures { setup: self }
    }
}

pub struct RecipeFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RecipeFixtures<'a> {
    pub async fn insert_tag(
        &self,
        name: &str,
        color: &str,
        slug: &str,
    ) -> Result<TagModel, TestError> {
        Ok(entity::prelude::Tag::insert(entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            color: ActiveValue::Set(color.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_ingredient(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> Result<IngredientModel, TestError> {
        Ok(
            entity::prelude::Ingredient::insert(entity::ingredient::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                measurement_unit: ActiveValue::Set(measurement_unit.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a recipe with its tag and ingredient associations.
    ///
    /// Rows are written directly without validation, allowing tests to set up states
    /// the service layer would refuse.
    ///
    /// # Arguments
    /// - `author_id` - ID of the user authoring the recipe
    /// - `name` - Recipe name
    /// - `tag_ids` - Tags linked to the recipe
    /// - `ingredients` - `(ingredient_id, amount)` pairs
    pub async fn insert_recipe(
        &self,
        author_id: i32,
        name: &str,
        tag_ids: &[i32],
        ingredients: &[(i32, i32)],
    ) -> Result<RecipeModel, TestError> {
        let recipe = entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            name: ActiveValue::Set(name.to_string()),
            image: ActiveValue::Set(String::new()),
            text: ActiveValue::Set(format!("How to cook {}", name)),
            cooking_time: ActiveValue::Set(TEST_COOKING_TIME),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        for tag_id in tag_ids {
            entity::prelude::RecipeTag::insert(entity::recipe_tag::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                tag_id: ActiveValue::Set(*tag_id),
            })
            .exec(&self.setup.db)
            .await?;
        }

        for (ingredient_id, amount) in ingredients {
            entity::prelude::RecipeIngredient::insert(entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                ingredient_id: ActiveValue::Set(*ingredient_id),
                amount: ActiveValue::Set(*amount),
            })
            .exec(&self.setup.db)
            .await?;
        }

        Ok(recipe)
    }

    pub async fn insert_favorite(&self, user_id: i32, recipe_id: i32) -> Result<(), TestError> {
        entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
        })
        .exec(&self.setup.db)
        .await?;

        Ok(())
    }

    pub async fn insert_shopping_cart(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::ShoppingCart::insert(entity::shopping_cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
        })
        .exec(&self.setup.db)
        .await?;

        Ok(())
    }
}
