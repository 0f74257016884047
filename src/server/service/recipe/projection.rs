//! Read projections of recipes and users as seen by a requester.
//!
//! Viewer-dependent flags (`is_subscribed`, `is_favorited`, `is_in_shopping_cart`) are
//! always `false` for anonymous requesters.

use sea_orm::ConnectionTrait;

use crate::{
    model::{
        recipe::{IngredientDto, RecipeDto, RecipeIngredientDto, RecipeShortDto, TagDto},
        user::UserDto,
    },
    server::{
        data::{
            favorite::FavoriteRepository, recipe_ingredient::RecipeIngredientRepository,
            shopping_cart::ShoppingCartRepository, subscription::SubscriptionRepository,
            tag::TagRepository, user::UserRepository,
        },
        error::Error,
        model::db::{IngredientModel, RecipeModel, TagModel, UserModel},
        util::image::image_url,
    },
};

pub struct RecipeProjector<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeProjector<'a, C> {
    /// Creates a new instance of [`RecipeProjector`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Public profile of `user` with `is_subscribed` resolved for `viewer`
    pub async fn user_profile(
        &self,
        user: UserModel,
        viewer: Option<i32>,
    ) -> Result<UserDto, Error> {
        let is_subscribed = match viewer {
            Some(viewer_id) => {
                SubscriptionRepository::new(self.db)
                    .exists(viewer_id, user.id)
                    .await?
            }
            None => false,
        };

        Ok(UserDto {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_subscribed,
        })
    }

    /// Full recipe with author, tags, ingredient amounts and the viewer's flags
    pub async fn full(&self, recipe: RecipeModel, viewer: Option<i32>) -> Result<RecipeDto, Error> {
        let author = UserRepository::new(self.db)
            .get_by_id(recipe.author_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Author ID {} of recipe ID {} not found",
                    recipe.author_id, recipe.id
                ))
            })?;
        let author = self.user_profile(author, viewer).await?;

        let tags = TagRepository::new(self.db)
            .get_for_recipe(recipe.id)
            .await?
            .into_iter()
            .map(tag_dto)
            .collect();

        let ingredients = RecipeIngredientRepository::new(self.db)
            .get_for_recipe(recipe.id)
            .await?
            .into_iter()
            .map(|(line, ingredient)| RecipeIngredientDto {
                id: ingredient.id,
                name: ingredient.name,
                measurement_unit: ingredient.measurement_unit,
                amount: line.amount,
            })
            .collect();

        let (is_favorited, is_in_shopping_cart) = match viewer {
            Some(viewer_id) => (
                FavoriteRepository::new(self.db)
                    .exists(viewer_id, recipe.id)
                    .await?,
                ShoppingCartRepository::new(self.db)
                    .exists(viewer_id, recipe.id)
                    .await?,
            ),
            None => (false, false),
        };

        Ok(RecipeDto {
            id: recipe.id,
            tags,
            author,
            ingredients,
            is_favorited,
            is_in_shopping_cart,
            name: recipe.name,
            image: image_url(&recipe.image),
            text: recipe.text,
            cooking_time: recipe.cooking_time,
        })
    }
}

/// Short projection used by favorites, the shopping cart and subscription previews
pub fn short(recipe: &RecipeModel) -> RecipeShortDto {
    RecipeShortDto {
        id: recipe.id,
        name: recipe.name.clone(),
        image: image_url(&recipe.image),
        cooking_time: recipe.cooking_time,
    }
}

pub fn tag_dto(tag: TagModel) -> TagDto {
    TagDto {
        id: tag.id,
        name: tag.name,
        color: tag.color,
        slug: tag.slug,
    }
}

pub fn ingredient_dto(ingredient: IngredientModel) -> IngredientDto {
    IngredientDto {
        id: ingredient.id,
        name: ingredient.name,
        measurement_unit: ingredient.measurement_unit,
    }
}
