//! Recipe service.
//!
//! Recipe writes validate the payload, store the optional image, then write the recipe row
//! and both association sets in a single transaction. Any failure rolls the transaction back
//! and removes a freshly stored image.

pub mod projection;
pub mod validate;

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::recipe::{RecipeDto, RecipeListParams, RecipeWriteDto},
    server::{
        config::RecipeSettings,
        data::{
            ingredient::IngredientRepository,
            recipe::{RecipeFields, RecipeFilter, RecipeRepository},
            recipe_ingredient::RecipeIngredientRepository,
            recipe_tag::RecipeTagRepository,
            tag::TagRepository,
        },
        error::{recipe::RecipeError, Error},
        model::db::RecipeModel,
        service::recipe::{
            projection::RecipeProjector,
            validate::{validate_recipe, ValidRecipe},
        },
        util::{
            image::{remove_image, store_image},
            permission::ensure_author,
        },
    },
};

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a RecipeSettings,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of [`RecipeService`]
    pub fn new(db: &'a DatabaseConnection, settings: &'a RecipeSettings) -> Self {
        Self { db, settings }
    }

    /// Creates a recipe authored by `author_id`
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - The stored recipe as seen by its author
    /// - `Err(Error::RecipeError)` - Validation failed, a referenced tag or ingredient does
    ///   not exist, or the image is not a valid data URI
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn create(&self, author_id: i32, payload: RecipeWriteDto) -> Result<RecipeDto, Error> {
        let recipe = validate_recipe(&payload, self.settings)?;
        let image = self.store_payload_image(&payload).await?;

        let result = self
            .write(None, author_id, &recipe, image.as_deref())
            .await;
        let model = self.discard_image_on_error(result, image.as_deref()).await?;

        tracing::info!(recipe_id = model.id, author_id, "Created recipe");

        RecipeProjector::new(self.db)
            .full(model, Some(author_id))
            .await
    }

    /// Replaces every field and both association sets of a recipe
    ///
    /// Only the author may update a recipe. The stored image is kept when the payload has
    /// none.
    pub async fn update(
        &self,
        recipe_id: i32,
        user_id: i32,
        payload: RecipeWriteDto,
    ) -> Result<RecipeDto, Error> {
        let existing = self.get_model(recipe_id).await?;
        ensure_author(&existing, user_id)?;

        let recipe = validate_recipe(&payload, self.settings)?;
        let image = self.store_payload_image(&payload).await?;
        let previous_image = existing.image.clone();

        let result = self
            .write(Some(existing), user_id, &recipe, image.as_deref())
            .await;
        let model = self.discard_image_on_error(result, image.as_deref()).await?;

        if image.is_some() {
            remove_image(&self.settings.media_root, &previous_image).await;
        }

        tracing::info!(recipe_id = model.id, "Updated recipe");

        RecipeProjector::new(self.db).full(model, Some(user_id)).await
    }

    /// Deletes a recipe, only the author may do so
    pub async fn delete(&self, recipe_id: i32, user_id: i32) -> Result<(), Error> {
        let recipe = self.get_model(recipe_id).await?;
        ensure_author(&recipe, user_id)?;

        let result = RecipeRepository::new(self.db).delete(recipe.id).await?;
        if result.rows_affected == 0 {
            return Err(RecipeError::RecipeNotFound(recipe_id).into());
        }

        remove_image(&self.settings.media_root, &recipe.image).await;

        tracing::info!(recipe_id, "Deleted recipe");

        Ok(())
    }

    /// Full projection of one recipe for `viewer`
    pub async fn get(&self, recipe_id: i32, viewer: Option<i32>) -> Result<RecipeDto, Error> {
        let recipe = self.get_model(recipe_id).await?;

        RecipeProjector::new(self.db).full(recipe, viewer).await
    }

    /// Lists recipes newest first
    ///
    /// `is_favorited` and `is_in_shopping_cart` only filter for authenticated viewers.
    pub async fn list(
        &self,
        params: &RecipeListParams,
        viewer: Option<i32>,
    ) -> Result<Vec<RecipeDto>, Error> {
        let filter = RecipeFilter {
            tag_slugs: params.tags.clone(),
            author_id: params.author,
            favorited_by: viewer.filter(|_| params.is_favorited == Some(1)),
            in_cart_of: viewer.filter(|_| params.is_in_shopping_cart == Some(1)),
        };

        let recipes = RecipeRepository::new(self.db).list(&filter).await?;

        let projector = RecipeProjector::new(self.db);
        let mut dtos = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            dtos.push(projector.full(recipe, viewer).await?);
        }

        Ok(dtos)
    }

    async fn get_model(&self, recipe_id: i32) -> Result<RecipeModel, Error> {
        RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .ok_or_else(|| RecipeError::RecipeNotFound(recipe_id).into())
    }

    async fn store_payload_image(&self, payload: &RecipeWriteDto) -> Result<Option<String>, Error> {
        match payload.image.as_deref().filter(|uri| !uri.trim().is_empty()) {
            Some(uri) => Ok(Some(store_image(&self.settings.media_root, uri).await?)),
            None => Ok(None),
        }
    }

    async fn discard_image_on_error<T>(
        &self,
        result: Result<T, Error>,
        image: Option<&str>,
    ) -> Result<T, Error> {
        if result.is_err() {
            if let Some(image) = image {
                remove_image(&self.settings.media_root, image).await;
            }
        }

        result
    }

    /// Writes the recipe row and replaces its tag and ingredient sets in one transaction
    async fn write(
        &self,
        existing: Option<RecipeModel>,
        author_id: i32,
        recipe: &ValidRecipe,
        image: Option<&str>,
    ) -> Result<RecipeModel, Error> {
        let txn = self.db.begin().await?;

        ensure_references_exist(&txn, recipe).await?;

        let recipe_repository = RecipeRepository::new(&txn);
        let fields = RecipeFields {
            name: &recipe.name,
            text: &recipe.text,
            cooking_time: recipe.cooking_time,
        };
        let model = match existing {
            Some(existing) => recipe_repository.update(existing, fields, image).await?,
            None => {
                recipe_repository
                    .create(author_id, fields, image.unwrap_or_default())
                    .await?
            }
        };

        RecipeTagRepository::new(&txn)
            .replace(model.id, &recipe.tag_ids)
            .await?;
        RecipeIngredientRepository::new(&txn)
            .replace(model.id, &recipe.ingredients)
            .await?;

        txn.commit().await?;

        Ok(model)
    }
}

/// Fails with the first tag or ingredient ID of the payload that does not exist
async fn ensure_references_exist<C: ConnectionTrait>(
    db: &C,
    recipe: &ValidRecipe,
) -> Result<(), Error> {
    let tags = TagRepository::new(db).find_by_ids(&recipe.tag_ids).await?;
    if let Some(missing) = recipe
        .tag_ids
        .iter()
        .find(|id| !tags.iter().any(|tag| tag.id == **id))
    {
        return Err(RecipeError::UnknownTag(*missing).into());
    }

    let ingredient_ids: Vec<i32> = recipe.ingredients.iter().map(|(id, _)| *id).collect();
    let ingredients = IngredientRepository::new(db)
        .find_by_ids(&ingredient_ids)
        .await?;
    if let Some(missing) = ingredient_ids
        .iter()
        .find(|id| !ingredients.iter().any(|ingredient| ingredient.id == **id))
    {
        return Err(RecipeError::UnknownIngredient(*missing).into());
    }

    Ok(())
}
