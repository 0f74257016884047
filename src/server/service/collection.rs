//! Favorites and shopping cart membership.
//!
//! Both are per-user sets of recipes with the same add/remove rules, differing only in the
//! table they are stored in and the errors they report.

use sea_orm::{DatabaseConnection, DbErr, DeleteResult, SqlErr};

use crate::{
    model::recipe::RecipeShortDto,
    server::{
        data::{
            favorite::FavoriteRepository, recipe::RecipeRepository,
            shopping_cart::ShoppingCartRepository,
        },
        error::{recipe::RecipeError, Error},
        service::recipe::projection::short,
    },
};

/// Per-user recipe set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Favorites,
    ShoppingCart,
}

impl Collection {
    fn already_present(self) -> RecipeError {
        match self {
            Self::Favorites => RecipeError::AlreadyFavorited,
            Self::ShoppingCart => RecipeError::AlreadyInCart,
        }
    }

    fn not_present(self) -> RecipeError {
        match self {
            Self::Favorites => RecipeError::NotFavorited,
            Self::ShoppingCart => RecipeError::NotInCart,
        }
    }
}

pub struct CollectionService<'a> {
    db: &'a DatabaseConnection,
    collection: Collection,
}

impl<'a> CollectionService<'a> {
    /// Creates a new instance of [`CollectionService`] for one collection
    pub fn new(db: &'a DatabaseConnection, collection: Collection) -> Self {
        Self { db, collection }
    }

    /// Adds a recipe to the user's collection
    ///
    /// # Returns
    /// - `Ok(RecipeShortDto)` - Short projection of the added recipe
    /// - `Err(RecipeError::RecipeNotFound)` - Recipe does not exist
    /// - `Err(RecipeError::AlreadyFavorited | AlreadyInCart)` - Pair already present,
    ///   including a concurrent insert tripping the primary key
    pub async fn add(&self, user_id: i32, recipe_id: i32) -> Result<RecipeShortDto, Error> {
        let recipe = RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::RecipeNotFound(recipe_id))?;

        if self.exists(user_id, recipe_id).await? {
            return Err(self.collection.already_present().into());
        }

        match self.create(user_id, recipe_id).await {
            Ok(()) => {}
            Err(err) if is_unique_violation(&err) => {
                return Err(self.collection.already_present().into())
            }
            Err(err) => return Err(err.into()),
        }

        tracing::debug!(user_id, recipe_id, collection = ?self.collection, "Added recipe");

        Ok(short(&recipe))
    }

    /// Removes a recipe from the user's collection
    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::RecipeNotFound(recipe_id))?;

        let result = self.delete(user_id, recipe_id).await?;
        if result.rows_affected == 0 {
            return Err(self.collection.not_present().into());
        }

        tracing::debug!(user_id, recipe_id, collection = ?self.collection, "Removed recipe");

        Ok(())
    }

    async fn exists(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        match self.collection {
            Collection::Favorites => {
                FavoriteRepository::new(self.db)
                    .exists(user_id, recipe_id)
                    .await
            }
            Collection::ShoppingCart => {
                ShoppingCartRepository::new(self.db)
                    .exists(user_id, recipe_id)
                    .await
            }
        }
    }

    async fn create(&self, user_id: i32, recipe_id: i32) -> Result<(), DbErr> {
        match self.collection {
            Collection::Favorites => {
                FavoriteRepository::new(self.db)
                    .create(user_id, recipe_id)
                    .await
            }
            Collection::ShoppingCart => {
                ShoppingCartRepository::new(self.db)
                    .create(user_id, recipe_id)
                    .await
            }
        }
    }

    async fn delete(&self, user_id: i32, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        match self.collection {
            Collection::Favorites => {
                FavoriteRepository::new(self.db)
                    .delete(user_id, recipe_id)
                    .await
            }
            Collection::ShoppingCart => {
                ShoppingCartRepository::new(self.db)
                    .delete(user_id, recipe_id)
                    .await
            }
        }
    }
}

/// Whether a database error is a primary key or unique constraint violation
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
