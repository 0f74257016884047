//! Author subscriptions with recipe previews.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::SubscriptionDto,
    server::{
        data::{
            recipe::RecipeRepository, subscription::SubscriptionRepository, user::UserRepository,
        },
        error::{user::UserError, Error},
        model::db::UserModel,
        service::{collection::is_unique_violation, recipe::projection::short},
    },
};

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    /// Creates a new instance of [`SubscriptionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes `user_id` to `author_id`
    ///
    /// # Returns
    /// - `Ok(SubscriptionDto)` - The followed author with a recipe preview
    /// - `Err(UserError::UserNotFound)` - Author does not exist
    /// - `Err(UserError::SelfSubscription)` - User tried to follow themselves
    /// - `Err(UserError::AlreadySubscribed)` - Subscription already exists
    pub async fn subscribe(
        &self,
        user_id: i32,
        author_id: i32,
        recipes_limit: Option<i64>,
    ) -> Result<SubscriptionDto, Error> {
        let author = self.get_author(author_id).await?;

        if user_id == author_id {
            return Err(UserError::SelfSubscription.into());
        }

        let subscription_repository = SubscriptionRepository::new(self.db);
        if subscription_repository.exists(user_id, author_id).await? {
            return Err(UserError::AlreadySubscribed.into());
        }

        subscription_repository
            .create(user_id, author_id)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    Error::from(UserError::AlreadySubscribed)
                } else {
                    Error::from(err)
                }
            })?;

        tracing::debug!(user_id, author_id, "Subscribed to author");

        self.subscription_dto(author, recipes_limit).await
    }

    /// Removes the subscription of `user_id` to `author_id`
    pub async fn unsubscribe(&self, user_id: i32, author_id: i32) -> Result<(), Error> {
        self.get_author(author_id).await?;

        let result = SubscriptionRepository::new(self.db)
            .delete(user_id, author_id)
            .await?;
        if result.rows_affected == 0 {
            return Err(UserError::NotSubscribed.into());
        }

        tracing::debug!(user_id, author_id, "Unsubscribed from author");

        Ok(())
    }

    /// Authors followed by `user_id` in subscription order
    pub async fn list(
        &self,
        user_id: i32,
        recipes_limit: Option<i64>,
    ) -> Result<Vec<SubscriptionDto>, Error> {
        let authors = SubscriptionRepository::new(self.db)
            .get_authors(user_id)
            .await?;

        let mut dtos = Vec::with_capacity(authors.len());
        for author in authors {
            dtos.push(self.subscription_dto(author, recipes_limit).await?);
        }

        Ok(dtos)
    }

    async fn get_author(&self, author_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_by_id(author_id)
            .await?
            .ok_or_else(|| UserError::UserNotFound(author_id).into())
    }

    /// Author profile with newest recipes first, capped at `recipes_limit`
    ///
    /// A non-positive limit yields an empty preview while `recipes_count` still counts
    /// every recipe.
    async fn subscription_dto(
        &self,
        author: UserModel,
        recipes_limit: Option<i64>,
    ) -> Result<SubscriptionDto, Error> {
        let recipe_repository = RecipeRepository::new(self.db);

        let recipes = match recipes_limit {
            Some(limit) if limit <= 0 => Vec::new(),
            limit => {
                recipe_repository
                    .get_by_author(author.id, limit.map(|l| l as u64))
                    .await?
            }
        };
        let recipes_count = recipe_repository.count_by_author(author.id).await?;

        Ok(SubscriptionDto {
            id: author.id,
            email: author.email,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed: true,
            recipes: recipes.iter().map(short).collect(),
            recipes_count,
        })
    }
}
