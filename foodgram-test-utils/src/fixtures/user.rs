use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_EMAIL_DOMAIN, TEST_PASSWORD_HASH},
    error::TestError,
    model::{SubscriptionModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user named `username` with email `<username>@example.com`
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::FoodgramUser::insert(entity::foodgram_user::ActiveModel {
                email: ActiveValue::Set(format!("{}@{}", username, TEST_EMAIL_DOMAIN)),
                username: ActiveValue::Set(username.to_string()),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Subscribe `user_id` to `author_id`
    pub async fn insert_subscription(
        &self,
        user_id: i32,
        author_id: i32,
    ) -> Result<SubscriptionModel, TestError> {
        Ok(
            entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                author_id: ActiveValue::Set(author_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
