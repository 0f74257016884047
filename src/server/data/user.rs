use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, UpdateResult,
};

/// Fields of a new user, the password already hashed
pub struct NewUser<'n> {
    pub email: &'n str,
    pub username: &'n str,
    pub first_name: &'n str,
    pub last_name: &'n str,
    pub password_hash: &'n str,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, user: NewUser<'_>) -> Result<entity::foodgram_user::Model, DbErr> {
        let user = entity::foodgram_user::ActiveModel {
            email: ActiveValue::Set(user.email.to_string()),
            username: ActiveValue::Set(user.username.to_string()),
            first_name: ActiveValue::Set(user.first_name.to_string()),
            last_name: ActiveValue::Set(user.last_name.to_string()),
            password_hash: ActiveValue::Set(user.password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::foodgram_user::Model>, DbErr> {
        entity::prelude::FoodgramUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::foodgram_user::Model>, DbErr> {
        entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the stored password hash of a user
    pub async fn update_password_hash(
        &self,
        user_id: i32,
        password_hash: &str,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::FoodgramUser::update_many()
            .col_expr(
                entity::foodgram_user::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .filter(entity::foodgram_user::Column::Id.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Returns all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::foodgram_user::Model>, DbErr> {
        entity::prelude::FoodgramUser::find()
            .order_by_asc(entity::foodgram_user::Column::Id)
            .all(self.db)
            .await
    }
}
