use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    /// Creates a new instance of [`SubscriptionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether `user_id` follows `author_id`
    pub async fn exists(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .filter(entity::subscription::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, user_id: i32, author_id: i32) -> Result<(), DbErr> {
        entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, user_id: i32, author_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Subscription::delete_many()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .filter(entity::subscription::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await
    }

    /// Authors followed by `user_id`, in the order they were subscribed to
    pub async fn get_authors(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::foodgram_user::Model>, DbErr> {
        entity::prelude::FoodgramUser::find()
            .join(
                JoinType::InnerJoin,
                entity::subscription::Relation::Author.def().rev(),
            )
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .order_by_asc(entity::subscription::Column::CreatedAt)
            .order_by_asc(entity::foodgram_user::Column::Id)
            .all(self.db)
            .await
    }
}
