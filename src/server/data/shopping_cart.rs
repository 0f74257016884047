use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter,
};

pub struct ShoppingCartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShoppingCartRepository<'a, C> {
    /// Creates a new instance of [`ShoppingCartRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ShoppingCart::find()
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .filter(entity::shopping_cart::Column::RecipeId.eq(recipe_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a recipe to the user's shopping cart
    ///
    /// Fails with a primary key violation when the pair is already present.
    pub async fn create(&self, user_id: i32, recipe_id: i32) -> Result<(), DbErr> {
        entity::prelude::ShoppingCart::insert(entity::shopping_cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, user_id: i32, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ShoppingCart::delete_many()
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .filter(entity::shopping_cart::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await
    }
}
