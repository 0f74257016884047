use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    RelationTrait, Select,
};

/// Scalar fields of a recipe as written by its author
pub struct RecipeFields<'n> {
    pub name: &'n str,
    pub text: &'n str,
    pub cooking_time: i32,
}

/// Filters applied to the recipe list, every set field narrows the result
#[derive(Default, Debug, Clone)]
pub struct RecipeFilter {
    /// Recipes carrying at least one of these tag slugs
    pub tag_slugs: Vec<String>,
    pub author_id: Option<i32>,
    /// Recipes favorited by this user
    pub favorited_by: Option<i32>,
    /// Recipes in this user's shopping cart
    pub in_cart_of: Option<i32>,
}

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        author_id: i32,
        fields: RecipeFields<'_>,
        image: &str,
    ) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            name: ActiveValue::Set(fields.name.to_string()),
            image: ActiveValue::Set(image.to_string()),
            text: ActiveValue::Set(fields.text.to_string()),
            cooking_time: ActiveValue::Set(fields.cooking_time),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        recipe_id: i32,
    ) -> Result<Option<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await
    }

    /// Overwrites the scalar fields of a recipe, replacing the image only when one is given
    pub async fn update(
        &self,
        recipe: entity::recipe::Model,
        fields: RecipeFields<'_>,
        image: Option<&str>,
    ) -> Result<entity::recipe::Model, DbErr> {
        let mut recipe: entity::recipe::ActiveModel = recipe.into();
        recipe.name = ActiveValue::Set(fields.name.to_string());
        recipe.text = ActiveValue::Set(fields.text.to_string());
        recipe.cooking_time = ActiveValue::Set(fields.cooking_time);
        if let Some(image) = image {
            recipe.image = ActiveValue::Set(image.to_string());
        }

        recipe.update(self.db).await
    }

    /// Deletes a recipe, association rows are removed by cascade
    pub async fn delete(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Recipe::delete_by_id(recipe_id)
            .exec(self.db)
            .await
    }

    /// Lists recipes matching `filter`, newest first
    pub async fn list(&self, filter: &RecipeFilter) -> Result<Vec<entity::recipe::Model>, DbErr> {
        let mut query = newest_first(entity::prelude::Recipe::find());

        if !filter.tag_slugs.is_empty() {
            let tagged = entity::prelude::RecipeTag::find()
                .select_only()
                .column(entity::recipe_tag::Column::RecipeId)
                .join(JoinType::InnerJoin, entity::recipe_tag::Relation::Tag.def())
                .filter(entity::tag::Column::Slug.is_in(filter.tag_slugs.iter().cloned()))
                .into_query();
            query = query.filter(entity::recipe::Column::Id.in_subquery(tagged));
        }

        if let Some(author_id) = filter.author_id {
            query = query.filter(entity::recipe::Column::AuthorId.eq(author_id));
        }

        if let Some(user_id) = filter.favorited_by {
            let favorited = entity::prelude::Favorite::find()
                .select_only()
                .column(entity::favorite::Column::RecipeId)
                .filter(entity::favorite::Column::UserId.eq(user_id))
                .into_query();
            query = query.filter(entity::recipe::Column::Id.in_subquery(favorited));
        }

        if let Some(user_id) = filter.in_cart_of {
            let in_cart = entity::prelude::ShoppingCart::find()
                .select_only()
                .column(entity::shopping_cart::Column::RecipeId)
                .filter(entity::shopping_cart::Column::UserId.eq(user_id))
                .into_query();
            query = query.filter(entity::recipe::Column::Id.in_subquery(in_cart));
        }

        query.all(self.db).await
    }

    /// Recipes of one author, newest first, at most `limit` of them when set
    pub async fn get_by_author(
        &self,
        author_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<entity::recipe::Model>, DbErr> {
        newest_first(entity::prelude::Recipe::find())
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }
}

fn newest_first(query: Select<entity::prelude::Recipe>) -> Select<entity::prelude::Recipe> {
    query
        .order_by_desc(entity::recipe::Column::CreatedAt)
        .order_by_desc(entity::recipe::Column::Id)
}
