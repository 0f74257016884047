use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, tag_id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(tag_id).one(self.db).await
    }

    /// Every tag ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the tags among `tag_ids` that exist
    pub async fn find_by_ids(&self, tag_ids: &[i32]) -> Result<Vec<entity::tag::Model>, DbErr> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(tag_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Tags attached to a recipe, ordered by name
    pub async fn get_for_recipe(&self, recipe_id: i32) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .join(JoinType::InnerJoin, entity::tag::Relation::RecipeTag.def())
            .filter(entity::recipe_tag::Column::RecipeId.eq(recipe_id))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }
}
