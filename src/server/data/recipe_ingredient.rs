use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait,
};

/// One aggregated line of a shopping list
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ShoppingListRow {
    pub name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}

pub struct RecipeIngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeIngredientRepository<'a, C> {
    /// Creates a new instance of [`RecipeIngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces the ingredient lines of a recipe with `(ingredient_id, amount)` pairs
    ///
    /// Run inside a transaction so the delete and insert are applied together.
    pub async fn replace(&self, recipe_id: i32, ingredients: &[(i32, i32)]) -> Result<(), DbErr> {
        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        if ingredients.is_empty() {
            return Ok(());
        }

        let rows = ingredients
            .iter()
            .map(|(ingredient_id, amount)| entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                ingredient_id: ActiveValue::Set(*ingredient_id),
                amount: ActiveValue::Set(*amount),
            });

        entity::prelude::RecipeIngredient::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Ingredient lines of a recipe joined with their ingredient, ordered by ingredient name
    pub async fn get_for_recipe(
        &self,
        recipe_id: i32,
    ) -> Result<Vec<(entity::recipe_ingredient::Model, entity::ingredient::Model)>, DbErr> {
        let rows = entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .find_also_related(entity::prelude::Ingredient)
            .order_by_asc(entity::ingredient::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(line, ingredient)| ingredient.map(|ingredient| (line, ingredient)))
            .collect())
    }

    /// Sums the ingredient amounts of every recipe in a user's shopping cart
    ///
    /// Lines are grouped by ingredient name and measurement unit and ordered by name, then
    /// unit.
    pub async fn sum_for_cart(&self, user_id: i32) -> Result<Vec<ShoppingListRow>, DbErr> {
        let in_cart = entity::prelude::ShoppingCart::find()
            .select_only()
            .column(entity::shopping_cart::Column::RecipeId)
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .into_query();

        entity::prelude::RecipeIngredient::find()
            .select_only()
            .column_as(entity::ingredient::Column::Name, "name")
            .column_as(entity::ingredient::Column::MeasurementUnit, "measurement_unit")
            .column_as(entity::recipe_ingredient::Column::Amount.sum(), "total_amount")
            .join(
                JoinType::InnerJoin,
                entity::recipe_ingredient::Relation::Ingredient.def(),
            )
            .filter(entity::recipe_ingredient::Column::RecipeId.in_subquery(in_cart))
            .group_by(entity::ingredient::Column::Name)
            .group_by(entity::ingredient::Column::MeasurementUnit)
            .order_by_asc(entity::ingredient::Column::Name)
            .order_by_asc(entity::ingredient::Column::MeasurementUnit)
            .into_model::<ShoppingListRow>()
            .all(self.db)
            .await
    }
}
