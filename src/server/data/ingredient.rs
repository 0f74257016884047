use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    /// Creates a new instance of [`IngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        ingredient_id: i32,
    ) -> Result<Option<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find_by_id(ingredient_id)
            .one(self.db)
            .await
    }

    /// Lists ingredients ordered by name, optionally restricted to names starting with
    /// `prefix` (case-insensitive)
    pub async fn search(
        &self,
        prefix: Option<&str>,
    ) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        let mut query = entity::prelude::Ingredient::find();

        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::ingredient::Column::Name)))
                    .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
            );
        }

        query
            .order_by_asc(entity::ingredient::Column::Name)
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the ingredients among `ingredient_ids` that exist
    pub async fn find_by_ids(
        &self,
        ingredient_ids: &[i32],
    ) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ingredient_ids.iter().copied()))
            .all(self.db)
            .await
    }
}

const LIKE_ESCAPE: char = '\\';

/// Escapes LIKE wildcards and the escape character so user input matches literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }

    escaped
}

#[cfg(test)]
mod tests {

    mod search {
        use foodgram_test_utils::prelude::*;

        use crate::server::data::ingredient::IngredientRepository;

        /// Expect only ingredients starting with the prefix, ordered by name
        #[tokio::test]
        async fn filters_by_prefix() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_recipe_tables()
                .with_ingredient("sugar", "g")
                .with_ingredient("salt", "g")
                .with_ingredient("butter", "g")
                .build()
                .await?;

            let ingredient_repository = IngredientRepository::new(&test.db);
            let result = ingredient_repository.search(Some("s")).await?;

            let names: Vec<_> = result.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names, vec!["salt", "sugar"]);

            Ok(())
        }

        /// Expect prefix matching to ignore case
        #[tokio::test]
        async fn ignores_case() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_recipe_tables()
                .with_ingredient("Salt", "g")
                .build()
                .await?;

            let ingredient_repository = IngredientRepository::new(&test.db);
            let result = ingredient_repository.search(Some("sA")).await?;

            assert_eq!(result.len(), 1);

            Ok(())
        }

        /// Expect all ingredients without a prefix
        #[tokio::test]
        async fn returns_all_without_prefix() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_recipe_tables()
                .with_ingredient("sugar", "g")
                .with_ingredient("milk", "ml")
                .build()
                .await?;

            let ingredient_repository = IngredientRepository::new(&test.db);
            let result = ingredient_repository.search(None).await?;

            assert_eq!(result.len(), 2);
            assert_eq!(result[0].name, "milk");

            Ok(())
        }

        /// Expect wildcard characters in the prefix to match only themselves
        #[tokio::test]
        async fn treats_wildcards_literally() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_recipe_tables()
                .with_ingredient("tomato", "g")
                .with_ingredient("tom_yum paste", "g")
                .with_ingredient("50% cream", "ml")
                .with_ingredient("500 ml water", "ml")
                .build()
                .await?;

            let ingredient_repository = IngredientRepository::new(&test.db);
            let underscore = ingredient_repository.search(Some("tom_")).await?;
            let percent = ingredient_repository.search(Some("50%")).await?;

            let underscore: Vec<_> = underscore.iter().map(|i| i.name.as_str()).collect();
            let percent: Vec<_> = percent.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(underscore, vec!["tom_yum paste"]);
            assert_eq!(percent, vec!["50% cream"]);

            Ok(())
        }
    }

    mod escape_like {
        use crate::server::data::ingredient::escape_like;

        #[test]
        fn escapes_wildcards_and_backslash() {
            assert_eq!(escape_like("tom_ato"), "tom\\_ato");
            assert_eq!(escape_like("50%"), "50\\%");
            assert_eq!(escape_like("a\\b"), "a\\\\b");
            assert_eq!(escape_like("salt"), "salt");
        }
    }

    mod find_by_ids {
        use foodgram_test_utils::prelude::*;

        use crate::server::data::ingredient::IngredientRepository;

        /// Expect unknown IDs to be left out of the result
        #[tokio::test]
        async fn skips_unknown_ids() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_recipe_tables()
                .with_ingredient("salt", "g")
                .build()
                .await?;

            let ingredient_repository = IngredientRepository::new(&test.db);
            let result = ingredient_repository.find_by_ids(&[1, 42]).await?;

            assert_eq!(result.len(), 1);
            assert_eq!(result[0].id, 1);

            Ok(())
        }
    }
}
