use foodgram_test_utils::prelude::*;

use crate::model::recipe::{IngredientAmountDto, RecipeWriteDto};

mod get;

/// Users `author` (1) and `reader` (2), tags `breakfast` (1) and `lunch` (2), ingredients
/// `salt` (1, g) and `sugar` (2, g)
async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_recipe_tables()
        .with_user("author")
        .with_user("reader")
        .with_tag("Breakfast", "#E26C2D", "breakfast")
        .with_tag("Lunch", "#49B64E", "lunch")
        .with_ingredient("salt", "g")
        .with_ingredient("sugar", "g")
        .build()
        .await
}

fn payload(name: &str, tags: &[i32], ingredients: &[(i32, i32)]) -> RecipeWriteDto {
    RecipeWriteDto {
        ingredients: ingredients
            .iter()
            .map(|(id, amount)| IngredientAmountDto {
                id: *id,
                amount: *amount,
            })
            .collect(),
        tags: tags.to_vec(),
        image: None,
        name: Some(name.to_string()),
        text: Some(format!("How to cook {}", name)),
        cooking_time: Some(15),
    }
}
