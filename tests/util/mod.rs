//! Helpers shared by the integration tests.

use axum::response::Response;
use foodgram::{
    model::recipe::{IngredientAmountDto, RecipeWriteDto},
    server::model::session::user::SessionUserId,
};
use foodgram_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Reads a response body as JSON
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}

/// Reads a response body as UTF-8 text
pub async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

pub trait TestContextExt {
    /// Marks the test session as logged in as `user_id`
    async fn login_as(&self, user_id: i32);
}

impl TestContextExt for TestContext {
    async fn login_as(&self, user_id: i32) {
        SessionUserId::insert(&self.session, user_id)
            .await
            .expect("Failed to insert user into session");
    }
}

/// Recipe payload with the given tags and `(ingredient_id, amount)` pairs
pub fn recipe_payload(name: &str, tags: &[i32], ingredients: &[(i32, i32)]) -> RecipeWriteDto {
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

/// Users `author` (1) and `reader` (2), tags `breakfast` (1) and `lunch` (2), ingredients
/// `salt` (1, g) and `milk` (2, ml)
pub async fn recipe_setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_recipe_tables()
        .with_user("author")
        .with_user("reader")
        .with_tag("Breakfast", "#E26C2D", "breakfast")
        .with_tag("Lunch", "#49B64E", "lunch")
        .with_ingredient("salt", "g")
        .with_ingredient("milk", "ml")
        .build()
        .await
}
