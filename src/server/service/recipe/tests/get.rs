use crate::server::{model::app::AppState, service::recipe::RecipeService};

use super::*;

/// Expect viewer flags to be false for anonymous requests
#[tokio::test]
async fn anonymous_flags_are_false() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();
    let recipe = test
        .recipe()
        .insert_recipe(1, "Porridge", &[1], &[(1, 5)])
        .await?;
    test.recipe().insert_favorite(2, recipe.id).await?;
    test.recipe().insert_shopping_cart(2, recipe.id).await?;
    test.user().insert_subscription(2, 1).await?;

    let recipe_service = RecipeService::new(&state.db, &state.settings);
    let result = recipe_service.get(recipe.id, None).await.unwrap();

    assert!(!result.is_favorited);
    assert!(!result.is_in_shopping_cart);
    assert!(!result.author.is_subscribed);

    Ok(())
}

/// Expect viewer flags to reflect the requester's favorites, cart and subscriptions
#[tokio::test]
async fn resolves_flags_for_viewer() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();
    let recipe = test
        .recipe()
        .insert_recipe(1, "Porridge", &[1], &[(1, 5)])
        .await?;
    test.recipe().insert_favorite(2, recipe.id).await?;
    test.user().insert_subscription(2, 1).await?;

    let recipe_service = RecipeService::new(&state.db, &state.settings);
    let result = recipe_service.get(recipe.id, Some(2)).await.unwrap();

    assert!(result.is_favorited);
    assert!(!result.is_in_shopping_cart);
    assert!(result.author.is_subscribed);

    Ok(())
}
