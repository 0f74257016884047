use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Query;
use foodgram::{
    model::recipe::{RecipeDto, RecipeListParams, RecipeShortDto},
    server::{
        controller::recipe::{
            add_favorite, add_to_shopping_cart, create_recipe, delete_recipe,
            download_shopping_cart, get_recipe, list_recipes, remove_from_shopping_cart,
            update_recipe,
        },
        model::app::AppState,
    },
};

use super::*;

/// Expect 401 when creating a recipe anonymously
#[tokio::test]
async fn create_requires_login() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();

    let resp = create_recipe(
        State(state),
        test.session.clone(),
        Json(recipe_payload("Porridge", &[1], &[(1, 5)])),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 201 with the full projection authored by the logged in user
#[tokio::test]
async fn creates_recipe() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    test.login_as(1).await;
    let state: AppState = test.to_app_state();

    let resp = create_recipe(
        State(state),
        test.session.clone(),
        Json(recipe_payload("Porridge", &[1, 2], &[(2, 200), (1, 5)])),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let recipe: RecipeDto = body_json(resp).await;
    assert_eq!(recipe.author.id, 1);
    assert_eq!(recipe.tags.len(), 2);
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.cooking_time, 15);

    Ok(())
}

/// Expect 400 for duplicate ingredients with nothing stored
#[tokio::test]
async fn create_rejects_duplicate_ingredients() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    test.login_as(1).await;
    let state: AppState = test.to_app_state();

    let resp = create_recipe(
        State(state.clone()),
        test.session.clone(),
        Json(recipe_payload("Porridge", &[1], &[(1, 5), (1, 6)])),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let listed = list_recipes(
        State(state),
        test.session.clone(),
        Query(RecipeListParams::default()),
    )
    .await
    .into_response();
    let recipes: Vec<RecipeDto> = body_json(listed).await;
    assert!(recipes.is_empty());

    Ok(())
}

/// Expect 403 when someone other than the author updates
#[tokio::test]
async fn update_forbidden_for_non_author() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let recipe = test
        .recipe()
        .insert_recipe(1, "Porridge", &[1], &[(1, 5)])
        .await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    let resp = update_recipe(
        State(state),
        test.session.clone(),
        Path(recipe.id),
        Json(recipe_payload("Porridge", &[1], &[(1, 5)])),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the update to replace the ingredient set rather than merge it
#[tokio::test]
async fn update_replaces_ingredients() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let recipe = test
        .recipe()
        .insert_recipe(1, "Porridge", &[1], &[(1, 5)])
        .await?;
    test.login_as(1).await;
    let state: AppState = test.to_app_state();

    let resp = update_recipe(
        State(state),
        test.session.clone(),
        Path(recipe.id),
        Json(recipe_payload("Milk porridge", &[2], &[(2, 250)])),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: RecipeDto = body_json(resp).await;
    assert_eq!(updated.name, "Milk porridge");
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(updated.ingredients[0].name, "milk");
    assert_eq!(updated.ingredients[0].amount, 250);

    Ok(())
}

/// Expect 204 for the author and 404 afterwards
#[tokio::test]
async fn deletes_recipe() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let recipe = test
        .recipe()
        .insert_recipe(1, "Porridge", &[1], &[(1, 5)])
        .await?;
    test.login_as(1).await;
    let state: AppState = test.to_app_state();

    let deleted = delete_recipe(State(state.clone()), test.session.clone(), Path(recipe.id))
        .await
        .into_response();
    let fetched = get_recipe(State(state), test.session.clone(), Path(recipe.id))
        .await
        .into_response();

    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect viewer flags to be false for an anonymous reader
#[tokio::test]
async fn anonymous_read_has_false_flags() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let recipe = test
        .recipe()
        .insert_recipe(1, "Porridge", &[1], &[(1, 5)])
        .await?;
    test.recipe().insert_favorite(2, recipe.id).await?;
    let state: AppState = test.to_app_state();

    let resp = get_recipe(State(state), test.session.clone(), Path(recipe.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let recipe: RecipeDto = body_json(resp).await;
    assert!(!recipe.is_favorited);
    assert!(!recipe.is_in_shopping_cart);
    assert!(!recipe.author.is_subscribed);

    Ok(())
}

/// Expect 201 for the first favorite and 400 for the second
#[tokio::test]
async fn favorites_recipe_once() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let recipe = test
        .recipe()
        .insert_recipe(1, "Porridge", &[1], &[(1, 5)])
        .await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    let first = add_favorite(State(state.clone()), test.session.clone(), Path(recipe.id))
        .await
        .into_response();
    let second = add_favorite(State(state), test.session.clone(), Path(recipe.id))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    let short: RecipeShortDto = body_json(first).await;
    assert_eq!(short.id, recipe.id);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when favoriting a recipe that does not exist
#[tokio::test]
async fn favorite_returns_not_found() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    let resp = add_favorite(State(state), test.session.clone(), Path(77))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when removing a recipe that is not in the cart
#[tokio::test]
async fn remove_from_cart_requires_membership() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let recipe = test
        .recipe()
        .insert_recipe(1, "Porridge", &[1], &[(1, 5)])
        .await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    let resp = remove_from_shopping_cart(State(state), test.session.clone(), Path(recipe.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect salt from two cart recipes to be summed into one line
#[tokio::test]
async fn downloads_aggregated_shopping_list() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let soup = test
        .recipe()
        .insert_recipe(1, "Soup", &[1], &[(1, 5)])
        .await?;
    let bread = test
        .recipe()
        .insert_recipe(1, "Bread", &[1], &[(1, 10)])
        .await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    for recipe_id in [soup.id, bread.id] {
        let resp = add_to_shopping_cart(State(state.clone()), test.session.clone(), Path(recipe_id))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = download_shopping_cart(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=shopping_list.txt"
    );
    assert!(resp.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    let body = body_text(resp).await;
    assert_eq!(body, "Список покупок:\nsalt - 15g.");

    Ok(())
}

/// Expect only the header for an empty cart
#[tokio::test]
async fn downloads_header_for_empty_cart() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    let resp = download_shopping_cart(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(body_text(resp).await, "Список покупок:");

    Ok(())
}

/// Expect the shopping cart filter to list only the reader's cart
#[tokio::test]
async fn lists_recipes_in_cart() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let soup = test
        .recipe()
        .insert_recipe(1, "Soup", &[1], &[(1, 5)])
        .await?;
    test.recipe()
        .insert_recipe(1, "Bread", &[2], &[(1, 10)])
        .await?;
    test.recipe().insert_shopping_cart(2, soup.id).await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    let resp = list_recipes(
        State(state),
        test.session.clone(),
        Query(RecipeListParams {
            is_in_shopping_cart: Some(1),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    let recipes: Vec<RecipeDto> = body_json(resp).await;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Soup");
    assert!(recipes[0].is_in_shopping_cart);

    Ok(())
}
