use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use foodgram::{
    model::recipe::{IngredientDto, IngredientSearchParams},
    server::{
        controller::ingredient::{get_ingredient, list_ingredients},
        model::app::AppState,
    },
};

use super::*;

/// Expect prefix search to ignore case
#[tokio::test]
async fn searches_by_name_prefix() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();

    let resp = list_ingredients(
        State(state),
        Query(IngredientSearchParams {
            name: Some("SA".to_string()),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let ingredients: Vec<IngredientDto> = body_json(resp).await;
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].name, "salt");

    Ok(())
}

/// Expect all ingredients ordered by name without a filter
#[tokio::test]
async fn lists_all_without_filter() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();

    let resp = list_ingredients(State(state), Query(IngredientSearchParams::default()))
        .await
        .into_response();

    let ingredients: Vec<IngredientDto> = body_json(resp).await;
    let names: Vec<_> = ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["milk", "salt"]);

    Ok(())
}

/// Expect 404 for an unknown ingredient
#[tokio::test]
async fn get_ingredient_returns_not_found() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();

    let resp = get_ingredient(State(state), Path(42)).await.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
