use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use foodgram::{
    model::recipe::TagDto,
    server::{
        controller::tag::{get_tag, list_tags},
        model::app::AppState,
    },
};

use super::*;

/// Expect every tag ordered by name regardless of insertion order
#[tokio::test]
async fn lists_tags_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .with_tag("Lunch", "#49B64E", "lunch")
        .with_tag("Breakfast", "#E26C2D", "breakfast")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = list_tags(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let tags: Vec<TagDto> = body_json(resp).await;
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Breakfast", "Lunch"]);

    Ok(())
}

/// Expect 404 for an unknown tag
#[tokio::test]
async fn get_tag_returns_not_found() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();

    let resp = get_tag(State(state), Path(9)).await.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the tag with its color
#[tokio::test]
async fn get_tag_returns_tag() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();

    let resp = get_tag(State(state), Path(2)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let tag: TagDto = body_json(resp).await;
    assert_eq!(tag.color, "#49B64E");

    Ok(())
}
