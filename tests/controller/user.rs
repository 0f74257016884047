use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodgram::{
    model::user::{
        CreateUserDto, CreatedUserDto, SetPasswordDto, SubscriptionDto, SubscriptionParams,
        UserDto,
    },
    server::{
        controller::user::{
            create_user, get_current_user, get_user, list_subscriptions, list_users,
            set_password, subscribe, unsubscribe,
        },
        model::app::AppState,
    },
};

use super::*;

fn registration(email: &str, username: &str) -> CreateUserDto {
    CreateUserDto {
        email: email.to_string(),
        username: username.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        password: "analytical-engine".to_string(),
    }
}

/// Expect 201 for a new account and 400 for the same email again
#[tokio::test]
async fn registers_user_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();

    let first = create_user(
        State(state.clone()),
        Json(registration("ada@example.com", "ada")),
    )
    .await
    .into_response();
    let second = create_user(
        State(state),
        Json(registration("ada@example.com", "ada2")),
    )
    .await
    .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    let created: CreatedUserDto = body_json(first).await;
    assert_eq!(created.username, "ada");
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a password under the minimum length
#[tokio::test]
async fn rejects_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();

    let mut payload = registration("ada@example.com", "ada");
    payload.password = "short".to_string();

    let resp = create_user(State(state), Json(payload)).await.into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 for `me` without a session and 200 with one
#[tokio::test]
async fn me_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .with_user("ada")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let anonymous = get_current_user(State(state.clone()), test.session.clone())
        .await
        .into_response();
    test.login_as(1).await;
    let logged_in = get_current_user(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(logged_in.status(), StatusCode::OK);
    let me: UserDto = body_json(logged_in).await;
    assert_eq!(me.username, "ada");

    Ok(())
}

/// Expect 401 when the session refers to a user that no longer exists
#[tokio::test]
async fn me_rejects_stale_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();
    test.login_as(7).await;

    let resp = get_current_user(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the subscription flag for the logged in viewer
#[tokio::test]
async fn profile_shows_subscription() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    test.user().insert_subscription(2, 1).await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    let resp = get_user(State(state), test.session.clone(), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let profile: UserDto = body_json(resp).await;
    assert!(profile.is_subscribed);

    Ok(())
}

/// Expect 404 for an unknown user profile
#[tokio::test]
async fn profile_returns_not_found() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();

    let resp = get_user(State(state), test.session.clone(), Path(99))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect every registered user in the list
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();

    let resp = list_users(State(state), test.session.clone())
        .await
        .into_response();

    let users: Vec<UserDto> = body_json(resp).await;
    assert_eq!(users.len(), 2);

    Ok(())
}

/// Expect 400 when subscribing to oneself
#[tokio::test]
async fn rejects_self_subscription() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    test.login_as(1).await;
    let state: AppState = test.to_app_state();

    let resp = subscribe(
        State(state),
        test.session.clone(),
        Path(1),
        Query(SubscriptionParams::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 201 with a capped preview, then the author in the subscription list
#[tokio::test]
async fn subscribes_and_lists() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    test.recipe()
        .insert_recipe(1, "Porridge", &[1], &[(1, 5)])
        .await?;
    test.recipe()
        .insert_recipe(1, "Salad", &[2], &[(1, 2)])
        .await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    let created = subscribe(
        State(state.clone()),
        test.session.clone(),
        Path(1),
        Query(SubscriptionParams {
            recipes_limit: Some(1),
        }),
    )
    .await
    .into_response();

    assert_eq!(created.status(), StatusCode::CREATED);
    let subscription: SubscriptionDto = body_json(created).await;
    assert_eq!(subscription.recipes.len(), 1);
    assert_eq!(subscription.recipes_count, 2);

    let listed = list_subscriptions(
        State(state),
        test.session.clone(),
        Query(SubscriptionParams::default()),
    )
    .await
    .into_response();

    let subscriptions: Vec<SubscriptionDto> = body_json(listed).await;
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(subscriptions[0].username, "author");
    assert_eq!(subscriptions[0].recipes.len(), 2);

    Ok(())
}

/// Expect 204 for the first unsubscribe and 400 for the second
#[tokio::test]
async fn unsubscribes_once() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    test.user().insert_subscription(2, 1).await?;
    test.login_as(2).await;
    let state: AppState = test.to_app_state();

    let first = unsubscribe(State(state.clone()), test.session.clone(), Path(1))
        .await
        .into_response();
    let second = unsubscribe(State(state), test.session.clone(), Path(1))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 when subscribing anonymously
#[tokio::test]
async fn subscribe_requires_login() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();

    let resp = subscribe(
        State(state),
        test.session.clone(),
        Path(1),
        Query(SubscriptionParams::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

fn password_change(current: &str, new: &str) -> Json<SetPasswordDto> {
    Json(SetPasswordDto {
        current_password: current.to_string(),
        new_password: new.to_string(),
    })
}

/// Expect 204 for the right current password and 400 once it has changed
#[tokio::test]
async fn changes_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();
    create_user(
        State(state.clone()),
        Json(registration("ada@example.com", "ada")),
    )
    .await
    .into_response();
    test.login_as(1).await;

    let first = set_password(
        State(state.clone()),
        test.session.clone(),
        password_change("analytical-engine", "difference-engine"),
    )
    .await
    .into_response();
    let second = set_password(
        State(state),
        test.session.clone(),
        password_change("analytical-engine", "another-engine"),
    )
    .await
    .into_response();

    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a new password below the minimum length
#[tokio::test]
async fn rejects_short_new_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();
    create_user(
        State(state.clone()),
        Json(registration("ada@example.com", "ada")),
    )
    .await
    .into_response();
    test.login_as(1).await;

    let resp = set_password(
        State(state),
        test.session.clone(),
        password_change("analytical-engine", "short"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 when changing the password anonymously
#[tokio::test]
async fn set_password_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = set_password(
        State(state),
        test.session.clone(),
        password_change("analytical-engine", "difference-engine"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
