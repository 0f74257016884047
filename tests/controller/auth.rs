use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use foodgram::{
    model::user::{CreateUserDto, LoginDto, UserDto},
    server::{
        controller::auth::{login, logout},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

use super::*;

async fn register(test: &TestContext) -> i32 {
    UserService::new(&test.db)
        .register(CreateUserDto {
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "analytical-engine".to_string(),
        })
        .await
        .unwrap()
        .id
}

/// Expect 200 and the user stored in session for valid credentials
#[tokio::test]
async fn login_stores_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_id = register(&test).await;
    let state: AppState = test.to_app_state();

    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: "ada@example.com".to_string(),
            password: "analytical-engine".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.id, user_id);
    assert_eq!(
        SessionUserId::get(&test.session).await.unwrap(),
        Some(user_id)
    );

    Ok(())
}

/// Expect 400 and an anonymous session for a wrong password
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    register(&test).await;
    let state: AppState = test.to_app_state();

    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: "ada@example.com".to_string(),
            password: "difference-engine".to_string(),
        }),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 and a cleared session after logout
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .with_user("ada")
        .build()
        .await?;
    test.login_as(1).await;
    let state: AppState = test.to_app_state();

    let result = logout(State(state), test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 401 when logging out without being logged in
#[tokio::test]
async fn logout_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = logout(State(state), test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
