use foodgram::server::{
    controller::util::get_user::{get_optional_user, get_user_from_session},
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId},
};

use super::*;

/// Expect UserNotInSession for an anonymous request
#[tokio::test]
async fn requires_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = get_user_from_session(&state, &test.session).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Expect UserNotInDatabase and a cleared session when the session user was deleted
#[tokio::test]
async fn clears_session_of_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();
    test.login_as(7).await;

    let result = get_user_from_session(&state, &test.session).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::UserNotInDatabase(7)))
    ));
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect a deleted session user to be treated as anonymous by optional lookups
#[tokio::test]
async fn optional_lookup_ignores_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let state: AppState = test.to_app_state();
    test.login_as(7).await;

    let result = get_optional_user(&state, &test.session).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect the stored user for a valid session
#[tokio::test]
async fn returns_session_user() -> Result<(), TestError> {
    let test = recipe_setup().await?;
    let state: AppState = test.to_app_state();
    test.login_as(2).await;

    let user = get_user_from_session(&state, &test.session).await.unwrap();

    assert_eq!(user.username, "reader");

    Ok(())
}
