use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
};

/// Retrieves the logged in user from the session and then from the database
///
/// # Returns
/// - `Ok(Some(UserModel))`: User in session and found in the database
/// - `Ok(None)`: Anonymous session, or the session user no longer exists (session is
///   cleared)
/// - `Err(Error)`: Session or database failure
pub async fn get_optional_user(
    state: &AppState,
    session: &Session,
) -> Result<Option<UserModel>, Error> {
    Ok(lookup_session_user(state, session).await?.ok())
}

/// Same as [`get_optional_user`] but requires a logged in user
///
/// # Returns
/// - `Ok(UserModel)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: Anonymous request
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: Session user no longer exists,
///   the session has been cleared
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    lookup_session_user(state, session)
        .await?
        .map_err(Error::from)
}

/// ID of the requester, `None` when anonymous
pub async fn get_viewer_id(state: &AppState, session: &Session) -> Result<Option<i32>, Error> {
    Ok(get_optional_user(state, session).await?.map(|user| user.id))
}

/// Outer error for session or database failures, inner error for why there is no user
async fn lookup_session_user(
    state: &AppState,
    session: &Session,
) -> Result<Result<UserModel, AuthError>, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Ok(Err(AuthError::UserNotInSession));
    };

    let Some(user) = UserRepository::new(&state.db).get_by_id(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Ok(Err(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(Ok(user))
}
