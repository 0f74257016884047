use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::{recipe::projection::RecipeProjector, user::UserService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with email and password
///
/// Stores the user in the session, the session cookie authenticates later requests.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .authenticate(&payload.email, &payload.password)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = user.id, "User logged in");

    let user = RecipeProjector::new(&state.db)
        .user_profile(user, None)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Log out by clearing the session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    session.clear().await;

    tracing::debug!(user_id = user.id, "User logged out");

    Ok(StatusCode::NO_CONTENT)
}
