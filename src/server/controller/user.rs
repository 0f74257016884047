use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{
            CreateUserDto, CreatedUserDto, SetPasswordDto, SubscriptionDto, SubscriptionParams,
            UserDto,
        },
    },
    server::{
        controller::util::get_user::{get_user_from_session, get_viewer_id},
        error::Error,
        model::app::AppState,
        service::{
            recipe::projection::RecipeProjector, subscription::SubscriptionService,
            user::UserService,
        },
    },
};

pub static USER_TAG: &str = "user";

/// List every user
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_id(&state, &session).await?;

    let users = UserService::new(&state.db).list(viewer).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = CreatedUserDto),
        (status = 400, description = "Invalid or duplicate registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user = RecipeProjector::new(&state.db)
        .user_profile(user, None)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Change the logged in user's password
#[utoipa::path(
    post,
    path = "/api/users/set_password",
    tag = USER_TAG,
    request_body = SetPasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Wrong current password or invalid new password", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    UserService::new(&state.db)
        .set_password(&user, payload)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a user profile by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_id(&state, &session).await?;

    let user = UserService::new(&state.db)
        .get_profile(user_id, viewer)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// List authors the logged in user is subscribed to
#[utoipa::path(
    get,
    path = "/api/users/subscriptions",
    tag = USER_TAG,
    params(SubscriptionParams),
    responses(
        (status = 200, description = "Followed authors with recipe previews", body = Vec<SubscriptionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SubscriptionParams>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let subscriptions = SubscriptionService::new(&state.db)
        .list(user.id, params.recipes_limit)
        .await?;

    Ok((StatusCode::OK, Json(subscriptions)))
}

/// Subscribe to an author
#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Author user ID"), SubscriptionParams),
    responses(
        (status = 201, description = "Subscribed", body = SubscriptionDto),
        (status = 400, description = "Self-subscription or already subscribed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
    Query(params): Query<SubscriptionParams>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let subscription = SubscriptionService::new(&state.db)
        .subscribe(user.id, author_id, params.recipes_limit)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription)))
}

/// Unsubscribe from an author
#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Author user ID")),
    responses(
        (status = 204, description = "Unsubscribed"),
        (status = 400, description = "Not subscribed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    SubscriptionService::new(&state.db)
        .unsubscribe(user.id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
