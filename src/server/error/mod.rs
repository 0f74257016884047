//! Error types for the Foodgram server.
//!
//! Domain errors live in their own modules (authentication, configuration, recipes,
//! users) and are aggregated by [`Error`]. Every error implements `IntoResponse`, producing
//! a JSON [`ErrorDto`] body. Client errors are logged at debug level, anything mapped to a
//! 500 response is logged at error level.

pub mod auth;
pub mod config;
pub mod recipe;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, recipe::RecipeError, user::UserError},
};

/// Main error type for the Foodgram server.
///
/// Uses `thiserror`'s `#[from]` attribute so domain and library errors convert with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or permission error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Recipe validation, lookup, favorite and shopping cart errors.
    #[error(transparent)]
    RecipeError(#[from] RecipeError),
    /// Registration, user lookup and subscription errors.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug or an unexpected library failure.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Filesystem error while storing media or binding the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RecipeError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response for a client error and logs it at debug level.
pub(crate) fn client_error<E: std::fmt::Display>(status: StatusCode, err: E) -> Response {
    tracing::debug!(status = %status, "{}", err);

    (
        status,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
