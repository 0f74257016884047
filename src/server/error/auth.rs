use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::client_error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication credentials were not provided")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Unable to log in with the provided credentials")]
    InvalidCredentials,
    #[error("User ID {user_id} is not the author of recipe ID {recipe_id}")]
    NotRecipeAuthor { recipe_id: i32, user_id: i32 },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => client_error(StatusCode::UNAUTHORIZED, self),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                client_error(
                    StatusCode::UNAUTHORIZED,
                    Self::UserNotInSession,
                )
            }
            Self::InvalidCredentials => client_error(StatusCode::BAD_REQUEST, self),
            Self::NotRecipeAuthor { .. } => {
                tracing::debug!("{}", self);

                client_error(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
        }
    }
}
