use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::client_error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("{0} - this field is required")]
    RequiredField(&'static str),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Username may contain only letters, digits and @/./+/-/_ and be at most {0} characters")]
    InvalidUsername(usize),
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
    #[error("Current password is incorrect")]
    InvalidCurrentPassword,
    #[error("A user with that email already exists")]
    EmailTaken,
    #[error("A user with that username already exists")]
    UsernameTaken,
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("You cannot subscribe to yourself")]
    SelfSubscription,
    #[error("You are already subscribed to this user")]
    AlreadySubscribed,
    #[error("You are not subscribed to this user")]
    NotSubscribed,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotFound(_) => client_error(StatusCode::NOT_FOUND, self),
            err => client_error(StatusCode::BAD_REQUEST, err),
        }
    }
}
