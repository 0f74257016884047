use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::client_error;

/// Recipe errors
///
/// Validation variants are listed in the order recipe validation checks them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecipeError {
    #[error("At least one tag is required")]
    TagsRequired,
    #[error("Tags must be unique")]
    DuplicateTags,
    #[error("{0} - this field is required")]
    RequiredField(&'static str),
    #[error("At least one ingredient is required")]
    IngredientsRequired,
    #[error("A recipe cannot have more than {0} ingredients")]
    TooManyIngredients(usize),
    #[error("Ingredients must be unique")]
    DuplicateIngredients,
    #[error("Cooking time must be between {min} and {max} minutes")]
    CookingTimeOutOfRange { min: i32, max: i32 },
    #[error("Ingredient amount must be greater than zero")]
    AmountNotPositive,
    #[error("Ingredient amount must be between {min} and {max}")]
    AmountOutOfRange { min: i32, max: i32 },
    #[error("Recipe name cannot be longer than {0} characters")]
    NameTooLong(usize),
    #[error("Tag ID {0} does not exist")]
    UnknownTag(i32),
    #[error("Ingredient ID {0} does not exist")]
    UnknownIngredient(i32),
    #[error("Invalid image: {0}")]
    InvalidImage(String),
    #[error("Recipe ID {0} not found")]
    RecipeNotFound(i32),
    #[error("Ingredient ID {0} not found")]
    IngredientNotFound(i32),
    #[error("Tag ID {0} not found")]
    TagNotFound(i32),
    #[error("Recipe is already in favorites")]
    AlreadyFavorited,
    #[error("Recipe is not in favorites")]
    NotFavorited,
    #[error("Recipe is already in the shopping cart")]
    AlreadyInCart,
    #[error("Recipe is not in the shopping cart")]
    NotInCart,
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        match self {
            Self::RecipeNotFound(_) | Self::IngredientNotFound(_) | Self::TagNotFound(_) => {
                client_error(StatusCode::NOT_FOUND, self)
            }
            err => client_error(StatusCode::BAD_REQUEST, err),
        }
    }
}
