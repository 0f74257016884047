use serde::{Deserialize, Serialize};

use crate::model::recipe::RecipeShortDto;

/// Public profile of a user as seen by the requester
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the requester follows this user, always false for anonymous requests
    pub is_subscribed: bool,
}

/// Registration payload
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Response for a successful registration
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatedUserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Password change payload for the logged in user
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetPasswordDto {
    pub current_password: String,
    pub new_password: String,
}

/// A followed author with a preview of their recipes
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubscriptionDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub recipes: Vec<RecipeShortDto>,
    /// Total number of recipes by the author, not capped by `recipes_limit`
    pub recipes_count: u64,
}

#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SubscriptionParams {
    /// Maximum number of recipes previewed per author
    pub recipes_limit: Option<i64>,
}
