use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    /// Hex color code such as `#E26C2D`
    pub color: String,
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

/// Ingredient line of a recipe, the ingredient annotated with the recipe's amount
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeIngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// Full recipe representation
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub tags: Vec<TagDto>,
    pub author: UserDto,
    pub ingredients: Vec<RecipeIngredientDto>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    /// URL of the recipe image, empty when the recipe has none
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
}

/// Short recipe representation used by favorites, the shopping cart and subscriptions
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeShortDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngredientAmountDto {
    /// Ingredient ID
    pub id: i32,
    pub amount: i32,
}

/// Payload for creating or updating a recipe
///
/// Scalar fields are optional at the JSON level so that a missing field is reported by
/// recipe validation with a readable message.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeWriteDto {
    #[serde(default)]
    pub ingredients: Vec<IngredientAmountDto>,
    #[serde(default)]
    pub tags: Vec<i32>,
    /// Base64 data URI, `data:image/<ext>;base64,<payload>`
    pub image: Option<String>,
    pub name: Option<String>,
    pub text: Option<String>,
    pub cooking_time: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeListParams {
    /// Tag slugs, a recipe matches when it has any of them
    #[serde(default)]
    pub tags: Vec<String>,
    /// Author user ID
    pub author: Option<i32>,
    /// `1` to only list recipes favorited by the requester
    pub is_favorited: Option<u8>,
    /// `1` to only list recipes in the requester's shopping cart
    pub is_in_shopping_cart: Option<u8>,
}

#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngredientSearchParams {
    /// Case-insensitive name prefix
    pub name: Option<String>,
}
