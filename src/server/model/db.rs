//! Database model type aliases.
//!
//! Shorter names for the SeaORM models generated in the `entity` crate.

/// Registered user, also the author of recipes.
///
/// # Fields (from `entity::foodgram_user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login key
/// - `username` - Unique public name
/// - `first_name`, `last_name`
/// - `password_hash` - argon2 PHC string
/// - `created_at` - Registration timestamp
pub type UserModel = entity::foodgram_user::Model;

/// Ingredient reference data (`name`, `measurement_unit`).
pub type IngredientModel = entity::ingredient::Model;

/// Tag reference data (`name`, `color`, `slug`, each unique).
pub type TagModel = entity::tag::Model;

/// Recipe scalar fields; tags and ingredient amounts live in the association tables.
pub type RecipeModel = entity::recipe::Model;

/// Amount of one ingredient used by one recipe.
pub type RecipeIngredientModel = entity::recipe_ingredient::Model;

/// Follow edge from a subscriber to an author.
pub type SubscriptionModel = entity::subscription::Model;
