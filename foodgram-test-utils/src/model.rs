//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main foodgram crate so fixtures and tests read the
//! same way.

pub type UserModel = entity::foodgram_user::Model;

pub type IngredientModel = entity::ingredient::Model;

pub type TagModel = entity::tag::Model;

pub type RecipeModel = entity::recipe::Model;

pub type SubscriptionModel = entity::subscription::Model;
