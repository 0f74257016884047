//! Test fixture modules for database record creation.
//!
//! - `user` - users and subscriptions between them
//! - `recipe` - tags, ingredients, recipes, favorites and shopping cart entries

pub mod recipe;
pub mod user;
