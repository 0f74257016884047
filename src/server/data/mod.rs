//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each (or one association table). They are
//! generic over [`sea_orm::ConnectionTrait`] so the same repository runs against a plain
//! connection or inside a transaction.

pub mod favorite;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod recipe_tag;
pub mod shopping_cart;
pub mod subscription;
pub mod tag;
pub mod user;
