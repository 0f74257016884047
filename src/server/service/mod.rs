//! Service layer for business logic.
//!
//! Services coordinate repositories, enforce ownership and membership rules, and build the
//! DTOs returned by the controllers.

pub mod collection;
pub mod recipe;
pub mod shopping_list;
pub mod subscription;
pub mod user;
