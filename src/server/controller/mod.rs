//! HTTP controller endpoints for the Foodgram API.
//!
//! Axum handlers for authentication, users and subscriptions, recipes with their favorite
//! and shopping cart toggles, tags, and ingredients. Handlers resolve the requester from the
//! tower-sessions session, call into the service layer, and are documented with utoipa.

pub mod auth;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
pub mod util;
