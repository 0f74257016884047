//! Data transfer objects shared by the HTTP API and its OpenAPI documentation.

pub mod api;
pub mod recipe;
pub mod user;
