//! Foodgram: a recipe sharing API.
//!
//! The `model` module holds the JSON data transfer objects exchanged with API clients,
//! `server` holds everything else (configuration, persistence, services, and HTTP
//! handlers).

pub mod model;
pub mod server;
