//! Server application core modules.
//!
//! This module contains the backend of the Foodgram recipe sharing API: HTTP routing and
//! handlers, session based authentication, the SeaORM data layer, and the services
//! implementing recipe writes, favorites, the shopping cart, shopping list aggregation and
//! author subscriptions.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
