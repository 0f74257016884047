//! Integration tests for the HTTP controllers.
//!
//! Handlers are called directly with their extractors and the returned responses are
//! checked for status codes and bodies.

mod auth;
mod get_user;
mod ingredient;
mod recipe;
mod tag;
mod user;

use foodgram_test_utils::prelude::*;

use crate::util::{body_json, body_text, recipe_payload, recipe_setup, TestContextExt};
