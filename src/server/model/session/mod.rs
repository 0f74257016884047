//! Session data models.
//!
//! Type-safe wrappers for values stored in the tower-sessions store.

pub mod user;
