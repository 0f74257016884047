//! Server application models and type definitions.
//!
//! Application state shared by handlers, database model type aliases, and session data
//! structures.

pub mod app;
pub mod db;
pub mod session;
