//! Utility functions shared by the services.
//!
//! Recipe image decoding and storage, password hashing, and recipe ownership checks.

pub mod image;
pub mod password;
pub mod permission;
