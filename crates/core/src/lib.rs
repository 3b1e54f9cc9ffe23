//! Shared domain types for the cinelog backend.
//!
//! Kept deliberately small: the error taxonomy every layer maps into, and
//! the id/timestamp aliases used across crates.

pub mod error;
pub mod types;
