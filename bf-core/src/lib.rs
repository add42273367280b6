//! Core utilities and types for the bf scaffolding generator.
//!
//! This crate provides the case conversion used to derive file names and
//! identifiers, the shared error type, and create-only file output.

mod casing;
mod error;
mod file;

// String utilities
pub use casing::{to_camel_case, to_pascal_case, to_snake_case};
// Errors
pub use error::{EngineError, Error, Result};
// File operations
pub use file::{File, ensure_dir};
