//! Core utilities for the JsonSmith code generator.
//!
//! This crate provides the naming primitives and file-writing helpers used
//! across the JsonSmith ecosystem.

mod file;
mod naming;

// File operations
pub use file::{File, write_file};
// String utilities
pub use naming::{capitalize_first, is_snake_case, to_camel_case, to_pascal_case};
