//! Intermediate representation types for the JsonSmith code generator.
//!
//! This crate provides the type definitions shared across the JsonSmith
//! pipeline. These types serve as the single source of truth between schema
//! inference and language-specific rendering.
//!
//! # Architecture
//!
//! ```text
//! JSON text → inference (jsonsmith-codegen) → TypeRegistry (this crate) → renderer → Artifact
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no Kotlin/Java/Go-specific concerns)
//! - Insertion-ordered (type discovery order is a visible output contract)
//! - Immutable once registered

mod artifact;
mod registry;
mod types;

pub use artifact::{Artifact, RenderedType};
pub use registry::TypeRegistry;
pub use types::{CompositeTypeDef, Field, FieldType};
