//! Schema inference and shared code generation machinery for JsonSmith.
//!
//! This crate provides the language-agnostic parts of the pipeline:
//!
//! - [`infer`] - the recursive walk from a JSON document to a [`jsonsmith_ir::TypeRegistry`]
//! - [`Target`] - the closed set of target languages with their configs
//! - [`Renderer`] - the uniform contract implemented by each language crate
//! - [`CodeBuilder`] - indented text building for the renderers
//! - [`Error`] - miette diagnostics for parse and shape failures

mod builder;
mod error;
mod infer;
mod language;
mod target;

pub use builder::{CodeBuilder, Indent};
pub use error::{Error, Result};
pub use infer::infer;
pub use language::Renderer;
pub use target::{
    GoConfig, JavaConfig, JavaStyle, KotlinConfig, KotlinFramework, Language, Target,
};
