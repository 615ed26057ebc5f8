//! Language-agnostic rendering contract.

use jsonsmith_ir::{Artifact, TypeRegistry};

/// Trait for language-specific renderers.
///
/// Implement this trait to add support for emitting declarations in a new
/// target language. A renderer consumes the insertion-ordered registry and
/// produces a single [`Artifact`]; it must emit each composite type exactly
/// once and concatenate bodies in reverse registration order so the root
/// type reads first.
pub trait Renderer {
    /// Language identifier (e.g., "kotlin", "java", "go")
    fn language(&self) -> &'static str;

    /// Render the registry into a single artifact.
    fn render(&self, registry: &TypeRegistry) -> Artifact;
}
