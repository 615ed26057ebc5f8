//! Kotlin data class renderer for JsonSmith.
//!
//! Emits `data class` declarations with kotlinx.serialization, Gson, or
//! Jackson annotations on fields whose JSON key is snake_case.

mod renderer;
mod type_mapper;

pub use jsonsmith_codegen::Renderer;
pub use renderer::KotlinRenderer;
pub use type_mapper::kotlin_type;
