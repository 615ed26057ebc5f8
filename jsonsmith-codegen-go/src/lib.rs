//! Go struct renderer for JsonSmith.
//!
//! Emits `type Name struct { ... }` declarations with column-aligned fields
//! and a `json:"key"` tag carrying the original key on every field.

mod renderer;
mod type_mapper;

pub use jsonsmith_codegen::Renderer;
pub use renderer::GoRenderer;
pub use type_mapper::go_type;
