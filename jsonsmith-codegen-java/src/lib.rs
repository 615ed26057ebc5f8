//! Java class renderer for JsonSmith.
//!
//! Emits one of three class styles: records, Lombok `@Data` classes, or
//! plain classes with generated getters and setters. Snake_case JSON keys
//! get a Jackson `@JsonProperty` annotation for records and Lombok.

mod renderer;
mod type_mapper;

pub use jsonsmith_codegen::Renderer;
pub use renderer::JavaRenderer;
pub use type_mapper::java_type;
