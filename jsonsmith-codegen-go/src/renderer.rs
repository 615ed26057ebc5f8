//! Go struct rendering with column-aligned fields.

use jsonsmith_codegen::{CodeBuilder, GoConfig, Indent, Renderer};
use jsonsmith_core::to_pascal_case;
use jsonsmith_ir::{Artifact, CompositeTypeDef, RenderedType, TypeRegistry};

use crate::type_mapper::go_type;

/// Renders a [`TypeRegistry`] as Go structs.
pub struct GoRenderer {
    config: GoConfig,
}

impl GoRenderer {
    pub fn new(config: GoConfig) -> Self {
        Self { config }
    }

    /// Render one struct. Field names and types are padded to their column
    /// widths so the tags line up; this alignment is part of the output
    /// contract.
    fn render_struct(&self, def: &CompositeTypeDef) -> String {
        let members: Vec<(String, String, String)> = def
            .fields
            .iter()
            .map(|field| {
                (
                    to_pascal_case(&field.key),
                    go_type(&field.ty),
                    format!("`json:\"{}\"`", field.key),
                )
            })
            .collect();

        let name_width = members.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);
        let type_width = members.iter().map(|(_, ty, _)| ty.len()).max().unwrap_or(0);

        let mut builder = CodeBuilder::new(Indent::GO);
        builder.line(&format!("type {} struct {{", def.name));
        builder.indent();
        for (name, ty, tag) in &members {
            builder.line(&format!("{name:<name_width$} {ty:<type_width$} {tag}"));
        }
        builder.dedent();
        builder.line("}");
        builder.build()
    }
}

impl Renderer for GoRenderer {
    fn language(&self) -> &'static str {
        "go"
    }

    fn render(&self, registry: &TypeRegistry) -> Artifact {
        let types = registry
            .iter()
            .map(|def| RenderedType {
                name: def.name.clone(),
                body: self.render_struct(def),
            })
            .collect();
        let file_name = format!("{}{}", self.config.class_name, self.config.file_extension);
        Artifact::compose(file_name, None, types)
    }
}
