//! Java class rendering.

use jsonsmith_codegen::{CodeBuilder, Indent, JavaConfig, JavaStyle, Renderer};
use jsonsmith_core::capitalize_first;
use jsonsmith_ir::{Artifact, CompositeTypeDef, Field, RenderedType, TypeRegistry};

use crate::type_mapper::java_type;

/// Renders a [`TypeRegistry`] as Java classes.
pub struct JavaRenderer {
    config: JavaConfig,
}

impl JavaRenderer {
    pub fn new(config: JavaConfig) -> Self {
        Self { config }
    }

    fn render_class(&self, def: &CompositeTypeDef) -> String {
        match self.config.style {
            JavaStyle::Records => self.render_record(def),
            JavaStyle::Lombok => self.render_lombok(def),
            JavaStyle::PlainTypes => self.render_plain(def),
        }
    }

    fn render_record(&self, def: &CompositeTypeDef) -> String {
        let mut builder = CodeBuilder::new(Indent::JAVA);
        builder.line(&format!("public record {} (", def.name));
        builder.indent();
        let last = def.fields.len().saturating_sub(1);
        for (index, field) in def.fields.iter().enumerate() {
            if field.renamed {
                builder.line(&format!("@JsonProperty(\"{}\")", field.key));
            }
            let comma = if index == last { "" } else { "," };
            builder.line(&format!(
                "{} {}{comma}",
                java_type(&field.ty, self.config.use_arrays),
                field.name
            ));
        }
        builder.dedent();
        builder.line("){}");
        builder.build()
    }

    fn render_lombok(&self, def: &CompositeTypeDef) -> String {
        let mut builder = CodeBuilder::new(Indent::JAVA);
        builder.line("@Data");
        builder.line(&format!("public class {} {{", def.name));
        builder.indent();
        for field in &def.fields {
            if field.renamed {
                builder.line(&format!("@JsonProperty(\"{}\")", field.key));
            }
            builder.line(&self.field_declaration(field));
        }
        builder.dedent();
        builder.line("}");
        builder.build()
    }

    fn render_plain(&self, def: &CompositeTypeDef) -> String {
        let mut builder = CodeBuilder::new(Indent::JAVA);
        builder.line(&format!("public class {} {{", def.name));
        builder.indent();
        for field in &def.fields {
            builder.line(&self.field_declaration(field));
        }
        builder.blank();
        for field in &def.fields {
            let ty = java_type(&field.ty, self.config.use_arrays);
            let accessor = capitalize_first(&field.name);
            builder.line(&format!("public {ty} get{accessor}() {{"));
            builder.indent();
            builder.line(&format!("return {};", field.name));
            builder.dedent();
            builder.line("}");
            builder.line(&format!("public void set{accessor}({ty} {}) {{", field.name));
            builder.indent();
            builder.line(&format!("this.{0} = {0};", field.name));
            builder.dedent();
            builder.line("}");
        }
        builder.dedent();
        builder.line("}");
        builder.build()
    }

    fn field_declaration(&self, field: &Field) -> String {
        format!(
            "private {} {};",
            java_type(&field.ty, self.config.use_arrays),
            field.name
        )
    }

    fn imports(&self, registry: &TypeRegistry) -> Option<String> {
        let mut block = String::new();
        if self.config.style == JavaStyle::Lombok {
            block.push_str("import lombok.Data;\n");
        }
        // Jackson annotations only appear for records and Lombok, and only
        // when some emitted class actually has a renamed field.
        if matches!(self.config.style, JavaStyle::Records | JavaStyle::Lombok)
            && registry.has_renamed_field()
        {
            block.push_str("import com.fasterxml.jackson.annotation.JsonProperty;\n");
        }
        if !self.config.use_arrays && registry.has_list_field() {
            block.push_str("import java.util.List;\n");
        }
        (!block.is_empty()).then_some(block)
    }
}

impl Renderer for JavaRenderer {
    fn language(&self) -> &'static str {
        "java"
    }

    fn render(&self, registry: &TypeRegistry) -> Artifact {
        let types = registry
            .iter()
            .map(|def| RenderedType {
                name: def.name.clone(),
                body: self.render_class(def),
            })
            .collect();
        let file_name = format!("{}{}", self.config.class_name, self.config.file_extension);
        Artifact::compose(file_name, self.imports(registry), types)
    }
}
