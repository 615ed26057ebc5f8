//! Kotlin data class rendering.

use jsonsmith_codegen::{CodeBuilder, Indent, KotlinConfig, KotlinFramework, Renderer};
use jsonsmith_ir::{Artifact, CompositeTypeDef, RenderedType, TypeRegistry};

use crate::type_mapper::kotlin_type;

/// Renders a [`TypeRegistry`] as Kotlin data classes.
pub struct KotlinRenderer {
    config: KotlinConfig,
}

impl KotlinRenderer {
    pub fn new(config: KotlinConfig) -> Self {
        Self { config }
    }

    fn render_class(&self, def: &CompositeTypeDef) -> String {
        let mut builder = CodeBuilder::new(Indent::KOTLIN);
        if self.config.framework == KotlinFramework::Kotlinx {
            builder.line("@Serializable");
        }
        builder.line(&format!("data class {}(", def.name));
        builder.indent();
        for field in &def.fields {
            if field.renamed {
                builder.line(&self.field_annotation(&field.key));
            }
            let ty = kotlin_type(&field.ty);
            // `Any?` is already nullable; avoid doubling the marker.
            let optional = match self.config.optional_properties {
                true if ty.ends_with('?') => " = null",
                true => "? = null",
                false => "",
            };
            builder.line(&format!("val {}: {}{},", field.name, ty, optional));
        }
        builder.dedent();
        builder.line(")");
        builder.build()
    }

    fn field_annotation(&self, key: &str) -> String {
        match self.config.framework {
            KotlinFramework::Kotlinx => format!("@SerialName(\"{key}\")"),
            KotlinFramework::Gson => format!("@SerializedName(\"{key}\")"),
            KotlinFramework::Jackson => format!("@JsonProperty(\"{key}\")"),
        }
    }

    fn imports(&self, registry: &TypeRegistry) -> Option<String> {
        let renamed = registry.has_renamed_field();
        match self.config.framework {
            KotlinFramework::Kotlinx => {
                let mut block = String::from("import kotlinx.serialization.Serializable\n");
                if renamed {
                    block.push_str("import kotlinx.serialization.SerialName\n");
                }
                Some(block)
            }
            KotlinFramework::Gson => renamed
                .then(|| "import com.google.gson.annotations.SerializedName\n".to_string()),
            KotlinFramework::Jackson => renamed
                .then(|| "import com.fasterxml.jackson.annotation.JsonProperty\n".to_string()),
        }
    }
}

impl Renderer for KotlinRenderer {
    fn language(&self) -> &'static str {
        "kotlin"
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

#[cfg(test)]
mod tests {
    use jsonsmith_ir::{Field, FieldType};

    use super::*;

    fn registry_with(fields: Vec<Field>) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register("JsonClass", fields);
        registry
    }

    fn field(key: &str, ty: FieldType) -> Field {
        Field {
            key: key.to_string(),
            name: key.to_string(),
            ty,
            renamed: false,
        }
    }

    #[test]
    fn test_renamed_field_gets_serial_name() {
        let registry = registry_with(vec![Field {
            key: "user_id".to_string(),
            name: "userId".to_string(),
            ty: FieldType::Integer,
            renamed: true,
        }]);
        let artifact = KotlinRenderer::new(KotlinConfig::default()).render(&registry);

        assert!(artifact.text.contains("@SerialName(\"user_id\")"));
        assert!(artifact.text.contains("val userId: Long? = null,"));
        assert!(
            artifact
                .imports
                .as_deref()
                .unwrap()
                .contains("import kotlinx.serialization.SerialName")
        );
    }

    #[test]
    fn test_gson_imports_only_when_renamed() {
        let config = KotlinConfig {
            framework: KotlinFramework::Gson,
            ..KotlinConfig::default()
        };

        let plain = registry_with(vec![field("name", FieldType::String)]);
        let artifact = KotlinRenderer::new(config.clone()).render(&plain);
        assert!(artifact.imports.is_none());

        let renamed = registry_with(vec![Field {
            key: "user_id".to_string(),
            name: "userId".to_string(),
            ty: FieldType::Integer,
            renamed: true,
        }]);
        let artifact = KotlinRenderer::new(config).render(&renamed);
        assert_eq!(
            artifact.imports.as_deref(),
            Some("import com.google.gson.annotations.SerializedName\n")
        );
        assert!(artifact.text.contains("@SerializedName(\"user_id\")"));
        assert!(!artifact.text.contains("@Serializable"));
    }

    #[test]
    fn test_null_field_does_not_double_nullability() {
        let registry = registry_with(vec![field("extra", FieldType::Any)]);
        let artifact = KotlinRenderer::new(KotlinConfig::default()).render(&registry);

        assert!(artifact.text.contains("val extra: Any? = null,"));
        assert!(!artifact.text.contains("Any??"));
    }

    #[test]
    fn test_required_properties_have_no_default() {
        let config = KotlinConfig {
            optional_properties: false,
            ..KotlinConfig::default()
        };
        let registry = registry_with(vec![field("name", FieldType::String)]);
        let artifact = KotlinRenderer::new(config).render(&registry);

        assert!(artifact.text.contains("val name: String,"));
        assert!(!artifact.text.contains("= null"));
    }

    #[test]
    fn test_file_name_uses_class_name_and_extension() {
        let registry = registry_with(vec![field("name", FieldType::String)]);
        let artifact = KotlinRenderer::new(KotlinConfig::default()).render(&registry);
        assert_eq!(artifact.file_name, "JsonClass.kt");
    }
}
