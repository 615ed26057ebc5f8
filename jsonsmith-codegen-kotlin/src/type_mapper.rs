//! Kotlin type mapping.

use jsonsmith_ir::FieldType;

/// Map a [`FieldType`] to its Kotlin type expression.
pub fn kotlin_type(ty: &FieldType) -> String {
    match ty {
        FieldType::String => "String".to_string(),
        FieldType::Boolean => "Boolean".to_string(),
        FieldType::Integer => "Long".to_string(),
        FieldType::Float => "Double".to_string(),
        FieldType::Composite(name) => name.clone(),
        FieldType::List(element) => format!("List<{}>", kotlin_type(element)),
        FieldType::Any => "Any?".to_string(),
    }
}
