//! Java type mapping.

use jsonsmith_ir::FieldType;

/// Map a [`FieldType`] to its Java type expression.
///
/// Collections render as `T[]` when `use_arrays` is set, `List<T>`
/// otherwise.
pub fn java_type(ty: &FieldType, use_arrays: bool) -> String {
    match ty {
        FieldType::String => "String".to_string(),
        FieldType::Boolean => "boolean".to_string(),
        FieldType::Integer => "long".to_string(),
        FieldType::Float => "double".to_string(),
        FieldType::Composite(name) => name.clone(),
        FieldType::List(element) => {
            let element = java_type(element, use_arrays);
            if use_arrays {
                format!("{element}[]")
            } else {
                format!("List<{element}>")
            }
        }
        FieldType::Any => "Object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_types() {
        assert_eq!(java_type(&FieldType::String, true), "String");
        assert_eq!(java_type(&FieldType::Boolean, true), "boolean");
        assert_eq!(java_type(&FieldType::Integer, true), "long");
        assert_eq!(java_type(&FieldType::Float, true), "double");
        assert_eq!(java_type(&FieldType::Any, true), "Object");
    }

    #[test]
    fn test_collection_styles() {
        let tags = FieldType::list(FieldType::String);
        assert_eq!(java_type(&tags, true), "String[]");
        assert_eq!(java_type(&tags, false), "List<String>");

        let grid = FieldType::list(FieldType::list(FieldType::Integer));
        assert_eq!(java_type(&grid, true), "long[][]");
        assert_eq!(java_type(&grid, false), "List<List<long>>");

        let empty = FieldType::list(FieldType::Any);
        assert_eq!(java_type(&empty, true), "Object[]");
        assert_eq!(java_type(&empty, false), "List<Object>");
    }
}
