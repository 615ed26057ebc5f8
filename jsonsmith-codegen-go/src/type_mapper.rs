//! Go type mapping.

use jsonsmith_ir::FieldType;

/// Map a [`FieldType`] to its Go type expression.
pub fn go_type(ty: &FieldType) -> String {
    match ty {
        FieldType::String => "string".to_string(),
        FieldType::Boolean => "bool".to_string(),
        FieldType::Integer => "int64".to_string(),
        FieldType::Float => "float64".to_string(),
        FieldType::Composite(name) => name.clone(),
        FieldType::List(element) => format!("[]{}", go_type(element)),
        FieldType::Any => "interface{}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_types() {
        assert_eq!(go_type(&FieldType::String), "string");
        assert_eq!(go_type(&FieldType::Boolean), "bool");
        assert_eq!(go_type(&FieldType::Integer), "int64");
        assert_eq!(go_type(&FieldType::Float), "float64");
        assert_eq!(go_type(&FieldType::Any), "interface{}");
    }

    #[test]
    fn test_slice_types() {
        assert_eq!(go_type(&FieldType::list(FieldType::String)), "[]string");
        assert_eq!(
            go_type(&FieldType::list(FieldType::Composite("Items".to_string()))),
            "[]Items"
        );
        assert_eq!(
            go_type(&FieldType::list(FieldType::list(FieldType::Integer))),
            "[][]int64"
        );
        assert_eq!(go_type(&FieldType::list(FieldType::Any)), "[]interface{}");
    }
}
