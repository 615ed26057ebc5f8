//! Field and composite-type definitions.

/// The resolved type of a single field, independent of any target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A string primitive.
    String,
    /// A boolean primitive.
    Boolean,
    /// A 64-bit integer primitive.
    Integer,
    /// A 64-bit floating-point primitive.
    Float,
    /// A reference to a composite type registered under this name.
    Composite(String),
    /// An ordered collection of the wrapped element type.
    List(Box<FieldType>),
    /// Dynamic fallback for null values and empty arrays.
    Any,
}

impl FieldType {
    /// Convenience constructor for a list of the given element type.
    pub fn list(element: FieldType) -> Self {
        FieldType::List(Box::new(element))
    }

    /// Returns true if this type (or any element type it wraps) is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, FieldType::List(_))
    }
}

/// One field of a composite type.
#[derive(Debug, Clone)]
pub struct Field {
    /// The original JSON key, exactly as it appeared in the document.
    pub key: String,
    /// The normalized field name (camelCase if the key was snake_case).
    pub name: String,
    /// The resolved field type.
    pub ty: FieldType,
    /// True if the key contains an underscore, meaning the target needs a
    /// serialization-name annotation to map back to the original key.
    pub renamed: bool,
}

/// A named class/struct derived from one JSON object shape.
#[derive(Debug, Clone)]
pub struct CompositeTypeDef {
    /// Type name as registered (may carry a collision suffix, e.g. "Data2").
    pub name: String,
    /// Fields in the JSON object's key order.
    pub fields: Vec<Field>,
}

impl CompositeTypeDef {
    /// Returns true if any field's key required renaming.
    pub fn has_renamed_field(&self) -> bool {
        self.fields.iter().any(|f| f.renamed)
    }
}
