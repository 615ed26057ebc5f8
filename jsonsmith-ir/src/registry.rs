//! Insertion-ordered registry of discovered composite types.

use indexmap::IndexMap;

use crate::{CompositeTypeDef, Field};

/// All composite types discovered while inferring one document's schema.
///
/// Iteration order is first-registration order: nested types are always
/// registered before the type whose field references them, so the root type
/// comes last. Renderers reverse this order for the final text so the root
/// type is emitted first.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, CompositeTypeDef>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a composite type under `name`, returning the name actually
    /// used.
    ///
    /// A registered entry is never overwritten: if `name` is already taken
    /// by a different substructure, a numeric suffix is appended ("Data"
    /// collides to "Data2", then "Data3", and so on).
    pub fn register(&mut self, name: &str, fields: Vec<Field>) -> String {
        let name = self.unique_name(name);
        self.types.insert(
            name.clone(),
            CompositeTypeDef {
                name: name.clone(),
                fields,
            },
        );
        name
    }

    fn unique_name(&self, name: &str) -> String {
        if !self.types.contains_key(name) {
            return name.to_string();
        }
        let mut counter = 2;
        loop {
            let candidate = format!("{name}{counter}");
            if !self.types.contains_key(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Look up a composite type by name.
    pub fn get(&self, name: &str) -> Option<&CompositeTypeDef> {
        self.types.get(name)
    }

    /// Iterate composite types in registration order (nested before parent).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CompositeTypeDef> {
        self.types.values()
    }

    /// True if any registered type has a renamed field.
    pub fn has_renamed_field(&self) -> bool {
        self.iter().any(CompositeTypeDef::has_renamed_field)
    }

    /// True if any field of any registered type is a list.
    pub fn has_list_field(&self) -> bool {
        self.iter().any(|def| def.fields.iter().any(|f| f.ty.is_list()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
