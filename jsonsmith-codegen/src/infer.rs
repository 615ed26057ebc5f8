//! Type inference: from a JSON document to a registry of composite types.

use jsonsmith_core::{is_snake_case, to_camel_case};
use jsonsmith_ir::{Field, FieldType, TypeRegistry};
use serde_json::{Map, Value};

use crate::{Error, Result, Target};

/// Infer a [`TypeRegistry`] from raw JSON text.
///
/// The root must be an object, or an array whose first element is an
/// object; anything else is an unrenderable shape. Types are registered
/// bottom-up, so nested composites always precede the type that references
/// them.
pub fn infer(json: &str, target: &Target) -> Result<TypeRegistry> {
    let value: Value =
        serde_json::from_str(json.trim()).map_err(|source| Error::parse(source, json))?;

    let root = match &value {
        Value::Object(object) => object,
        Value::Array(items) => match items.first() {
            Some(Value::Object(object)) => object,
            Some(_) => {
                return Err(Error::unrenderable_shape(
                    "the array's first element is not an object",
                    json,
                ));
            }
            None => return Err(Error::unrenderable_shape("the array is empty", json)),
        },
        _ => {
            return Err(Error::unrenderable_shape(
                "the root value is not an object or array",
                json,
            ));
        }
    };

    let mut registry = TypeRegistry::new();
    infer_object(root, target.class_name(), &mut registry, target);
    Ok(registry)
}

/// Infer one composite type from a JSON object and register it, returning
/// the registered name.
///
/// Field types are resolved first so that nested composites land in the
/// registry before their parent.
fn infer_object(
    object: &Map<String, Value>,
    name: &str,
    registry: &mut TypeRegistry,
    target: &Target,
) -> String {
    let mut fields = Vec::with_capacity(object.len());
    for (key, value) in object {
        let ty = resolve_type(value, &target.type_name(key), registry, target);
        let renamed = is_snake_case(key);
        let name = if renamed { to_camel_case(key) } else { key.clone() };
        fields.push(Field {
            key: key.clone(),
            name,
            ty,
            renamed,
        });
    }
    registry.register(name, fields)
}

/// Classify one JSON value into a [`FieldType`].
///
/// `name_hint` is the composite-type name to use if this value (or an
/// array element under it) turns out to be an object. Arrays use their
/// first element as representative; an empty array at any depth falls back
/// to a list of the dynamic type.
fn resolve_type(
    value: &Value,
    name_hint: &str,
    registry: &mut TypeRegistry,
    target: &Target,
) -> FieldType {
    match value {
        Value::String(_) => FieldType::String,
        Value::Bool(_) => FieldType::Boolean,
        // Integer-representable wins over float: serde_json reports `5` as
        // i64 but `5.0` as f64, so the tie-break is lexical.
        Value::Number(number) if number.is_i64() || number.is_u64() => FieldType::Integer,
        Value::Number(_) => FieldType::Float,
        Value::Object(object) => {
            FieldType::Composite(infer_object(object, name_hint, registry, target))
        }
        Value::Array(items) => match items.first() {
            Some(element) => FieldType::list(resolve_type(element, name_hint, registry, target)),
            None => FieldType::list(FieldType::Any),
        },
        Value::Null => FieldType::Any,
    }
}
