//! Cycle-tolerant encoding of [`Value`] trees into JSON
//!
//! The walk is depth-first. Object identities are tracked only along the
//! active recursion path, so an object shared by two sibling branches is
//! expanded in both places and only a true cycle produces a marker.

use std::collections::HashSet;

use serde_json::{Map, Number, Value as Json};

use crate::object::{FieldMap, Inspect, ObjectRef};
use crate::value::{Value, float_text};

/// Start of the string emitted where an object refers back to an ancestor.
pub const CYCLE_MARKER_PREFIX: &str = "<circular reference to ";

/// Encode a value into JSON text.
///
/// Total: introspection and debug-string failures become strings at the
/// offending node, so the output is always a valid JSON document.
pub fn encode(value: &Value) -> String {
    let tree = encode_value(value);
    match serde_json::to_string(&tree) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Encoded parameter tree failed to serialize");
            Json::Null.to_string()
        }
    }
}

/// Encode a value into a JSON tree.
pub fn encode_value(value: &Value) -> Json {
    Encoder::default().encode(value)
}

#[derive(Default)]
struct Encoder {
    /// Identities of the objects on the current path from the root
    active: HashSet<usize>,
}

impl Encoder {
    fn encode(&mut self, value: &Value) -> Json {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(i) => Json::from(*i),
            Value::UInt(u) => Json::from(*u),
            Value::Float(f) => Number::from_f64(*f)
                .map(Json::Number)
                .unwrap_or_else(|| Json::String(float_text(*f))),
            Value::Str(s) => Json::String(s.clone()),
            Value::Seq(items) => Json::Array(items.iter().map(|item| self.encode(item)).collect()),
            Value::Map(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, item) in entries {
                    map.insert(key.coerce(), self.encode(item));
                }
                Json::Object(map)
            }
            Value::Object(object) => self.encode_object(object),
        }
    }

    fn encode_object(&mut self, object: &ObjectRef) -> Json {
        let id = object.id();
        let inspect = object.inspect();
        if !self.active.insert(id) {
            return Json::String(format!("{CYCLE_MARKER_PREFIX}{}>", inspect.type_name()));
        }

        let encoded = match inspect.fields() {
            Ok(Some(fields)) if !fields.is_empty() => self.encode_fields(&fields),
            Ok(_) => Json::String(debug_text(inspect)),
            Err(e) => {
                tracing::debug!(
                    type_name = %inspect.type_name(),
                    error = %e,
                    "Field introspection failed, using debug string"
                );
                Json::String(debug_text(inspect))
            }
        };

        self.active.remove(&id);
        encoded
    }

    fn encode_fields(&mut self, fields: &FieldMap) -> Json {
        let mut map = Map::with_capacity(fields.len());
        for (name, item) in fields {
            map.insert(name.clone(), self.encode(item));
        }
        Json::Object(map)
    }
}

/// Debug string of an object, or the text of the error raised producing it.
fn debug_text(inspect: &dyn Inspect) -> String {
    match inspect.debug_string() {
        Ok(text) if !text.is_empty() => text,
        Ok(_) => format!("<{}>", inspect.type_name()),
        Err(e) => e.to_string(),
    }
}
