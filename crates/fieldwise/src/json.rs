//! `Inspect` for JSON objects.
//!
//! A `serde_json::Map` has no shape until runtime, which makes it the most
//! direct use of the engines: every key is an attribute, nested objects are
//! copyable, arrays are lists.
//!
//! | JSON | Slot |
//! |------|------|
//! | `null` | `Slot::Null` |
//! | `true` / `false` | `AttrValue::Bool` |
//! | integer (fits `i64`) | `AttrValue::Int` |
//! | float | `AttrValue::Float` |
//! | integer beyond `i64` | `AttrValue::Json` |
//! | string | `AttrValue::Text` |
//! | array | `AttrValue::List`; objects and nulls inside stay `AttrValue::Json` |
//! | object | `Slot::Nested` |
//!
//! Every mapping is lossless, so writing a read value back through
//! `set_attr` reproduces the original JSON. Whole objects snapshot as
//! `AttrValue::Json`, which lets a copy fill a `null` target slot or
//! assign an object at the depth bound.

use serde_json::{Map, Value};

use crate::attributes::{AttrDescriptor, AttrKind, AttrValue, Inspect, Nested, NestedMut, Slot};
use crate::error::AttrError;

fn kind_of(value: &Value) -> AttrKind {
    match value {
        Value::Null => AttrKind::Any,
        Value::Bool(_) => AttrKind::Bool,
        Value::Number(n) if n.is_i64() => AttrKind::Int,
        Value::Number(n) if n.is_f64() => AttrKind::Float,
        Value::Number(_) => AttrKind::Any,
        Value::String(_) => AttrKind::Text,
        Value::Array(_) => AttrKind::List,
        Value::Object(_) => AttrKind::Object,
    }
}

/// Leaf conversion. Anything without a lossless typed form stays raw JSON.
fn leaf_value(value: &Value) -> AttrValue {
    match value {
        Value::Bool(b) => AttrValue::Bool(*b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => AttrValue::Int(i),
            (None, Some(f)) if n.is_f64() => AttrValue::Float(f),
            _ => AttrValue::Json(value.clone()),
        },
        Value::String(s) => AttrValue::Text(s.clone()),
        Value::Array(items) => AttrValue::List(items.iter().map(leaf_value).collect()),
        Value::Null | Value::Object(_) => AttrValue::Json(value.clone()),
    }
}

impl Inspect for Map<String, Value> {
    fn type_name(&self) -> &str {
        "object"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        self.iter()
            .map(|(key, value)| AttrDescriptor::dynamic(key.as_str(), kind_of(value)))
            .collect()
    }

    fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError> {
        match self.get(name) {
            None => Err(AttrError::unknown(name)),
            Some(Value::Null) => Ok(Slot::Null),
            Some(Value::Object(map)) => Ok(Slot::Nested(Nested::Borrowed(map))),
            Some(value) => Ok(Slot::Value(leaf_value(value))),
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), AttrError> {
        let json =
            serde_json::to_value(&value).map_err(|e| AttrError::failed(name, e.to_string()))?;
        self.insert(name.to_string(), json);
        Ok(())
    }

    /// Only existing objects are walked into. A `null` or scalar slot gets
    /// the source object whole, through [`snapshot`](Inspect::snapshot).
    fn nested_mut(&mut self, name: &str) -> Option<NestedMut<'_>> {
        match self.get_mut(name)? {
            Value::Object(map) => Some(NestedMut::Borrowed(map)),
            _ => None,
        }
    }

    fn canonical_text(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn snapshot(&self) -> Option<AttrValue> {
        Some(AttrValue::Json(Value::Object(self.clone())))
    }
}
