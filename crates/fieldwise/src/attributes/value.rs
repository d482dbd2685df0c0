//! Attribute value types.
//!
//! This module defines the runtime representation of attribute values and the
//! [`Slot`] handed back when an attribute is read. Leaf values are owned
//! ([`AttrValue`]); nested inspectable values are handed out as [`Nested`]
//! handles so the copy engine can walk into them instead of aliasing them.

use std::fmt;
use std::ops::{Deref, DerefMut};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{AttrKind, Inspect};
use crate::error::AttrError;

/// Runtime representation of a leaf attribute value.
///
/// The `Display` implementation is the canonical text form used by search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Simple boolean (e.g., `enabled`)
    Bool(bool),

    /// Signed integer (e.g., `count`)
    Int(i64),

    /// Floating point number (e.g., `weight`)
    Float(f64),

    /// Free text (e.g., `name`)
    Text(String),

    /// Point in time (e.g., `created_at`). Rendered as RFC 3339 with second
    /// precision.
    Timestamp(DateTime<Utc>),

    /// Identifier (e.g., `id`). Rendered hyphenated and lowercase.
    Id(Uuid),

    /// Ordered list of leaf values (e.g., `labels`). Rendered as `a, b, c`.
    List(Vec<AttrValue>),

    /// Raw JSON with no narrower leaf form: objects and nulls inside arrays,
    /// numbers outside the `i64` range, whole nested documents. Rendered as
    /// JSON text.
    Json(serde_json::Value),
}

impl AttrValue {
    /// The kind this value would be declared as.
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Bool(_) => AttrKind::Bool,
            AttrValue::Int(_) => AttrKind::Int,
            AttrValue::Float(_) => AttrKind::Float,
            AttrValue::Text(_) => AttrKind::Text,
            AttrValue::Timestamp(_) => AttrKind::Timestamp,
            AttrValue::Id(_) => AttrKind::Id,
            AttrValue::List(_) => AttrKind::List,
            AttrValue::Json(_) => AttrKind::Any,
        }
    }

    /// Get the boolean value if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the integer value. Does not coerce floats.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the float value; integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            AttrValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get the string if this is a Text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the timestamp if this is a Timestamp.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            AttrValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Get the UUID if this is an Id.
    pub fn as_id(&self) -> Option<Uuid> {
        match self {
            AttrValue::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// Get the items if this is a List.
    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the raw JSON if this is a Json.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            AttrValue::Json(value) => Some(value),
            _ => None,
        }
    }

    fn mismatch(&self, attr: &str, expected: AttrKind) -> AttrError {
        AttrError::TypeMismatch {
            attr: attr.to_string(),
            expected,
            found: self.kind(),
        }
    }

    /// Convert into a `bool` for a setter, reporting a mismatch against `attr`.
    pub fn try_bool(self, attr: &str) -> Result<bool, AttrError> {
        self.as_bool()
            .ok_or_else(|| self.mismatch(attr, AttrKind::Bool))
    }

    /// Convert into an `i64`. Floats are rejected, not truncated.
    pub fn try_int(self, attr: &str) -> Result<i64, AttrError> {
        self.as_int().ok_or_else(|| self.mismatch(attr, AttrKind::Int))
    }

    /// Convert into an `f64`, widening integers.
    pub fn try_float(self, attr: &str) -> Result<f64, AttrError> {
        self.as_float()
            .ok_or_else(|| self.mismatch(attr, AttrKind::Float))
    }

    pub fn try_text(self, attr: &str) -> Result<String, AttrError> {
        match self {
            AttrValue::Text(s) => Ok(s),
            other => Err(other.mismatch(attr, AttrKind::Text)),
        }
    }

    pub fn try_timestamp(self, attr: &str) -> Result<DateTime<Utc>, AttrError> {
        self.as_timestamp()
            .ok_or_else(|| self.mismatch(attr, AttrKind::Timestamp))
    }

    pub fn try_id(self, attr: &str) -> Result<Uuid, AttrError> {
        self.as_id().ok_or_else(|| self.mismatch(attr, AttrKind::Id))
    }

    /// Convert a list of text items into `Vec<String>`.
    ///
    /// Fails if this is not a list or if any item is not text.
    pub fn try_strings(self, attr: &str) -> Result<Vec<String>, AttrError> {
        match self {
            AttrValue::List(items) => items.into_iter().map(|item| item.try_text(attr)).collect(),
            other => Err(other.mismatch(attr, AttrKind::List)),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Timestamp(ts) => {
                f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            AttrValue::Id(id) => write!(f, "{}", id.hyphenated()),
            AttrValue::Json(value) => write!(f, "{value}"),
            AttrValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for AttrValue {
    fn from(v: DateTime<Utc>) -> Self {
        AttrValue::Timestamp(v)
    }
}

impl From<Uuid> for AttrValue {
    fn from(v: Uuid) -> Self {
        AttrValue::Id(v)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(v: Vec<String>) -> Self {
        AttrValue::List(v.into_iter().map(AttrValue::Text).collect())
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(v: Vec<AttrValue>) -> Self {
        AttrValue::List(v)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(v: serde_json::Value) -> Self {
        AttrValue::Json(v)
    }
}

/// A nested inspectable value read from an attribute.
///
/// `Borrowed` is the usual case for owned struct fields. `Owned` lets types
/// hand out a fresh handle, e.g. a clone of an `Rc<RefCell<_>>` in a shared or
/// cyclic graph.
pub enum Nested<'a> {
    Borrowed(&'a dyn Inspect),
    Owned(Box<dyn Inspect + 'a>),
}

impl<'a> Deref for Nested<'a> {
    type Target = dyn Inspect + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            Nested::Borrowed(value) => &**value,
            Nested::Owned(value) => value.as_ref(),
        }
    }
}

impl fmt::Debug for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nested({})", self.type_name())
    }
}

/// Mutable counterpart of [`Nested`], used as the target of a nested copy.
pub enum NestedMut<'a> {
    Borrowed(&'a mut dyn Inspect),
    Owned(Box<dyn Inspect + 'a>),
}

impl<'a> Deref for NestedMut<'a> {
    type Target = dyn Inspect + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            NestedMut::Borrowed(value) => &**value,
            NestedMut::Owned(value) => value.as_ref(),
        }
    }
}

impl DerefMut for NestedMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            NestedMut::Borrowed(value) => &mut **value,
            NestedMut::Owned(value) => value.as_mut(),
        }
    }
}

impl fmt::Debug for NestedMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NestedMut({})", self.type_name())
    }
}

/// The result of reading one attribute.
#[derive(Debug)]
pub enum Slot<'a> {
    /// The attribute exists but holds no value.
    Null,

    /// A leaf or list value, owned by the caller.
    Value(AttrValue),

    /// A nested inspectable value the copy engine can walk into.
    Nested(Nested<'a>),
}

impl<'a> Slot<'a> {
    /// Wrap an optional nested field.
    pub fn object<T: Inspect>(value: Option<&'a T>) -> Self {
        match value {
            Some(value) => Slot::Nested(Nested::Borrowed(value)),
            None => Slot::Null,
        }
    }

    /// Whether the attribute holds no value.
    pub fn is_null(&self) -> bool {
        matches!(self, Slot::Null)
    }

    pub fn as_value(&self) -> Option<&AttrValue> {
        match self {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<AttrValue> {
        match self {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Canonical text of the slot, `None` for null.
    pub fn canonical_text(&self) -> Option<String> {
        match self {
            Slot::Null => None,
            Slot::Value(value) => Some(value.to_string()),
            Slot::Nested(nested) => Some(nested.canonical_text()),
        }
    }
}

impl From<AttrValue> for Slot<'_> {
    fn from(value: AttrValue) -> Self {
        Slot::Value(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for Slot<'_> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Slot::Value(v.into()),
            None => Slot::Null,
        }
    }
}
