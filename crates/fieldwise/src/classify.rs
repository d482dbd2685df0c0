//! Capability classifier.
//!
//! Decides, per attribute value, whether the copy engine treats it as a leaf
//! (assigned), a list (assigned as an owned clone) or a nested structure
//! (recursed into). Decisions come from the value's variant, never from its
//! contents, and absent values are never list-like or copyable.

use crate::attributes::{AttrValue, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Leaf,
    ListLike,
    Copyable,
}

/// Classify a read slot. `None` for a null slot.
pub fn classify(slot: &Slot<'_>) -> Option<Capability> {
    match slot {
        Slot::Null => None,
        Slot::Value(AttrValue::List(_)) => Some(Capability::ListLike),
        Slot::Value(_) => Some(Capability::Leaf),
        Slot::Nested(_) => Some(Capability::Copyable),
    }
}

pub fn is_list_like(slot: Option<&Slot<'_>>) -> bool {
    slot.and_then(classify) == Some(Capability::ListLike)
}

pub fn is_copyable(slot: Option<&Slot<'_>>) -> bool {
    slot.and_then(classify) == Some(Capability::Copyable)
}
