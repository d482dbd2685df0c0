//! Attribute descriptors.
//!
//! This module defines what a type declares about each of its attributes:
//! the kind of value it holds, whether it can be read and written, and
//! whether it is hidden from search.

use std::borrow::Cow;

/// The declared kind of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    /// Simple boolean (e.g., `enabled`)
    Bool,

    /// Signed 64-bit integer (e.g., `count`)
    Int,

    /// Floating point number (e.g., `weight`)
    Float,

    /// Free text (e.g., `name`)
    Text,

    /// UTC timestamp (e.g., `created_at`)
    Timestamp,

    /// UUID (e.g., `id`)
    Id,

    /// Ordered list of leaf values (e.g., labels).
    List,

    /// A nested inspectable value. The copy engine recurses into these.
    Object,

    /// Kind is only known once a value is present (e.g., a JSON `null`), or
    /// the value is raw JSON.
    Any,
}

impl AttrKind {
    /// Ordered, indexable, single-element-type container.
    pub const fn is_list_like(self) -> bool {
        matches!(self, AttrKind::List)
    }

    /// Exposes the nested-copy capability.
    pub const fn is_copyable(self) -> bool {
        matches!(self, AttrKind::Object)
    }
}

/// Declaration of a single attribute on an inspectable type.
///
/// Most types keep a `const` table of these and return it from
/// [`Inspect::attributes`](super::Inspect::attributes). Types whose shape is
/// only known at runtime build them with [`AttrDescriptor::dynamic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrDescriptor {
    /// The attribute name used for lookups (e.g., "name", "child")
    pub name: Cow<'static, str>,

    /// The kind of value this attribute holds
    pub kind: AttrKind,

    /// Whether the attribute can be read from outside. Write-only attributes
    /// are never enumerated.
    pub readable: bool,

    /// Whether the copy engine may assign to this attribute.
    pub writable: bool,

    /// Explicit "do not inspect" marker. Search skips marked attributes; the
    /// copy engine still sees them.
    pub search_ignore: bool,
}

impl AttrDescriptor {
    /// A readable, writable, searchable attribute.
    pub const fn new(name: &'static str, kind: AttrKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
            readable: true,
            writable: true,
            search_ignore: false,
        }
    }

    /// Like [`new`](Self::new), for names only known at runtime.
    pub fn dynamic(name: impl Into<String>, kind: AttrKind) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            kind,
            readable: true,
            writable: true,
            search_ignore: false,
        }
    }

    /// Readable but never assigned by the copy engine.
    pub const fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Settable but hidden from enumeration.
    pub const fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    /// Hide from search.
    pub const fn search_ignore(mut self) -> Self {
        self.search_ignore = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Readable and writable, i.e. a candidate for structural copy.
    pub fn is_copy_target(&self) -> bool {
        self.readable && self.writable
    }
}
