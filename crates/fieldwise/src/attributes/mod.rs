//! # Attribute System
//!
//! Shared primitive of the crate: enumerate the readable attributes of a
//! value and access them by name.
//!
//! - **Descriptors** ([`AttrDescriptor`]): what a type declares about each
//!   attribute (kind, readable, writable, search-ignore marker)
//! - **Values** ([`AttrValue`], [`Slot`]): what reading an attribute yields
//! - **Capability** ([`Inspect`]): the trait types opt into
//! - **Enumeration** ([`enumerate`]): descriptors resolved against the
//!   type-level marker and the out-of-band [`Exclusions`] map
//!
//! ## Attribute Kinds
//!
//! | Kind | Example | Copy behavior |
//! |------|---------|---------------|
//! | `Bool`, `Int`, `Float`, `Text` | `name`, `count` | Assigned |
//! | `Timestamp`, `Id` | `created_at`, `id` | Assigned |
//! | `List` | `labels` | Assigned (owned clone) |
//! | `Object` | `child` | Recursed into |
//!
//! ## Usage
//!
//! ```ignore
//! impl Inspect for Part {
//!     fn type_name(&self) -> &str { "Part" }
//!     fn attributes(&self) -> Vec<AttrDescriptor> { PART_ATTRS.to_vec() }
//!     fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError> {
//!         match name {
//!             "name" => Ok(self.name.clone().into()),
//!             _ => Err(AttrError::unknown(name)),
//!         }
//!     }
//! }
//! ```

mod inspect;
mod spec;
mod value;

pub use inspect::{enumerate, is_search_excluded, Attribute, Exclusions, Inspect};
pub use spec::{AttrDescriptor, AttrKind};
pub use value::{AttrValue, Nested, NestedMut, Slot};
