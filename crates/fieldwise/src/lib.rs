//! # fieldwise
//!
//! Attribute introspection for types that opt in through the [`Inspect`]
//! trait. Two engines sit on top of one primitive, "enumerate the readable
//! attributes of a value":
//!
//! - [`search`]: does a filter string appear, case-insensitively, in any
//!   searchable attribute? Best effort; never fails.
//! - [`copy_into`]: copy every attribute the target can accept from a source
//!   of corresponding shape, recursing into nested values up to a depth
//!   bound. Fails if a source attribute cannot be read.
//!
//! Neither engine knows the shape of the values it is handed. Plain structs
//! implement [`Inspect`] by hand; JSON objects (`serde_json::Map`) get an
//! implementation out of the box.
//!
//! ## Module Map
//!
//! - [`attributes`]: the `Inspect` trait, descriptors, values, enumerator
//! - [`classify`]: leaf / list-like / copyable decisions
//! - [`search`]: free-text search and list filtering
//! - [`copy`]: structural copy with per-call depth tracking
//! - [`config`]: depth bound and search exclusions from TOML or env
//! - [`json`]: `Inspect` for `serde_json::Map`
//! - [`logging`]: optional tracing subscriber
//! - [`error`]: error types

pub mod attributes;
pub mod classify;
pub mod config;
pub mod copy;
pub mod error;
pub mod json;
pub mod logging;
pub mod search;
pub mod text;

#[cfg(test)]
mod test_utils;

pub use attributes::{
    enumerate, is_search_excluded, AttrDescriptor, AttrKind, AttrValue, Attribute, Exclusions,
    Inspect, Nested, NestedMut, Slot,
};
pub use classify::{classify, is_copyable, is_list_like, Capability};
pub use config::InspectConfig;
pub use copy::{copy_into, copy_into_with, CopyOptions, CopyReport, DEFAULT_MAX_DEPTH};
pub use error::{AttrError, Error, Result};
pub use logging::init_logging;
pub use search::{filter, filter_with, property_text, search, search_with};
