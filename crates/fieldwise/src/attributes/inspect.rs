//! The `Inspect` capability and the attribute enumerator.

use std::collections::{BTreeMap, BTreeSet};

use super::{AttrDescriptor, AttrKind, AttrValue, NestedMut, Slot};
use crate::error::AttrError;

/// A value whose attributes can be discovered and accessed at runtime.
///
/// Types opt in by implementing this trait. The search and copy engines only
/// ever talk to values through it, so they work on any mix of types without
/// knowing their shape.
///
/// Only [`type_name`](Inspect::type_name), [`attributes`](Inspect::attributes)
/// and [`get_attr`](Inspect::get_attr) are required. A type that never acts
/// as a copy target can leave the setters at their defaults.
pub trait Inspect {
    /// Name used for exclusion lookups and as the default text form.
    fn type_name(&self) -> &str;

    /// Declared attributes in declaration order.
    fn attributes(&self) -> Vec<AttrDescriptor>;

    /// Read the current value of an attribute.
    ///
    /// Returns `Slot::Null` for an absent value and an error for an unknown
    /// name or a getter that fails.
    fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError>;

    /// Assign a leaf value.
    fn set_attr(&mut self, name: &str, _value: AttrValue) -> Result<(), AttrError> {
        Err(AttrError::read_only(name))
    }

    /// Mutable access to a nested attribute, used as the target of a nested
    /// copy.
    ///
    /// Implementations may materialize an empty nested value when the slot
    /// is currently unset. Returning `None` means the target has no nested
    /// counterpart and the attribute is skipped.
    fn nested_mut(&mut self, _name: &str) -> Option<NestedMut<'_>> {
        None
    }

    /// Type-level "do not inspect" marker. When true every attribute of the
    /// type is excluded from search.
    fn search_ignored(&self) -> bool {
        false
    }

    /// Canonical text of the value as a whole, used when it appears as a
    /// nested attribute of another value.
    fn canonical_text(&self) -> String {
        self.type_name().to_string()
    }

    /// An owned copy of the whole value, for assigning it in one piece with
    /// [`set_attr`](Inspect::set_attr).
    ///
    /// The copy engine uses this when it cannot walk into a nested value:
    /// at the depth bound, or when the target has no nested counterpart.
    /// `None` (the default) leaves the target untouched there.
    fn snapshot(&self) -> Option<AttrValue> {
        None
    }
}

/// Out-of-band search exclusions keyed by type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    by_type: BTreeMap<String, BTreeSet<String>>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Exclusions::insert).
    pub fn with(mut self, type_name: impl Into<String>, attr: impl Into<String>) -> Self {
        self.insert(type_name, attr);
        self
    }

    pub fn insert(&mut self, type_name: impl Into<String>, attr: impl Into<String>) {
        self.by_type
            .entry(type_name.into())
            .or_default()
            .insert(attr.into());
    }

    pub fn contains(&self, type_name: &str, attr: &str) -> bool {
        self.by_type
            .get(type_name)
            .is_some_and(|attrs| attrs.contains(attr))
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.values().all(BTreeSet::is_empty)
    }
}

impl<K, V, I> FromIterator<(K, I)> for Exclusions
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = V>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut exclusions = Exclusions::new();
        for (type_name, attrs) in iter {
            let type_name = type_name.into();
            for attr in attrs {
                exclusions.insert(type_name.clone(), attr);
            }
        }
        exclusions
    }
}

/// Whether search must skip `descriptor` on `item`.
///
/// True if the attribute is marked, the declaring type is marked, or the
/// exclusion map lists the pair.
pub fn is_search_excluded(
    item: &dyn Inspect,
    descriptor: &AttrDescriptor,
    exclusions: &Exclusions,
) -> bool {
    descriptor.search_ignore
        || item.search_ignored()
        || exclusions.contains(item.type_name(), descriptor.name())
}

/// One enumerated attribute with its exclusion resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub descriptor: AttrDescriptor,
    pub excluded: bool,
}

impl Attribute {
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn kind(&self) -> AttrKind {
        self.descriptor.kind
    }

    pub fn writable(&self) -> bool {
        self.descriptor.writable
    }
}

/// List the readable attributes of `item`, in declaration order.
///
/// Values are not read here. Excluded attributes are kept and flagged so the
/// copy engine can still see them.
pub fn enumerate(item: &dyn Inspect, exclusions: &Exclusions) -> Vec<Attribute> {
    item.attributes()
        .into_iter()
        .filter(|descriptor| descriptor.readable)
        .map(|descriptor| Attribute {
            excluded: is_search_excluded(item, &descriptor, exclusions),
            descriptor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Secret, Widget};

    #[test]
    fn enumerate_preserves_declaration_order() {
        let widget = Widget::default();
        let names: Vec<String> = enumerate(&widget, &Exclusions::new())
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, vec!["name", "tag", "count", "labels", "child"]);
    }

    #[test]
    fn enumerate_skips_write_only() {
        let secret = Secret::default();
        let names: Vec<String> = enumerate(&secret, &Exclusions::new())
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, vec!["code"]);
    }

    #[test]
    fn descriptor_marker_excludes() {
        let widget = Widget::default();
        let attrs = enumerate(&widget, &Exclusions::new());
        let tag = attrs.iter().find(|a| a.name() == "tag").unwrap();
        let name = attrs.iter().find(|a| a.name() == "name").unwrap();
        assert!(tag.excluded);
        assert!(!name.excluded);
    }

    #[test]
    fn type_marker_excludes_every_attribute() {
        let secret = Secret::default();
        assert!(enumerate(&secret, &Exclusions::new())
            .iter()
            .all(|a| a.excluded));
    }

    #[test]
    fn exclusion_map_excludes_by_type_and_name() {
        let widget = Widget::default();
        let exclusions = Exclusions::new().with("Widget", "name");
        let attrs = enumerate(&widget, &exclusions);
        assert!(attrs.iter().find(|a| a.name() == "name").unwrap().excluded);
        assert!(!attrs.iter().find(|a| a.name() == "count").unwrap().excluded);

        let other_type = Exclusions::new().with("Part", "name");
        let attrs = enumerate(&widget, &other_type);
        assert!(!attrs.iter().find(|a| a.name() == "name").unwrap().excluded);
    }

    #[test]
    fn exclusions_from_iter() {
        let exclusions: Exclusions = vec![("Widget", vec!["tag", "count"])].into_iter().collect();
        assert!(exclusions.contains("Widget", "tag"));
        assert!(exclusions.contains("Widget", "count"));
        assert!(!exclusions.contains("Widget", "name"));
        assert!(!exclusions.is_empty());
        assert!(Exclusions::new().is_empty());
    }

    #[test]
    fn enumerated_attribute_exposes_writability() {
        let widget = Widget::default();
        let attrs = enumerate(&widget, &Exclusions::new());
        assert!(attrs.iter().all(|a| a.writable()));
        assert_eq!(
            attrs.iter().find(|a| a.name() == "child").unwrap().kind(),
            AttrKind::Object
        );
    }
}
