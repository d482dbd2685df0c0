//! # Free-Text Search
//!
//! Tests whether a filter string appears, case-insensitively, in the
//! canonical text of any searchable attribute of a value.
//!
//! ## Rules
//!
//! 1. Attributes excluded by a descriptor marker, a type marker, or the
//!    [`Exclusions`] map are never read.
//! 2. A getter that fails counts as "no value" and search moves on.
//! 3. Null values are skipped.
//! 4. The first match wins; later attributes are not read.
//!
//! The engine itself has no empty-filter shortcut: `search(item, "")` is true
//! iff `item` has at least one non-null, searchable attribute. Skipping
//! filtering for a blank filter is the caller's job, see [`filter`].

use tracing::debug;

use crate::attributes::{enumerate, Exclusions, Inspect};
use crate::text::{contains_ignore_case, is_blank};

/// Search `item` with no out-of-band exclusions.
pub fn search(item: &dyn Inspect, filter: &str) -> bool {
    search_with(item, filter, &Exclusions::default())
}

/// Search `item`, also skipping the attributes listed in `exclusions`.
pub fn search_with(item: &dyn Inspect, filter: &str, exclusions: &Exclusions) -> bool {
    for attr in enumerate(item, exclusions) {
        if attr.excluded {
            continue;
        }

        let slot = match item.get_attr(attr.name()) {
            Ok(slot) => slot,
            Err(err) => {
                debug!(
                    type_name = item.type_name(),
                    attr = attr.name(),
                    error = %err,
                    "skipping unreadable attribute during search"
                );
                continue;
            }
        };

        let Some(text) = slot.canonical_text() else {
            continue;
        };

        if contains_ignore_case(&text, filter) {
            return true;
        }
    }

    false
}

/// Keep the items that match `filter`, in their original order.
///
/// A blank filter keeps everything without inspecting any item.
pub fn filter<'a, T: Inspect>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    filter_with(items, filter, &Exclusions::default())
}

pub fn filter_with<'a, T: Inspect>(
    items: &'a [T],
    filter: &str,
    exclusions: &Exclusions,
) -> Vec<&'a T> {
    if is_blank(filter) {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| search_with(*item, filter, exclusions))
        .collect()
}

/// Canonical text of one attribute.
///
/// Unknown, null and unreadable attributes all yield an empty string.
pub fn property_text(item: &dyn Inspect, name: &str) -> String {
    item.get_attr(name)
        .ok()
        .and_then(|slot| slot.canonical_text())
        .unwrap_or_default()
}
