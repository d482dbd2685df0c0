//! # Structural Copy
//!
//! Transfers attribute values from a source value onto a target value of
//! corresponding shape, without knowing either shape up front.
//!
//! ## Per-Attribute Rules
//!
//! For every readable attribute of the source, in declaration order:
//!
//! 1. **No counterpart**: the target has no readable, writable attribute of
//!    that name. Skipped; shape mismatches are not errors.
//! 2. **Read failure**: the whole copy fails with [`Error::SourceRead`]. A
//!    partial copy with a missed write is worse than a clear failure.
//! 3. **Null**: skipped. A null source never overwrites the target.
//! 4. **Nested, below the depth bound**: copied field by field into the
//!    target's nested value ([`Inspect::nested_mut`]). Never aliased.
//! 5. **Nested, no walk possible** (at the depth bound, or the target has no
//!    nested counterpart): assigned whole from the source's
//!    [`Inspect::snapshot`], an owned copy. Without a snapshot the target is
//!    left untouched, reported as truncated at the bound and skipped
//!    otherwise.
//! 6. **Leaf or list**: assigned with [`Inspect::set_attr`]. A setter that
//!    reports a shape mismatch is skipped; any other setter failure aborts
//!    with [`Error::TargetWrite`].
//!
//! ## Depth Tracking
//!
//! Each top-level call builds its own `CopyContext` and threads it through
//! the recursion by `&mut`. Levels are entered through a `DepthGuard` that
//! restores the depth on drop, including on `?` exits. Concurrent top-level
//! copies therefore never share a counter.
//!
//! The top-level call runs at depth 1; nested values are recursed into while
//! `depth < max_depth`. A self-referential graph stops after `max_depth`
//! levels.

use std::ops::{Deref, DerefMut};

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::attributes::{enumerate, AttrDescriptor, AttrValue, Exclusions, Inspect, Slot};
use crate::error::{Error, Result};

/// Default bound on nesting depth for structural copies.
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOptions {
    pub max_depth: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// What a copy did, by dotted attribute path (e.g. `child.name`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyReport {
    /// Leaf and list values, and whole nested snapshots, assigned on the
    /// target.
    pub assigned: Vec<String>,
    /// Nested values copied field by field.
    pub recursed: Vec<String>,
    /// Null sources and shape mismatches.
    pub skipped: Vec<String>,
    /// Nested values left untouched because the depth bound was reached.
    pub truncated: Vec<String>,
}

impl CopyReport {
    pub fn is_truncated(&self) -> bool {
        !self.truncated.is_empty()
    }
}

/// Per-call state of a structural copy.
#[derive(Debug)]
struct CopyContext {
    depth: usize,
    max_depth: usize,
    report: CopyReport,
}

impl CopyContext {
    fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
            report: CopyReport::default(),
        }
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn enter(&mut self) -> DepthGuard<'_> {
        self.depth += 1;
        DepthGuard { ctx: self }
    }

    fn can_recurse(&self) -> bool {
        self.depth < self.max_depth
    }
}

/// One level of nesting. Dropping it leaves the level.
struct DepthGuard<'c> {
    ctx: &'c mut CopyContext,
}

impl Deref for DepthGuard<'_> {
    type Target = CopyContext;

    fn deref(&self) -> &CopyContext {
        &*self.ctx
    }
}

impl DerefMut for DepthGuard<'_> {
    fn deref_mut(&mut self) -> &mut CopyContext {
        &mut *self.ctx
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.ctx.depth -= 1;
    }
}

/// Copy `source` onto `target` with the default depth bound.
pub fn copy_into(target: &mut dyn Inspect, source: &dyn Inspect) -> Result<CopyReport> {
    copy_into_with(target, source, &CopyOptions::default())
}

pub fn copy_into_with(
    target: &mut dyn Inspect,
    source: &dyn Inspect,
    options: &CopyOptions,
) -> Result<CopyReport> {
    let mut ctx = CopyContext::new(options.max_depth);
    copy_level(&mut ctx, target, source, "")?;
    debug_assert_eq!(ctx.depth(), 0);
    Ok(ctx.report)
}

fn copy_level(
    ctx: &mut CopyContext,
    target: &mut dyn Inspect,
    source: &dyn Inspect,
    prefix: &str,
) -> Result<()> {
    let mut ctx = ctx.enter();
    trace!(
        depth = ctx.depth(),
        source = source.type_name(),
        target = target.type_name(),
        "entering copy level"
    );

    let writable: Vec<AttrDescriptor> = target
        .attributes()
        .into_iter()
        .filter(AttrDescriptor::is_copy_target)
        .collect();

    // Search exclusions do not apply to copies.
    for attr in enumerate(source, &Exclusions::default()) {
        let name = attr.name();
        let path = join_path(prefix, name);

        if !writable.iter().any(|d| d.name() == name) {
            debug!(path = %path, "target has no writable counterpart, skipping");
            ctx.report.skipped.push(path);
            continue;
        }

        let slot = source.get_attr(name).map_err(|source| Error::SourceRead {
            path: path.clone(),
            source,
        })?;

        match slot {
            Slot::Null => {
                ctx.report.skipped.push(path);
            }
            Slot::Nested(nested) => {
                let at_bound = !ctx.can_recurse();
                if !at_bound {
                    if let Some(mut child) = target.nested_mut(name) {
                        ctx.report.recursed.push(path.clone());
                        copy_level(&mut ctx, &mut *child, &*nested, &path)?;
                        continue;
                    }
                }

                match nested.snapshot() {
                    Some(value) => assign(&mut ctx.report, target, name, value, path)?,
                    None if at_bound => {
                        warn!(
                            path = %path,
                            max_depth = ctx.max_depth,
                            "depth bound reached, nested value left untouched"
                        );
                        ctx.report.truncated.push(path);
                    }
                    None => {
                        debug!(path = %path, "target has no nested counterpart, skipping");
                        ctx.report.skipped.push(path);
                    }
                }
            }
            Slot::Value(value) => assign(&mut ctx.report, target, name, value, path)?,
        }
    }

    trace!(depth = ctx.depth(), "leaving copy level");
    Ok(())
}

fn assign(
    report: &mut CopyReport,
    target: &mut dyn Inspect,
    name: &str,
    value: AttrValue,
    path: String,
) -> Result<()> {
    match target.set_attr(name, value) {
        Ok(()) => report.assigned.push(path),
        Err(err) if err.is_shape_mismatch() => {
            debug!(path = %path, error = %err, "target rejected value, skipping");
            report.skipped.push(path);
        }
        Err(err) => return Err(Error::TargetWrite { path, source: err }),
    }
    Ok(())
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
