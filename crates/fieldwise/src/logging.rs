//! Optional tracing subscriber setup.
//!
//! The engines emit `tracing` events under the `fieldwise` target:
//!
//! - `debug`: attributes skipped by search or copy
//! - `trace`: entering and leaving nested copy levels
//! - `warn`: nested values cut off by the depth bound
//!
//! Consumers may install their own subscriber instead of calling
//! [`init_logging`].

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "fieldwise=info";

/// Install a fmt subscriber honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
