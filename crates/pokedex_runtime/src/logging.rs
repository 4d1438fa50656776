//! Log subscriber setup.
//!
//! Concepts emit diagnostics through `tracing`; this installs the subscriber
//! that prints them.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` when it is set.
pub fn init(default_filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()?;
    Ok(())
}
