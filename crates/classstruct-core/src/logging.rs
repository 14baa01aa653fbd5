//! Tracing subscriber setup.
//!
//! Filter precedence: explicit directive, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`].
//!
//! ```ignore
//! classstruct_core::logging::init(Some("classstruct_core=trace"))?;
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{ShellError, ShellResult};

pub const DEFAULT_FILTER: &str = "info";

/// Build the filter without installing anything.
pub fn build_filter(directive: Option<&str>) -> ShellResult<EnvFilter> {
    match directive {
        Some(directive) => Ok(EnvFilter::try_new(directive)?),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(directive: Option<&str>) -> ShellResult<()> {
    let filter = build_filter(directive)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| ShellError::LoggingInit(e.to_string()))
}
