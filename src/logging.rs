//! Log-file setup for the CLIs.
//!
//! Both binaries append timestamped INFO-level lines to `cli.log` in the
//! working directory; stdout stays reserved for the report text. The HTTP
//! internals (`hyper`, `reqwest`) are capped at WARN because they flood the
//! log at INFO.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Fixed log file name, created in the working directory.
pub const LOG_FILE: &str = "cli.log";

const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";

/// Open `cli.log` for append and install it as the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Call once per process, before any
/// other work.
pub fn init() -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
