//! Tracing initialization for the draw server.
//!
//! Logs are always written to stderr: in stdio mode stdout carries the MCP
//! protocol stream, and any stray log line there would corrupt it.
//!
//! # Usage
//!
//! ```no_run
//! use mcp_draw_common::tracing::init_tracing;
//!
//! init_tracing();
//! tracing::info!("Application started");
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Controls the log level and filtering. Examples:
//!   - `RUST_LOG=debug` - Enable debug logging for all modules
//!   - `RUST_LOG=mcp_draw=debug` - Enable debug for the server crate
//!   - `RUST_LOG=warn,mcp_draw_common=debug` - Warn by default, debug for common

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
    util::TryInitError,
};

/// Default filter directive when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn try_init_with(default_level: &str) -> Result<(), TryInitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(fmt_layer)
        .try_init()
}

/// Initialize the tracing subscriber with `RUST_LOG` filtering (default `info`).
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_LOG_LEVEL);
}

/// Initialize tracing with a custom default level used when `RUST_LOG` is not set.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_tracing_with_default(default_level: &str) {
    if let Err(e) = try_init_with(default_level) {
        panic!("Failed to initialize tracing: {}", e);
    }
}

/// Try to initialize tracing, returning an error if already initialized.
///
/// Useful in tests, where several cases may race to install the subscriber.
///
/// ```
/// use mcp_draw_common::tracing::try_init_tracing;
///
/// // Ok(()) or Err(_) depending on prior initialization
/// let _ = try_init_tracing();
/// ```
pub fn try_init_tracing() -> Result<(), TryInitError> {
    try_init_with(DEFAULT_LOG_LEVEL)
}
