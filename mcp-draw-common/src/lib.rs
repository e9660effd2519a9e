//! mcp-draw common library
//!
//! Shared configuration, error handling, tracing and transport plumbing for
//! the mcp-draw image generation server.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod server;
pub mod tracing;
pub mod transport;


pub use config::{Config, ConfigArgs};
pub use error::{ConfigError, Error};
pub use server::{McpServerBuilder, ServerError, shutdown_channel};
pub use transport::{Transport, TransportArgs, TransportMode};
