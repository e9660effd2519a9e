//! Workspace-level integration tests for the mcp-draw server.
//!
//! These tests verify:
//! - The server can be built from command-line flags the way the binary builds it
//! - Tool registration and schema generation

pub mod server_startup;
pub mod tool_schema;
