//! mcp-draw server library
//!
//! Turns text descriptions into PNG files using the OpenAI Images API and
//! exposes that capability as an MCP tool.

pub mod handler;
pub mod server;

pub use handler::{DrawHandler, DrawOutcome, NO_IMAGE_MESSAGE};
pub use server::{DrawServer, GenerateImageParams};
