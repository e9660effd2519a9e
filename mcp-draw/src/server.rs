//! MCP Server implementation for the draw server.
//!
//! Exposes a single tool, `generate_image_from_description`.

use crate::handler::DrawHandler;
use mcp_draw_common::config::Config;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::info;

/// Name under which the tool is registered.
pub const TOOL_NAME: &str = "generate_image_from_description";

/// Tool description shown to the host.
pub const TOOL_DESCRIPTION: &str = "Generates an image from a description of what the image should look like, \
     saves to local file whose path is returned";

/// MCP Server for image generation.
#[derive(Clone)]
pub struct DrawServer {
    handler: DrawHandler,
}

/// Tool parameters for generate_image_from_description.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateImageParams {
    /// Description of what the image should look like
    pub description: String,
}

impl DrawServer {
    /// Create a new DrawServer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self::with_handler(DrawHandler::new(Arc::new(config)))
    }

    /// Create a DrawServer around an existing handler.
    pub fn with_handler(handler: DrawHandler) -> Self {
        Self { handler }
    }

    /// Generate an image and report its path, or the fixed no-image text.
    pub async fn generate_image(&self, params: GenerateImageParams) -> Result<CallToolResult, McpError> {
        info!(description = %params.description, "Generating image");

        let outcome = self
            .handler
            .generate_image_from_description(&params.description)
            .await
            .map_err(|e| McpError::internal_error(format!("Image generation failed: {}", e), None))?;

        Ok(CallToolResult::success(vec![Content::text(outcome.into_text())]))
    }

    /// Describe the tool for `list_tools`.
    pub fn tool() -> rmcp::model::Tool {
        use schemars::schema_for;

        let schema = schema_for!(GenerateImageParams);
        let input_schema = match serde_json::to_value(&schema).unwrap_or_default() {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        };

        rmcp::model::Tool {
            name: Cow::Borrowed(TOOL_NAME),
            description: Some(Cow::Borrowed(TOOL_DESCRIPTION)),
            input_schema,
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        }
    }
}

impl ServerHandler for DrawServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Image generation server. Use generate_image_from_description to turn a \
                 description of an image into a PNG file; the tool returns the file's absolute path."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<rmcp::model::ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(rmcp::model::ListToolsResult {
                tools: vec![Self::tool()],
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        params: rmcp::model::CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            match params.name.as_ref() {
                TOOL_NAME => {
                    let tool_params: GenerateImageParams = params
                        .arguments
                        .map(|args| serde_json::from_value(serde_json::Value::Object(args)))
                        .transpose()
                        .map_err(|e| McpError::invalid_params(format!("Invalid parameters: {}", e), None))?
                        .ok_or_else(|| McpError::invalid_params("Missing parameters", None))?;

                    self.generate_image(tool_params).await
                }
                _ => Err(McpError::invalid_params(format!("Unknown tool: {}", params.name), None)),
            }
        }
    }
}
