//! Image generation handler for the draw server.
//!
//! This module provides the `DrawHandler`, which sends a description to the
//! OpenAI Images API, decodes the returned payload and saves it as a PNG
//! file under the configured output directory.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use mcp_draw_common::config::Config;
use mcp_draw_common::error::Error;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Model requested from the Images API.
pub const IMAGE_MODEL: &str = "gpt-image-1";

/// Number of images requested per invocation.
pub const IMAGES_PER_REQUEST: u8 = 1;

/// Extension of every saved image file.
pub const IMAGE_EXTENSION: &str = "png";

/// Tool result text when the API response carries no image payload.
pub const NO_IMAGE_MESSAGE: &str = "Unable to create comic";

/// Outcome of a single tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The image was written to this absolute path.
    Saved(PathBuf),
    /// The API answered without an image payload.
    NoImage,
}

impl DrawOutcome {
    /// Text returned to the host as the tool result.
    pub fn into_text(self) -> String {
        match self {
            DrawOutcome::Saved(path) => path.display().to_string(),
            DrawOutcome::NoImage => NO_IMAGE_MESSAGE.to_string(),
        }
    }
}

/// Image generation handler.
///
/// Cheap to share: the configuration is behind an `Arc` and the HTTP client
/// is internally reference counted.
#[derive(Clone)]
pub struct DrawHandler {
    /// Startup configuration.
    pub config: Arc<Config>,
    /// HTTP client for API requests.
    pub http: reqwest::Client,
}

impl DrawHandler {
    /// Create a new handler with a default HTTP client.
    pub fn new(config: Arc<Config>) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a new handler with a caller-provided HTTP client.
    pub fn with_client(config: Arc<Config>, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Generate an image from a description and save it to the output directory.
    ///
    /// # Returns
    /// * `Ok(DrawOutcome::Saved(path))` - the absolute path of the new file
    /// * `Ok(DrawOutcome::NoImage)` - the API returned no image payload
    /// * `Err(Error)` - the API call, decoding, or file write failed
    #[instrument(level = "info", name = "generate_image_from_description", skip_all, fields(description_len = description.len()))]
    pub async fn generate_image_from_description(&self, description: &str) -> Result<DrawOutcome, Error> {
        let response = self.request_image(description).await?;

        let Some(payload) = response.first_payload() else {
            warn!(
                items = response.data.as_ref().map_or(0, Vec::len),
                "Image API returned no image payload"
            );
            return Ok(DrawOutcome::NoImage);
        };

        let bytes = BASE64
            .decode(payload)
            .map_err(|e| Error::decode(format!("Invalid base64 image payload: {}", e)))?;

        let path = self.save_image(&bytes).await?;
        info!(path = %path.display(), bytes = bytes.len(), "Saved generated image");
        Ok(DrawOutcome::Saved(path))
    }

    /// Call the Images API for a single image.
    async fn request_image(&self, description: &str) -> Result<ImageGenerationResponse, Error> {
        let request = ImageGenerationRequest {
            model: IMAGE_MODEL,
            prompt: description,
            n: IMAGES_PER_REQUEST,
        };

        let endpoint = self.config.images_endpoint();
        debug!(endpoint = %endpoint, model = IMAGE_MODEL, "Calling Images API");

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::api(&endpoint, 0, format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(&endpoint, status.as_u16(), body));
        }

        response.json().await.map_err(|e| {
            Error::api(&endpoint, status.as_u16(), format!("Failed to parse response: {}", e))
        })
    }

    /// Write image bytes to a freshly named file in the output directory.
    ///
    /// Creates the directory and any missing parents first. The file is
    /// opened with `create_new`, so an existing file is never overwritten.
    pub async fn save_image(&self, bytes: &[u8]) -> Result<PathBuf, Error> {
        tokio::fs::create_dir_all(&self.config.output_dir).await?;

        let path = std::path::absolute(self.config.output_dir.join(unique_file_name()))?;

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        Ok(path)
    }
}

/// Generate a file name from a random v4 UUID and the image extension.
pub fn unique_file_name() -> String {
    format!("{}.{}", Uuid::new_v4(), IMAGE_EXTENSION)
}

// =============================================================================
// API Request/Response Types
// =============================================================================

/// OpenAI Images API generation request.
#[derive(Debug, Serialize)]
pub struct ImageGenerationRequest<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Text description of the desired image
    pub prompt: &'a str,
    /// Number of images to generate
    pub n: u8,
}

/// OpenAI Images API generation response.
#[derive(Debug, Deserialize)]
pub struct ImageGenerationResponse {
    /// Creation timestamp
    pub created: Option<i64>,
    /// Generated images
    pub data: Option<Vec<ImageData>>,
}

impl ImageGenerationResponse {
    /// The base64 payload of the first generated image, if any.
    pub fn first_payload(&self) -> Option<&str> {
        self.data.as_deref()?.first()?.b64_json.as_deref()
    }
}

/// A single generated image.
#[derive(Debug, Deserialize)]
pub struct ImageData {
    /// Base64-encoded image bytes
    pub b64_json: Option<String>,
    /// Hosted image URL (not used by this server)
    pub url: Option<String>,
    /// Prompt as rewritten by the service
    pub revised_prompt: Option<String>,
}
