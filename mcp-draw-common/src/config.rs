//! Configuration module for resolving command-line flags and environment variables.

use crate::error::ConfigError;
use clap::Args;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--api-key` is absent.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable consulted when `--base-url` is absent.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Default base URL of the image generation API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Command-line arguments for the server configuration.
///
/// Flatten into the binary's parser:
///
/// ```ignore
/// #[derive(Parser)]
/// struct Args {
///     #[command(flatten)]
///     config: ConfigArgs,
/// }
/// ```
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// API key for the image generation service (overrides OPENAI_API_KEY)
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Directory generated images are saved to (default: current directory)
    #[arg(long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Base URL of the image generation API (overrides OPENAI_BASE_URL)
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Application configuration, resolved once at startup and immutable afterwards.
#[derive(Clone)]
pub struct Config {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Absolute directory generated images are written to
    pub output_dir: PathBuf,
    /// API base URL without a trailing slash
    pub base_url: String,
}

impl Config {
    /// Resolve configuration from parsed flags, the process environment and
    /// the current working directory. Loads a `.env` file first if present.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingApiKey` if neither `--api-key` nor
    /// `OPENAI_API_KEY` supplies a key.
    pub fn from_args(args: ConfigArgs) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::invalid_value("current directory", e.to_string()))?;

        Self::resolve(args, |name| std::env::var(name).ok(), &cwd)
    }

    /// Resolve configuration with an explicit environment lookup and working directory.
    ///
    /// Flags take precedence over the environment. Empty strings count as
    /// absent, for flags and environment variables alike.
    pub fn resolve<F>(args: ConfigArgs, env: F, cwd: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(args.api_key)
            .or_else(|| non_empty(env(API_KEY_ENV)))
            .ok_or_else(|| ConfigError::missing_api_key(API_KEY_ENV))?;

        let output_dir = match args.output_dir {
            Some(dir) if !dir.as_os_str().is_empty() => cwd.join(dir),
            _ => cwd.to_path_buf(),
        };

        let base_url = non_empty(args.base_url)
            .or_else(|| non_empty(env(BASE_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::invalid_value(
                "base URL",
                format!("'{}' must start with http:// or https://", base_url),
            ));
        }

        Ok(Self {
            api_key,
            output_dir,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the image generation endpoint URL.
    pub fn images_endpoint(&self) -> String {
        format!("{}/images/generations", self.base_url)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("output_dir", &self.output_dir)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
