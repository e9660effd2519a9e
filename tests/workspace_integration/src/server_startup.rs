//! Server startup integration tests.
//!
//! Parses command lines the way the `mcp-draw` binary does, resolves them into
//! a `Config`, and checks the resulting server.

use clap::Parser;
use mcp_draw_common::config::API_KEY_ENV;
use mcp_draw_common::{Config, ConfigArgs, ConfigError, TransportArgs};
use std::path::Path;

/// Same flag layout as the binary's argument parser.
#[derive(Parser, Debug)]
#[command(name = "mcp-draw")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    transport: TransportArgs,
}

fn resolve(argv: &[&str], env_key: Option<&str>) -> Result<Config, ConfigError> {
    let cli = Cli::try_parse_from(argv).expect("valid command line");
    let env_key = env_key.map(str::to_string);
    Config::resolve(
        cli.config,
        move |name| if name == API_KEY_ENV { env_key.clone() } else { None },
        Path::new("/home/host/project"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_draw::DrawServer;
    use rmcp::ServerHandler;

    #[test]
    fn test_server_startup_from_env_credential() {
        let config = resolve(&["mcp-draw"], Some("sk-env")).unwrap();
        assert_eq!(config.api_key, "sk-env");
        assert_eq!(config.output_dir, Path::new("/home/host/project"));

        let server = DrawServer::new(config);
        let info = server.get_info();
        let instructions = info.instructions.as_ref().unwrap().to_lowercase();
        assert!(instructions.contains("image"), "Server instructions should mention 'image'");
    }

    #[test]
    fn test_api_key_flag_overrides_env() {
        let config = resolve(&["mcp-draw", "--api-key", "sk-flag"], Some("sk-env")).unwrap();
        assert_eq!(config.api_key, "sk-flag");
    }

    #[test]
    fn test_output_dir_flag_overrides_cwd() {
        let config = resolve(&["mcp-draw", "--output-dir", "/var/lib/drawings"], Some("sk-env")).unwrap();
        assert_eq!(config.output_dir, Path::new("/var/lib/drawings"));

        let config = resolve(&["mcp-draw", "--output-dir", "art"], Some("sk-env")).unwrap();
        assert_eq!(config.output_dir, Path::new("/home/host/project/art"));
    }

    #[test]
    fn test_startup_fails_without_credential() {
        let result = resolve(&["mcp-draw", "--output-dir", "art"], None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey(_))));
    }

    #[test]
    fn test_default_transport_is_stdio() {
        let cli = Cli::try_parse_from(["mcp-draw", "--api-key", "sk-flag"]).unwrap();
        assert!(cli.transport.into_transport().is_stdio());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["mcp-draw", "--model", "dall-e-3"]).is_err());
    }
}
