//! mcp-draw server
//!
//! MCP server that generates images from text descriptions.

use anyhow::Result;
use clap::Parser;
use mcp_draw::DrawServer;
use mcp_draw_common::tracing::init_tracing;
use mcp_draw_common::{Config, ConfigArgs, McpServerBuilder, TransportArgs};

/// Command-line arguments for the draw server.
#[derive(Parser, Debug)]
#[command(name = "mcp-draw", version)]
#[command(about = "MCP server that turns text descriptions into image files")]
struct Args {
    /// Credential, output and API configuration
    #[command(flatten)]
    config: ConfigArgs,

    /// Transport configuration
    #[command(flatten)]
    transport: TransportArgs,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run(Args::parse()).await {
        tracing::error!("Fatal error in main: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args.config)?;
    tracing::info!(
        output_dir = %config.output_dir.display(),
        base_url = %config.base_url,
        "Configuration loaded"
    );

    let server = DrawServer::new(config);
    let transport = args.transport.into_transport();
    tracing::info!("mcp-draw running on {}", transport);

    McpServerBuilder::new(server)
        .with_transport(transport)
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
