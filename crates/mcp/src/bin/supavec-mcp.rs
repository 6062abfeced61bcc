// Standalone MCP server binary

use anyhow::{bail, Context, Result};
use clap::Parser;
use supavec_mcp::server::McpServer;
use supavec_mcp::tools::ToolRegistry;
use supavec_sdk::{ClientConfig, SupavecClient, DEFAULT_BASE_URL};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "supavec-mcp", version)]
#[command(about = "Supavec MCP Server - search and list your Supavec files over MCP", long_about = None)]
#[command(after_help = "For more information, visit: https://www.supavec.com")]
struct Args {
    /// Supavec API key
    #[arg(long, env = "SUPAVEC_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Supavec API base URL
    #[arg(long, env = "SUPAVEC_BASE_URL", default_value = DEFAULT_BASE_URL, hide = true)]
    base_url: Url,
}

/// Reject a key that is empty or only whitespace.
fn require_api_key(api_key: String) -> Result<String> {
    if api_key.trim().is_empty() {
        bail!("Supavec API key is required: pass --api-key or set SUPAVEC_API_KEY");
    }
    Ok(api_key)
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let api_key = require_api_key(args.api_key)?;

    tracing::info!("Supavec MCP Server starting...");

    let config = ClientConfig::new(api_key).with_base_url(args.base_url);
    let client = SupavecClient::from_config(config).context("Failed to create Supavec client")?;

    let registry = ToolRegistry::supavec(client);
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
