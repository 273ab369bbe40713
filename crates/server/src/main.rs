use anyhow::Result;
use clap::{Parser, ValueEnum};
use clarity_sdk::DEFAULT_BASE_URL;

mod api;
mod config;

use config::{AppState, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "clarity-mcp-server")]
#[command(about = "MCP server exposing Microsoft Clarity analytics as tools", long_about = None)]
struct Args {
    /// Clarity API token
    #[arg(long, env = "CLARITY_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Clarity API base URL
    #[arg(long, env = "CLARITY_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clarity=info,tower_http=debug".into()),
        )
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Env files must be loaded before clap reads the environment
    let env_files = ServerConfig::load_env_files();

    let args = Args::parse();
    init_tracing(args.log_format);

    for file in env_files {
        tracing::debug!("Loaded environment from {}", file);
    }

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        api_token: args.api_token,
        base_url: args.base_url,
    };

    tracing::info!("Starting Clarity MCP server");
    if config.has_token() {
        tracing::info!("Clarity API token configured");
    } else {
        tracing::warn!("CLARITY_API_TOKEN not set. API calls will fail.");
    }

    let state = AppState::new(&config)?;
    tracing::info!(tools = state.mcp.registry().len(), "Tool registry ready");

    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!("MCP endpoint: http://localhost:{}/mcp", config.port);

    api::serve(&config.bind_addr(), state).await?;

    Ok(())
}
