use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sarovar_config::ConfigManager;
use sarovar_server::logging::init_logging;
use sarovar_server::{run_server, AppState};
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "sarovar-server")]
#[command(about = "Sarovar South Spice chatbot server")]
#[command(version)]
struct Cli {
    /// Server port (overrides config)
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Bind address (overrides config)
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Completion API key (overrides the variable named in config)
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// SQLite database file (overrides config)
    #[arg(long, env = "SAROVAR_DB")]
    db: Option<String>,

    /// Canned reply file (overrides config)
    #[arg(long, env = "SAROVAR_RESPONSES")]
    responses: Option<String>,

    /// Log level or filter directive (overrides config)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Config file path [default: ~/.sarovar/config.json]
    #[arg(long, env = "SAROVAR_CONFIG")]
    config: Option<String>,
}

fn resolve(path: &str) -> PathBuf {
    sarovar_config::expand_tilde(path).unwrap_or_else(|| PathBuf::from(path))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.as_deref() {
        Some(path) => resolve(path),
        None => sarovar_config::default_config_path()
            .context("Could not find home directory for the default config path")?,
    };
    let config_manager = ConfigManager::load(&config_path)
        .await
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    let mut config = config_manager.snapshot().await;

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_str().to_string());
    init_logging(&log_level);

    if let Some(responses) = cli.responses {
        config.chat.responses_path = Some(responses);
    }
    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);

    if config_manager.created() {
        info!("Created default config at {:?}", config_manager.path());
    } else {
        info!("Config loaded from {:?}", config_manager.path());
    }
    info!("Starting Sarovar server on {}:{}", host, port);
    info!("LLM Configuration:");
    info!("  Enabled: {}", config.llm.enabled);
    info!("  Base URL: {}", config.llm.base_url);
    info!("  Model: {}", config.llm.model);
    info!(
        "  Rate limit: {} per {}s",
        config.chat.rate_limit, config.chat.rate_window_secs
    );

    let state = AppState::from_config(&config, cli.api_key, cli.db.as_deref().map(resolve));
    info!(
        "llm_enabled={} db_connected={}",
        state.llm_enabled,
        state.db_connected()
    );

    run_server(state, &host, port, config.server.cors)
        .await
        .context("HTTP server failed")
}
