use anyhow::Result;
use clap::Parser;
use std::net::IpAddr;
use std::sync::Arc;
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ncs_api_server::catalog::ncs::NcsClient;
use ncs_api_server::config;
use ncs_api_server::server::{docs::ENDPOINTS, run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[clap(version, about = "HTTP JSON API over the NoCopyrightSounds catalog")]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// The address to bind to. Defaults to all interfaces.
    #[clap(long)]
    pub bind_address: Option<IpAddr>,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Base URL of the NCS website the songs are read from.
    #[clap(long)]
    pub ncs_base_url: Option<String>,

    /// Timeout in seconds for requests to the NCS website.
    #[clap(long)]
    pub ncs_timeout_sec: Option<u64>,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            port: args.port,
            bind_address: args.bind_address,
            logging_level: args.logging_level.clone(),
            ncs_base_url: args.ncs_base_url.clone(),
            ncs_timeout_sec: args.ncs_timeout_sec,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    info!("Configuration loaded:");
    info!("  address: {}", app_config.socket_addr());
    info!("  logging_level: {}", app_config.logging_level);
    info!("  ncs_base_url: {}", app_config.ncs_base_url);
    info!("  ncs_timeout_sec: {}", app_config.ncs_timeout_sec);
    if let Some(genres) = &app_config.genres {
        info!("  genres: {} from config file", genres.len());
    }
    if let Some(moods) = &app_config.moods {
        info!("  moods: {} from config file", moods.len());
    }

    let catalog = NcsClient::new(&app_config.ncs_base_url, app_config.ncs_timeout_sec)?
        .with_enumerations(app_config.genres.clone(), app_config.moods.clone());

    info!("NCS API Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Available endpoints:");
    for (endpoint, description) in ENDPOINTS {
        info!("  {:<55} {}", endpoint, description);
    }

    run_server(ServerConfig::from(&app_config), Arc::new(catalog)).await
}
