//! Cafe API - HTTP entry point.
//!
//! Opens the cafe database, wires the directory service and access guard into
//! the router, and serves until the process is stopped.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafe_api_auth::{key_fingerprint, SharedSecretGuard};
use cafe_api_control::{CafeDirectory, CafeDirectoryService};
use cafe_api_gateway::{create_router, GatewayConfig, GatewayState};
use cafe_api_store::RocksStore;

/// Cafe API - REST service for a directory of cafes.
#[derive(Parser, Debug)]
#[command(name = "cafe-api")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:5000")]
    listen_addr: String,

    /// Database directory, created if absent.
    #[arg(long, env = "DATA_DIR", default_value = "./cafes.db")]
    data_dir: PathBuf,

    /// Shared secret required by `/report-closed`.
    #[arg(long, env = "CAFE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Allowed CORS origin. Repeat the flag or pass a comma list.
    #[arg(
        long = "cors-origin",
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    cors_origins: Vec<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT_SECONDS", default_value_t = 30)]
    request_timeout_seconds: u64,

    /// Maximum request body size in bytes.
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = 1024 * 1024)]
    max_body_bytes: usize,
}

impl Args {
    fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            listen_addr: self.listen_addr.clone(),
            data_dir: self.data_dir.clone(),
            cors_origins: self.cors_origins.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cafe_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cafe API");

    let config = args.gateway_config();
    tracing::info!(
        listen_addr = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        cors_origins = ?config.cors_origins,
        request_timeout_seconds = config.request_timeout_seconds,
        max_body_bytes = config.max_body_bytes,
        api_key = %key_fingerprint(&args.api_key),
        "Configuration loaded"
    );

    // Initialize RocksDB store
    tracing::info!(path = %config.data_dir.display(), "Opening RocksDB store");
    let store = Arc::new(RocksStore::open(&config.data_dir)?);

    let directory = Arc::new(CafeDirectoryService::new(store));
    tracing::info!(cafes = directory.cafe_count().await?, "Cafe directory ready");

    let guard = Arc::new(SharedSecretGuard::new(args.api_key)?);

    let listen_addr = config.listen_addr.clone();
    let state = GatewayState::new(directory, guard, config);
    let app = create_router(state);

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
