use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use item_store_server::config::AppConfig;
use item_store_server::logging::init_tracing;
use item_store_server::startup::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "item-store-server")]
#[command(about = "In-memory item API and multi-datasource create API")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,
}

fn load_config(args: &Args) -> Result<AppConfig, String> {
    // Only the implicit default path may be missing.
    if args.config == "config.yaml" && !std::path::Path::new("config.yaml").exists() {
        info!("no config.yaml found, using default configuration");
        return Ok(AppConfig::default_config());
    }

    AppConfig::load_from_file(&args.config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_tracing("info");

    let mut app_config =
        load_config(&args).map_err(|e| format!("Failed to load configuration: {}", e))?;

    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = args.host {
        app_config.server.host = host;
    }

    let state = AppState::from_config(&app_config)?;
    let app = build_router(state);

    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        warn!(
            host = %app_config.server.host,
            "invalid host address, using 127.0.0.1"
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));

    info!(
        %addr,
        backend = %app_config.backend.backend_type,
        request_timeout_secs = app_config.server.request_timeout_secs,
        "item store server listening"
    );
    info!("  items:     {}/items", addr);
    info!("  users:     {}/api/v1/users", addr);
    info!("  companies: {}/api/v2/companies", addr);
    info!("  brands:    {}/api/v3/brands", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
