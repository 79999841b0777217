//! HTTP server for the Net Salary Engine.
//!
//! Reads the service configuration from the path in `NET_SALARY_CONFIG`
//! (default `./config/service.yaml`; built-in defaults when the file is
//! absent) and serves `POST /calculate`.

use std::error::Error;

use net_salary_engine::api::{AppState, create_router};
use net_salary_engine::config::ConfigLoader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV_VAR: &str = "NET_SALARY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

/// Initialise the tracing subscriber.
///
/// Honours `RUST_LOG` when set, otherwise uses the configured filter.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config_found = std::path::Path::new(&config_path).exists();
    let loader = ConfigLoader::load_or_default(&config_path)?;

    init_tracing(&loader.config().log_filter);
    if !config_found {
        warn!(path = %config_path, "Configuration file not found, using defaults");
    }

    let addr = loader.config().bind_address;
    let app = create_router(AppState::new(loader));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "net-salary-engine listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
