//! Payment service entry-point: loads settings, wires the simulated store,
//! and serves the REST API.

mod server;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use payments::settings::ServiceSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let faults = settings.fault_policy().map_err(std::io::Error::other)?;

    info!(
        %bind_addr,
        fault_rate = settings.fault_rate,
        seeded = settings.fault_seed.is_some(),
        "starting payment service"
    );

    let server = create_server(ServerConfig::new(bind_addr, faults))?;
    server.await
}
