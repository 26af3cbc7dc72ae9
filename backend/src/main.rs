//! Ticket service entry-point: loads settings, prepares storage, and runs the
//! HTTP server.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ticket_service::inbound::http::health::HealthState;
use ticket_service::outbound::persistence::{DbPool, run_pending_migrations};
use ticket_service::server::{ServerConfig, TicketServiceSettings, create_server};

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

    let settings = TicketServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.pool_config() {
        Some(pool_config) => {
            run_pending_migrations(pool_config.database_url())
                .await
                .map_err(std::io::Error::other)?;
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database URL configured; tickets are kept in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "ticket service listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
