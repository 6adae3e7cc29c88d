//! Backend entry-point: loads settings, connects the store and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use folio::inbound::http::health::HealthState;
use folio::outbound::persistence::DbPool;
use folio::settings::{AppSettings, BuildMode};
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

    let settings = AppSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let session = settings
        .session_settings(BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let owner = settings.owner_secret().map_err(std::io::Error::other)?;
    if owner.is_none() {
        warn!("no owner configured; owner logins will be rejected");
    }

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        settings.bind_addr().map_err(std::io::Error::other)?,
    )
    .with_owner(owner)
    .with_display_offset(settings.display_offset().map_err(std::io::Error::other)?);

    match settings.pool_config() {
        Some(pool_config) => {
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; data is kept in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).await?;
    info!("server started");
    server.await
}
