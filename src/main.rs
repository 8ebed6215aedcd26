use anyhow::Context;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::database::seed_activities;
use activities::{build_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Config + catalog
    let config = AppConfig::from_env().context("invalid configuration")?;
    let catalog = seed_activities::seeded_catalog().context("invalid seed catalog")?;
    info!(
        build_id = env!("ACTIVITIES_BUILD_ID"),
        activities = catalog.len(),
        enforce_domain_suffix = config.signup_policy.enforce_domain_suffix,
        domain_suffix = %config.signup_policy.domain_suffix,
        static_dir = %config.static_dir.display(),
        "catalog ready"
    );

    // 3. Router
    let state = AppState::new(catalog, config.signup_policy.clone());
    let app = build_router(state, &config.static_dir);

    // 4. Listen, falling back to the next port when the configured one is taken
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("cannot parse {}:{}", config.host, config.port))?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback_port = config.port.checked_add(1).context("no fallback port")?;
            warn!(
                "could not bind {}: {}, trying {}:{}",
                addr, e, config.host, fallback_port
            );
            let fallback: SocketAddr = format!("{}:{}", config.host, fallback_port)
                .parse()
                .context("cannot parse fallback address")?;
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);
    info!("open http://{}/ to browse activities", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
