use std::net::SocketAddr;

use obra_api::{config, factory, router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_filename(".env.local").ok();

    let default_filter = if cfg!(debug_assertions) {
        "obra_api=debug,tower_http=debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::read_config()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    let store = factory::site_store(&settings);
    let reports = factory::report_service(store.clone(), &settings.report)?;
    let app = router::create(AppState::new(store, reports), &settings);

    let addr: SocketAddr = format!("{}:{}", settings.application.host, settings.application.port)
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
