use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use absolution_backend::{
    app, config::SiteConfig, spawn_limiter_pruning, utils::email::ResendDelivery, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,absolution_backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = SiteConfig::from_env().context("Invalid server configuration")?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.environment.clone().into()),
                ..Default::default()
            },
        ))
    });

    let mailer = Arc::new(ResendDelivery::new(&config.email));
    let port = config.port;
    tracing::info!(
        "Serving {} from {} ({})",
        config.site_url,
        config.static_dir.display(),
        config.environment
    );
    let state = Arc::new(AppState::new(config, mailer));
    spawn_limiter_pruning(state.clone());

    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
