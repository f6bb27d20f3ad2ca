use anyhow::Context;

use printerp_api::app::{build_app, services::AppServices};
use printerp_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    printerp_observability::init();

    let config = ApiConfig::from_env()?;
    let (services, _store) = AppServices::in_memory();
    let app = build_app(&config, services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        admin_gui = printerp_admin::gui_revision(),
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
