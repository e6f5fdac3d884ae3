//! # Contoso Pizza service
//!
//! Loads [`AppConfig`], starts the [`PizzaSystem`] and serves the router until Ctrl-C,
//! then shuts the store down.

use contoso_pizza::config::AppConfig;
use contoso_pizza::lifecycle::{setup_tracing, PizzaSystem};
use contoso_pizza::router::{router, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);

    let system = PizzaSystem::new(&config.store)?;
    let app = router(AppState::new(system.pizza_client.clone()));

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
