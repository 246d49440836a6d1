use std::sync::Arc;

use anyhow::Context;
use contacts_app::{logging, router, AppContext, Config};
use contacts_logging::{contacts_debug, contacts_info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    logging::initialize(config.log_destination, config.log_level);
    for key in &config.defaulted {
        contacts_debug!("{} not set, using default", key);
    }

    let context = Arc::new(AppContext::from_config(&config));
    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    contacts_info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(context))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    contacts_info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        contacts_info!("could not listen for ctrl-c: {}", err);
        std::future::pending::<()>().await;
    }
}
