#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
#![warn(clippy::expect_used)]

use config::ServerConfig;
use errors::ApplicationError;
use notes_core::NoteStore;
use router::setup_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod errors;
mod extract;
mod model;
mod router;
mod state;

#[cfg(test)]
mod test;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    if let Err(e) = run().await {
        // Print the error using Display
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run() -> Result<(), ApplicationError> {
    setup_tracing();

    let config = ServerConfig::from_env()?;
    info!("Validating requests with the {:?} strategy", config.validation);

    let app_state = AppState::new(NoteStore::new(), config.validation);
    let app = setup_router(app_state);

    let address = config.address();
    info!("Starting server on {}", address);

    let listener = TcpListener::bind(address)
        .await
        .map_err(ApplicationError::from)?;

    info!(
        "Listening on: {}",
        listener.local_addr().map_err(ApplicationError::from)?
    );

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ApplicationError::CannotServe)?;
    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{crate_name}=debug,tower_http=debug",
                    crate_name = env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
