//! Turnstile server — application entry point.

use tracing_subscriber::EnvFilter;
use turnstile_auth::{CredentialStore, TokenIssuer};
use turnstile_db::DbManager;
use turnstile_db::repository::SurrealAccountRepository;
use turnstile_server::api::{self, AppState};
use turnstile_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("turnstile_server=info".parse().unwrap())
                .add_directive("turnstile_db=info".parse().unwrap()),
        )
        .json()
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Fatal error, shutting down");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let db = DbManager::connect(&config.db).await?;
    turnstile_db::run_migrations(db.client()).await?;

    let accounts = SurrealAccountRepository::new(db.client().clone());
    let state = AppState {
        credentials: CredentialStore::new(accounts, &config.auth),
        tokens: TokenIssuer::new(&config.auth)?,
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Turnstile server listening");
    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
