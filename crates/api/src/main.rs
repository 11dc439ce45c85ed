use std::sync::Arc;

use anyhow::Context;
use ledger_accounts::InMemoryAccountStore;
use ledger_api::{app::SharedStore, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    ledger_observability::init(config.log_format);

    // State lives for the process lifetime only; a restart starts empty.
    let store: SharedStore = Arc::new(InMemoryAccountStore::new());
    let app = ledger_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
