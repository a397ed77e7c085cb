use std::sync::Arc;

use anyhow::Result;
use fieldsense_http::{create_router, AppState};
use fieldsense_storage::PgStorage;

pub async fn run(host: &str, port: u16, database_url: &str) -> Result<()> {
    let storage = Arc::new(PgStorage::new(database_url).await?);
    let state = Arc::new(AppState::new(storage));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
