use anyhow::Result;
use fieldsense_storage::PgStorage;

/// Connecting runs the idempotent migrations; there is nothing else to do.
pub async fn run(database_url: &str) -> Result<()> {
    PgStorage::new(database_url).await?;
    tracing::info!("migrations applied");
    Ok(())
}
