//! Schema initializer - provisions the Conecta tables.
//!
//! Run with:
//! ```
//! cargo run -p conecta --bin create-tables
//! ```

use conecta::config::DbConfig;
use conecta::{db, schema};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DbConfig::from_env()?;
    let pool = db::wait_for_database(&config).await?;

    schema::create_all(&pool, config.variant).await?;

    tracing::info!("Tables created/validated ({} variant)", config.variant);

    Ok(())
}
