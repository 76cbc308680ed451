//! Example: Provision the schema and seed a small smoke dataset.
//!
//! This runs the whole pipeline end to end against a disposable database:
//! - waits for the database, creates the tables for the configured variant
//! - seeds the smoke-test plan (10 users, 25 proposals, 8 projects, ...)
//! - reads one count back to show the rows landed
//!
//! Run with:
//! ```
//! cargo run -p seed-data --example seed_smoke
//! ```

use conecta::config::DbConfig;
use conecta::{db, schema};
use rand::SeedableRng;
use rand::rngs::StdRng;
use seed_data::builders::SeedPlan;
use seed_data::faker::EnFaker;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DbConfig::from_env()?;
    let pool = db::wait_for_database(&config).await?;

    schema::create_all(&pool, config.variant).await?;
    tracing::info!("Schema ready ({} variant)", config.variant);

    // Reproducible rows
    let mut rng = StdRng::seed_from_u64(12345);

    let outcome = SeedPlan::smoke_test()
        .with_variant(config.variant)
        .build(&pool, &EnFaker, &mut rng)
        .await?;

    tracing::info!("Smoke dataset seeded!");
    tracing::info!("  Users: {}", outcome.user_ids.len());
    tracing::info!("  Courses: {}", outcome.course_ids.len());
    tracing::info!("  Proposals: {}", outcome.proposal_ids.len());
    tracing::info!("  Projects: {}", outcome.project_ids.len());
    tracing::info!("  Feedback: {}", outcome.feedback_ids.len());
    tracing::info!(
        "  Project-student links: {}",
        outcome.project_student_ids.len()
    );
    tracing::info!("  Notifications: {}", outcome.notification_ids.len());

    let proposal_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Proposta")
        .fetch_one(&pool)
        .await?;
    tracing::info!("Proposals now in database: {}", proposal_count);

    Ok(())
}
