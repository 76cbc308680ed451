//! Default seed script - fills the Conecta tables with the canonical
//! development dataset.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Set `SEED` to an integer for a reproducible run.

use conecta::config::DbConfig;
use conecta::db;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seed_data::builders::SeedPlan;
use seed_data::faker::EnFaker;
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

    tracing::info!("Connected to database ({} variant)", config.variant);

    let mut rng = match std::env::var("SEED") {
        Ok(seed) => StdRng::seed_from_u64(seed.parse()?),
        Err(_) => StdRng::from_entropy(),
    };

    let outcome = SeedPlan::new()
        .with_variant(config.variant)
        .build(&pool, &EnFaker, &mut rng)
        .await?;

    // Summary output
    tracing::info!("Seed completed!");
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

    Ok(())
}
