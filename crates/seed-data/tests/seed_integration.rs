//! Integration tests for schema provisioning and seeding.
//!
//! These tests verify end-to-end behavior against a real database:
//! - the initializer can be applied twice without error
//! - a seeding run inserts the requested counts with intact foreign keys
//! - a rerun appends another dataset instead of failing
//!
//! To run them you need a disposable PostgreSQL database and DATABASE_URL
//! set; without it every test skips. SCHEMA_VARIANT selects the schema
//! (default strict), which must match how the database was provisioned.
//!
//! **WARNING**: the seeding test clears every Conecta table first. Never
//! point it at data you care about.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p seed-data`

use std::env;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::{PgPool, postgres::PgPoolOptions};

use conecta::schema::{self, SchemaVariant};
use seed_data::builders::SeedPlan;
use seed_data::db::Seeder;
use seed_data::faker::EnFaker;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

/// Variant under test; must match the provisioned schema.
fn test_variant() -> SchemaVariant {
    env::var("SCHEMA_VARIANT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count query failed")
}

#[tokio::test]
async fn test_schema_is_rerunnable() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let variant = test_variant();

    schema::create_all(&pool, variant)
        .await
        .expect("first run should provision the tables");
    schema::create_all(&pool, variant)
        .await
        .expect("second run should be a no-op");
}

#[tokio::test]
async fn test_smoke_seed_and_rerun() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let variant = test_variant();

    schema::create_all(&pool, variant)
        .await
        .expect("schema should provision");
    Seeder::new(pool.clone(), variant)
        .clear_all()
        .await
        .expect("tables should clear");

    // Small batch size so the multi-row chunking path is exercised
    let mut rng = StdRng::seed_from_u64(20240824);
    let outcome = SeedPlan::smoke_test()
        .with_variant(variant)
        .with_batch_size(4)
        .build(&pool, &EnFaker, &mut rng)
        .await
        .expect("seeding should succeed");

    assert_eq!(outcome.user_ids.len(), 10);
    assert_eq!(outcome.course_ids.len(), 3);
    assert_eq!(outcome.proposal_ids.len(), 25);
    assert_eq!(outcome.project_ids.len(), 8);
    assert_eq!(outcome.feedback_ids.len(), 6);
    assert!(outcome.project_student_ids.len() <= 10);
    assert_eq!(outcome.notification_ids.len(), 12);

    assert_eq!(count(&pool, "Usuario").await, 10);
    assert_eq!(count(&pool, "Curso").await, 3);
    assert_eq!(count(&pool, "Proposta").await, 25);
    assert_eq!(count(&pool, "Projeto").await, 8);
    assert_eq!(count(&pool, "Feedback").await, 6);
    assert_eq!(count(&pool, "Notificacao").await, 12);

    // Every proposal references a user that exists
    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM Proposta p \
         LEFT JOIN Usuario u ON u.id_usuario = p.id_usuario \
         WHERE u.id_usuario IS NULL",
    )
    .fetch_one(&pool)
    .await
    .expect("orphan query failed");
    assert_eq!(orphans, 0);

    // Enrollment pairs are unique
    let distinct_links: i64 = sqlx::query_scalar(
        "SELECT COUNT(DISTINCT (fk_projeto_id_projeto, id_usuario)) FROM Projeto_Aluno",
    )
    .fetch_one(&pool)
    .await
    .expect("distinct link query failed");
    assert_eq!(distinct_links as usize, outcome.project_student_ids.len());

    // A rerun appends a second dataset; nothing collides
    let rerun = SeedPlan::smoke_test()
        .with_variant(variant)
        .with_batch_size(4)
        .build(&pool, &EnFaker, &mut rng)
        .await
        .expect("rerun should succeed");

    assert_eq!(rerun.user_ids.len(), 10);
    assert_eq!(count(&pool, "Usuario").await, 20);
    assert_eq!(count(&pool, "Proposta").await, 50);

    // Ids keep growing; the second batch never reuses the first one's
    let first_max = outcome.user_ids.iter().max().copied().unwrap_or(0);
    let second_min = rerun.user_ids.iter().min().copied().unwrap_or(i32::MAX);
    assert!(second_min > first_max);
}
