//! Connection setup with a bounded wait for database availability.
//!
//! The database container usually comes up a few seconds after the tooling
//! does, so the first connection is retried on a fixed schedule instead of
//! failing outright.

use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::config::DbConfig;
use crate::error::Error;

/// Fixed-interval schedule for the startup connection. No backoff: the
/// budget is spent one attempt per interval until it runs out.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 30,
            delay: Duration::from_secs(1),
        }
    }
}

/// Waits until the database accepts connections, then returns a pool.
///
/// Retries for 30 seconds before giving up with [`Error::Unavailable`].
pub async fn wait_for_database(config: &DbConfig) -> Result<PgPool, Error> {
    wait_with_policy(config, RetryPolicy::default()).await
}

/// [`wait_for_database`] with an explicit retry schedule.
pub async fn wait_with_policy(config: &DbConfig, policy: RetryPolicy) -> Result<PgPool, Error> {
    let url = config.url();
    let pool = with_retry(policy, |_| {
        PgPoolOptions::new().max_connections(5).connect(&url)
    })
    .await?;
    info!("Database available");
    Ok(pool)
}

/// Runs `connect` up to `policy.attempts` times, sleeping `policy.delay`
/// after each failure. The attempt number (starting at 1) is passed in for
/// logging and tests.
async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut connect: F) -> Result<T, Error>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    for attempt in 1..=policy.attempts {
        match connect(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!(
                    "Waiting for database ({}/{})... {}",
                    attempt, policy.attempts, err
                );
                tokio::time::sleep(policy.delay).await;
            }
        }
    }

    Err(Error::Unavailable {
        attempts: policy.attempts,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn fast_policy(attempts: u32) -> RetryPolicy {
        RetryPolicy {
            attempts,
            delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_retry_succeeds_mid_budget() {
        let calls = Cell::new(0u32);

        let result = with_retry(fast_policy(30), |attempt| {
            calls.set(attempt);
            async move {
                if attempt < 5 {
                    Err(sqlx::Error::PoolTimedOut)
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 5);
        assert_eq!(calls.get(), 5);
    }

    #[tokio::test]
    async fn test_retry_returns_immediately_on_first_success() {
        let calls = Cell::new(0u32);

        let result = with_retry(fast_policy(30), |attempt| {
            calls.set(attempt);
            async move { Ok::<_, sqlx::Error>("ready") }
        })
        .await;

        assert_eq!(result.unwrap(), "ready");
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_retry_budget_exhausted() {
        let calls = Cell::new(0u32);

        let result: Result<(), Error> = with_retry(fast_policy(3), |attempt| {
            calls.set(attempt);
            async { Err(sqlx::Error::PoolTimedOut) }
        })
        .await;

        assert!(matches!(result, Err(Error::Unavailable { attempts: 3 })));
        assert_eq!(calls.get(), 3);
    }
}
