//! Database connection management with bounded startup retry.

use std::time::{Duration, Instant};

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

use noted_core::{Error, Result};

/// Default maximum number of connections in the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default connection acquire timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Open a pool and verify liveness with a round-trip probe.
///
/// `PgPoolOptions::connect` only establishes the first connection lazily
/// enough that a probe query is still worthwhile; the original service did
/// the same open-then-ping dance.
async fn try_connect(database_url: &str) -> std::result::Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .connect(database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    Ok(pool)
}

/// Connect to PostgreSQL, retrying up to `retries` times with a fixed
/// `delay` between attempts.
///
/// No exponential backoff, no jitter: the retry loop exists so the process
/// survives the window where its database container is still coming up.
/// When every attempt fails, the last error is returned and the caller is
/// expected to treat it as fatal.
pub async fn connect_with_retry(
    database_url: &str,
    retries: u32,
    delay: Duration,
) -> Result<PgPool> {
    let start = Instant::now();
    let mut last_err = None;

    for attempt in 1..=retries {
        match try_connect(database_url).await {
            Ok(pool) => {
                info!(
                    subsystem = "database",
                    component = "pool",
                    op = "established",
                    attempt,
                    pool_size = pool.size(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Database connection established"
                );
                return Ok(pool);
            }
            Err(e) => {
                warn!(
                    subsystem = "database",
                    component = "pool",
                    attempt,
                    max_attempts = retries,
                    error = %e,
                    "Database connection attempt failed"
                );
                last_err = Some(e);
                if attempt < retries {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    Err(match last_err {
        Some(e) => Error::Database(e),
        None => Error::Config(format!("connect retries set to {retries}")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_connections() {
        assert_eq!(DEFAULT_MAX_CONNECTIONS, 10);
    }

    #[tokio::test]
    async fn test_zero_retries_is_a_config_error() {
        let result = connect_with_retry("postgres://localhost/none", 0, Duration::ZERO).await;
        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("0")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
