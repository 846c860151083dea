//! # noted-db
//!
//! PostgreSQL persistence layer for the noted service: startup connection
//! handling, schema bootstrap, and the note repository implementation.

pub mod notes;
pub mod pool;
pub mod schema;

pub use notes::PgNoteRepository;
pub use pool::{connect_with_retry, DEFAULT_MAX_CONNECTIONS};
pub use schema::ensure_schema;

use noted_core::{Config, Result};

/// Combined database context: the shared pool plus the note repository.
///
/// Constructed once at startup and injected into the handler layer. There
/// is no other shared state; the store is the sole source of truth.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for CRUD operations.
    pub notes: PgNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Connect to the store described by `config`, retrying per its
    /// startup retry settings.
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = connect_with_retry(
            &config.database_url,
            config.connect_retries,
            config.connect_retry_delay,
        )
        .await?;
        Ok(Self::new(pool))
    }

    /// Ensure the notes table exists. Idempotent.
    pub async fn ensure_schema(&self) -> Result<()> {
        ensure_schema(&self.pool).await
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}
