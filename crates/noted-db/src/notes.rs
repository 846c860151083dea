//! Note repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use noted_core::{Note, NoteRepository, Result};

/// PostgreSQL implementation of NoteRepository.
///
/// Each method is one parameterized statement; store errors propagate
/// verbatim and nothing is retried here. Concurrent update/delete on the
/// same name race at the store with last-write-wins semantics.
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list_all(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query("SELECT name, content FROM notes")
            .fetch_all(&self.pool)
            .await?;

        let mut notes = Vec::with_capacity(rows.len());
        for row in &rows {
            notes.push(Note {
                name: row.try_get("name")?,
                content: row.try_get("content")?,
            });
        }
        Ok(notes)
    }

    async fn insert(&self, note: &Note) -> Result<()> {
        sqlx::query("INSERT INTO notes (name, content) VALUES ($1, $2)")
            .bind(&note.name)
            .bind(&note.content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_by_name(&self, name: &str, content: &str) -> Result<()> {
        // Zero rows matched is still success; no existence check.
        sqlx::query("UPDATE notes SET content = $1 WHERE name = $2")
            .bind(content)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<()> {
        sqlx::query("DELETE FROM notes WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
