//! Core traits for noted abstractions.
//!
//! These traits define the interfaces that concrete implementations must
//! satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Note;

/// Repository for note persistence.
///
/// Each method maps to exactly one parameterized statement against the
/// store. Store errors propagate verbatim to the caller; nothing is retried
/// at this layer.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Fetch every note. An empty table yields an empty vec, never an
    /// absent value.
    async fn list_all(&self) -> Result<Vec<Note>>;

    /// Insert a new note. Fails with a store error if `note.name` already
    /// exists (unique constraint) or on any connectivity issue.
    async fn insert(&self, note: &Note) -> Result<()>;

    /// Update the content of the note matching `name`. Succeeds even when
    /// zero rows match; no existence check is performed.
    async fn update_by_name(&self, name: &str, content: &str) -> Result<()>;

    /// Delete the note matching `name`. Same zero-match tolerance as
    /// `update_by_name`.
    async fn delete_by_name(&self, name: &str) -> Result<()>;
}
