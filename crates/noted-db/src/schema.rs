//! Schema bootstrap for the notes table.

use sqlx::PgPool;
use tracing::info;

use noted_core::Result;

/// The single table this service owns. `id` is a surrogate key the API
/// never exposes; lookups go through the unique `name`.
const CREATE_NOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id SERIAL PRIMARY KEY,
    name TEXT UNIQUE NOT NULL,
    content TEXT NOT NULL
)
"#;

/// Create the notes table if it does not exist. Idempotent.
///
/// Any error here is fatal to the caller: the service cannot serve
/// correctly without its schema.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_NOTES_TABLE).execute(pool).await?;
    info!(
        subsystem = "database",
        component = "schema",
        op = "ensure",
        "Notes table ready"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_create_if_not_exists() {
        // Idempotency hinges on IF NOT EXISTS being present.
        assert!(CREATE_NOTES_TABLE.contains("IF NOT EXISTS"));
    }

    #[test]
    fn test_schema_declares_unique_name() {
        assert!(CREATE_NOTES_TABLE.contains("name TEXT UNIQUE NOT NULL"));
    }
}
