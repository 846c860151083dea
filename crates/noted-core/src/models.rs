//! Data model for the noted service.

use serde::{Deserialize, Serialize};

/// The sole persisted entity: a (name, content) pair keyed by unique name.
///
/// `name` is the lookup key for update and delete; uniqueness is enforced by
/// the store's UNIQUE constraint, not by the application. The surrogate `id`
/// column is never exposed through the API and so has no field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub content: String,
}

/// Body of a PUT /notes/:name request.
///
/// Only `content` is read; the target name comes from the path. Any extra
/// fields in the body (including a `name`) are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_serializes_name_and_content_only() {
        let note = Note {
            name: "a".to_string(),
            content: "x".to_string(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json, serde_json::json!({"name": "a", "content": "x"}));
    }

    #[test]
    fn test_note_deserializes_from_api_shape() {
        let note: Note = serde_json::from_str(r#"{"name":"a","content":"x"}"#).unwrap();
        assert_eq!(note.name, "a");
        assert_eq!(note.content, "x");
    }

    #[test]
    fn test_update_request_ignores_extra_name_field() {
        let req: UpdateNoteRequest =
            serde_json::from_str(r#"{"name":"ignored","content":"y"}"#).unwrap();
        assert_eq!(req.content, "y");
    }

    #[test]
    fn test_update_request_requires_content() {
        let result = serde_json::from_str::<UpdateNoteRequest>(r#"{"name":"a"}"#);
        assert!(result.is_err());
    }
}
