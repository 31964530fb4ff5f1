use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Note DTO for API. Mirrors `notes_core::Note`, which does not derive `JsonSchema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<notes_core::Note> for NoteDto {
    fn from(note: notes_core::Note) -> Self {
        NoteDto {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

impl NoteDto {
    pub fn example() -> Self {
        NoteDto {
            id: "1".to_string(),
            title: "Groceries".to_string(),
            content: "Milk, eggs".to_string(),
            created_at: "2024-05-01T09:30:00.000Z".to_string(),
            updated_at: "2024-05-01T09:30:00.000Z".to_string(),
        }
    }
}

/// Request body for creating a note
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateNoteBody {
    /// 1 to 200 characters after trimming
    pub title: String,
    /// 1 to 5000 characters after trimming
    pub content: String,
}

/// Request body for updating a note. At least one field must be present.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateNoteBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Path parameters of `/notes/:id`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct NoteParams {
    /// Note id as returned on creation
    pub id: String,
}
