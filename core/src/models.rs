use serde::{Deserialize, Serialize};

/// Maximum title length, in characters, after trimming
pub const TITLE_MAX_LEN: usize = 200;
/// Maximum content length, in characters, after trimming
pub const CONTENT_MAX_LEN: usize = 5000;

/// A stored note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Sequential id assigned by the store ("1", "2", ...)
    pub id: String,
    pub title: String,
    pub content: String,
    /// RFC 3339 UTC timestamp, set once at creation
    pub created_at: String,
    /// RFC 3339 UTC timestamp, refreshed on every update
    pub updated_at: String,
}

/// Validated and trimmed input for a new note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// Partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
