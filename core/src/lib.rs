#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

pub mod models;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use models::{NewNote, Note, NotePatch, CONTENT_MAX_LEN, TITLE_MAX_LEN};
pub use store::NoteStore;
pub use validation::{
    ManualValidator, NoteValidator, SchemaValidator, UnknownStrategy, ValidationError,
    ValidationStrategy,
};
