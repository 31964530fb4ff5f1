use notes_core::{NoteStore, NoteValidator, ValidationStrategy};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NoteStore>,
    pub validator: Arc<dyn NoteValidator>,
}

impl AppState {
    pub fn new(store: NoteStore, validation: ValidationStrategy) -> Self {
        Self {
            store: Arc::new(store),
            validator: Arc::from(validation.into_validator()),
        }
    }
}
