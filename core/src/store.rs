use crate::models::{NewNote, Note, NotePatch};
use chrono::{SecondsFormat, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

const FIRST_ID: u64 = 1;

#[derive(Debug)]
struct StoreState {
    notes: Vec<Note>,
    next_id: u64,
}

impl StoreState {
    fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

/// In-memory note store.
///
/// Notes are kept in insertion order. Ids come from a counter that only
/// moves forward, so an id is never handed out twice even after the note
/// that carried it is deleted. Every operation holds the lock for its whole
/// duration, which serializes mutations across request handlers.
#[derive(Debug)]
pub struct NoteStore {
    state: Mutex<StoreState>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::new()),
        }
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still holds consistent state.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all notes in insertion order
    pub fn list(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }

    /// Get a note by ID
    pub fn get(&self, id: &str) -> Option<Note> {
        let state = self.lock();
        state.position(id).map(|index| state.notes[index].clone())
    }

    /// Create a new note with the next sequential id
    pub fn create(&self, new_note: NewNote) -> Note {
        let mut state = self.lock();

        let id = state.next_id.to_string();
        state.next_id += 1;

        let now = timestamp();
        let note = Note {
            id,
            title: new_note.title,
            content: new_note.content,
            created_at: now.clone(),
            updated_at: now,
        };

        state.notes.push(note.clone());
        note
    }

    /// Apply a partial update. Returns `None` when no note has the given id.
    pub fn update(&self, id: &str, patch: NotePatch) -> Option<Note> {
        let mut state = self.lock();
        let index = state.position(id)?;
        let note = &mut state.notes[index];

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }

        // Never step backwards if the wall clock does
        let now = timestamp();
        if now > note.updated_at {
            note.updated_at = now;
        }

        Some(note.clone())
    }

    /// Remove a note. Returns `false` when no note has the given id.
    pub fn delete(&self, id: &str) -> bool {
        let mut state = self.lock();
        match state.position(id) {
            Some(index) => {
                state.notes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.lock().notes.len()
    }

    /// Drop all notes and restart ids from "1"
    pub fn reset(&self) {
        *self.lock() = StoreState::new();
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
