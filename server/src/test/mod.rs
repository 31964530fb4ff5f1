#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use axum_test::TestServer;
use notes_core::{NoteStore, ValidationStrategy};

use crate::{
    model::note::{CreateNoteBody, NoteDto},
    model::response::SuccessResponse,
    router::setup_router,
    state::AppState,
};

mod service;

pub fn setup_server() -> TestServer {
    setup_server_with(ValidationStrategy::default())
}

pub fn setup_server_with(validation: ValidationStrategy) -> TestServer {
    let app = setup_router(AppState::new(NoteStore::new(), validation));
    TestServer::new(app).unwrap()
}

pub async fn create_note(server: &TestServer, title: &str, content: &str) -> NoteDto {
    let response = server
        .post("/notes")
        .json(&CreateNoteBody {
            title: title.to_string(),
            content: content.to_string(),
        })
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<SuccessResponse<NoteDto>>().data
}

pub async fn note_count(server: &TestServer) -> usize {
    let response = server.get("/notes").await;
    response.assert_status_ok();
    response
        .json::<SuccessResponse<Vec<NoteDto>>>()
        .count
        .unwrap()
}
