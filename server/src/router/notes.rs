use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    transform::TransformOperation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

use crate::{
    errors::{RestError, RestResult},
    extract::JsonBody,
    model::{
        note::{CreateNoteBody, NoteDto, NoteParams, UpdateNoteBody},
        response::{DeleteResponse, ErrorResponse, SuccessResponse},
    },
    state::AppState,
};

pub fn note_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route(
            "/notes",
            get_with(list_notes, list_notes_docs).post_with(create_note, create_note_docs),
        )
        .api_route(
            "/notes/:id",
            get_with(get_note, get_note_docs)
                .put_with(update_note, update_note_docs)
                .delete_with(delete_note, delete_note_docs),
        )
}

async fn list_notes(State(state): State<AppState>) -> impl IntoApiResponse {
    let notes: Vec<NoteDto> = state.store.list().into_iter().map(NoteDto::from).collect();

    Json(SuccessResponse::list(notes))
}

fn list_notes_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List notes")
        .description("All notes in creation order")
        .tag("Notes")
        .response_with::<200, Json<SuccessResponse<Vec<NoteDto>>>, _>(|res| {
            res.example(SuccessResponse::list(vec![NoteDto::example()]))
        })
}

async fn get_note(
    State(state): State<AppState>,
    Path(params): Path<NoteParams>,
) -> impl IntoApiResponse {
    match state.store.get(&params.id) {
        Some(note) => Json(SuccessResponse::new(NoteDto::from(note))).into_response(),
        None => RestError::NoteNotFound.into_response(),
    }
}

fn get_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get note")
        .description("Fetch a single note by id")
        .tag("Notes")
        .response_with::<200, Json<SuccessResponse<NoteDto>>, _>(|res| {
            res.example(SuccessResponse::new(NoteDto::example()))
        })
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Note not found"))
}

async fn create_note(
    State(state): State<AppState>,
    body: JsonBody<CreateNoteBody>,
) -> impl IntoApiResponse {
    match perform_create(&state, body) {
        Ok(note) => (StatusCode::CREATED, Json(SuccessResponse::new(note))).into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_create(state: &AppState, body: JsonBody<CreateNoteBody>) -> RestResult<NoteDto> {
    let new_note = state
        .validator
        .validate_create(&body.value)
        .inspect_err(|e| debug!("Rejected note creation: {}", e))?;

    let note = state.store.create(new_note);
    info!("Created note {}", note.id);

    Ok(note.into())
}

fn create_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create note")
        .description("Title (max 200) and content (max 5000) are trimmed and must not be empty")
        .tag("Notes")
        .response_with::<201, Json<SuccessResponse<NoteDto>>, _>(|res| {
            res.description("Note created")
                .example(SuccessResponse::new(NoteDto::example()))
        })
        .response_with::<400, Json<ErrorResponse>, _>(|res| {
            res.description("Invalid note or malformed JSON")
        })
}

async fn update_note(
    State(state): State<AppState>,
    Path(params): Path<NoteParams>,
    body: JsonBody<UpdateNoteBody>,
) -> impl IntoApiResponse {
    match perform_update(&state, &params.id, body) {
        Ok(note) => Json(SuccessResponse::new(note)).into_response(),
        Err(e) => e.into_response(),
    }
}

// The patch is validated before the id is looked up, so an invalid patch
// for a missing note is a 400 rather than a 404.
fn perform_update(
    state: &AppState,
    id: &str,
    body: JsonBody<UpdateNoteBody>,
) -> RestResult<NoteDto> {
    let patch = state
        .validator
        .validate_update(&body.value)
        .inspect_err(|e| debug!("Rejected update of note {}: {}", id, e))?;

    let note = state.store.update(id, patch).ok_or(RestError::NoteNotFound)?;
    info!("Updated note {}", note.id);

    Ok(note.into())
}

fn update_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update note")
        .description("Replace only the provided fields. At least one of title and content is required.")
        .tag("Notes")
        .response_with::<200, Json<SuccessResponse<NoteDto>>, _>(|res| {
            res.example(SuccessResponse::new(NoteDto::example()))
        })
        .response_with::<400, Json<ErrorResponse>, _>(|res| {
            res.description("Invalid patch or malformed JSON")
        })
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Note not found"))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(params): Path<NoteParams>,
) -> impl IntoApiResponse {
    if state.store.delete(&params.id) {
        info!("Deleted note {}", params.id);
        Json(DeleteResponse::default()).into_response()
    } else {
        RestError::NoteNotFound.into_response()
    }
}

fn delete_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete note")
        .description("Remove a note. Its id is never handed out again.")
        .tag("Notes")
        .response_with::<200, Json<DeleteResponse>, _>(|res| res.example(DeleteResponse::default()))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Note not found"))
}
