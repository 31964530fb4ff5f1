use std::sync::Arc;

use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    openapi::{OpenApi, Tag},
    redoc::Redoc,
    transform::TransformOpenApi,
};
use axum::{response::IntoResponse, routing::get, Extension, Json};

use crate::state::AppState;

pub const REDOC_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/docs/api.json";

pub fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Notes API")
        .summary("In-memory CRUD service for short text notes")
        .description("Create, read, update and delete notes made of a title and content.")
        .tag(Tag {
            name: "Notes".into(),
            description: Some("Note management".into()),
            ..Default::default()
        })
}

/// Redoc page and the raw OpenAPI document. Registered with `route`, so
/// neither shows up in the document itself.
pub fn docs_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .route(
            REDOC_PATH,
            get_with(
                Redoc::new(OPENAPI_PATH)
                    .with_title("Notes API")
                    .axum_handler(),
                |op| op.description("This documentation page."),
            ),
        )
        .route(OPENAPI_PATH, get(serve_docs))
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api.as_ref()).into_response()
}
