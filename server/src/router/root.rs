use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    transform::TransformOperation,
};
use axum::{extract::State, Json};

use crate::{
    model::response::{DocumentationLinks, ServiceInfo},
    router::openapi::{OPENAPI_PATH, REDOC_PATH},
    state::AppState,
};

pub fn root_routes() -> ApiRouter<AppState> {
    ApiRouter::new().api_route("/", get_with(service_info, service_info_docs))
}

fn build_info(total_notes: usize) -> ServiceInfo {
    ServiceInfo {
        message: "Notes API is running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_notes,
        documentation: DocumentationLinks {
            redoc: REDOC_PATH.to_string(),
            openapi: OPENAPI_PATH.to_string(),
        },
    }
}

async fn service_info(State(state): State<AppState>) -> impl IntoApiResponse {
    Json(build_info(state.store.count()))
}

fn service_info_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Service info")
        .description("Service name, version and current note count")
        .tag("Service")
        .response_with::<200, Json<ServiceInfo>, _>(|res| res.example(build_info(1)))
}
