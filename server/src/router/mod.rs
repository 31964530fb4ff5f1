use aide::{axum::ApiRouter, openapi::OpenApi};
use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
    Extension, Router,
};
use health::health_routes;
use notes::note_routes;
use openapi::{api_docs, docs_routes};
use root::root_routes;
use std::{any::Any, sync::Arc};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::{errors::RestError, state::AppState};

pub mod health;
pub mod notes;
pub mod openapi;
pub mod root;

pub fn setup_router(app_state: AppState) -> Router {
    aide::gen::on_error(|error| {
        error!("OpenAPI generation error: {error}");
    });

    aide::gen::extract_schemas(true);
    let mut api = OpenApi::default();

    let router = ApiRouter::new()
        .merge(root_routes())
        .merge(note_routes())
        .merge(health_routes())
        .merge(docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api)));

    with_error_handling(router)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Unmatched paths and unsupported methods get the 404 envelope, panics the 500 one.
pub(crate) fn with_error_handling<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(endpoint_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn endpoint_not_found() -> RestError {
    RestError::EndpointNotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    RestError::Internal(format!("handler panicked: {detail}")).into_response()
}
