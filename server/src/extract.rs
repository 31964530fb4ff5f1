use aide::{gen::GenContext, openapi::Operation, OperationInput};
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use notes_core::ValidationError;
use schemars::JsonSchema;
use serde_json::Value;
use std::marker::PhantomData;

use crate::errors::RestError;

/// Raw JSON request body.
///
/// Field rules are checked afterwards by a `NoteValidator`, so the body is
/// kept as a `Value`. `T` only describes the expected shape in the OpenAPI
/// document. Unparseable JSON or a missing JSON content type is rejected
/// with a validation error.
pub struct JsonBody<T> {
    pub value: Value,
    _schema: PhantomData<fn() -> T>,
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                RestError::Validation(ValidationError::new(format!(
                    "Invalid JSON body: {}",
                    rejection.body_text()
                )))
            })?;

        Ok(Self {
            value,
            _schema: PhantomData,
        })
    }
}

impl<T> OperationInput for JsonBody<T>
where
    T: JsonSchema,
{
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<T>::operation_input(ctx, operation);
    }
}
