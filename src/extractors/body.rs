//! Extract a JSON object body without rejecting the request.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

/// JSON object body, or `None` when the body is missing, malformed, not JSON, or not an object.
/// Handlers decide how an unusable body is reported. Only a body over the size limit rejects.
#[derive(Clone, Debug)]
pub struct JsonBody(pub Option<Map<String, Value>>);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let object = match Json::<Value>::from_request(req, state).await {
            Ok(Json(Value::Object(map))) => Some(map),
            Ok(_) => None,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::debug!(error = %rejection, "request body over limit");
                return Err(AppError::PayloadTooLarge);
            }
            Err(rejection) => {
                tracing::debug!(error = %rejection, "unusable request body");
                None
            }
        };
        Ok(JsonBody(object))
    }
}

impl JsonBody {
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_ref()
    }
}
