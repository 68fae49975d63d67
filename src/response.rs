//! Status plus JSON body helpers used by the handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// 204 with a message body attached. hyper omits it on the wire; in-process callers see it.
pub fn deleted(message: &'static str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::NO_CONTENT, Json(MessageBody { message }))
}
