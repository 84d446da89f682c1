use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// Message returned for any by-id operation that misses.
pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

/// The status and optional JSON body produced by one operation.
///
/// Outcomes are independent of the transport; the axum layer turns them
/// into responses through [`IntoResponse`].
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub status: u16,
    pub body: Option<Value>,
}

impl Outcome {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    pub fn created(body: Value) -> Self {
        Self {
            status: 201,
            body: Some(body),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::message(400, reason)
    }

    pub fn not_found() -> Self {
        Self::message(404, NOT_FOUND_MESSAGE)
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::message(500, reason)
    }

    fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(json!({ "message": message.into() })),
        }
    }

    /// The `message` field of an error body, if any.
    pub fn message_text(&self) -> Option<&str> {
        self.body.as_ref()?.get("message")?.as_str()
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.body {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}
