use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use reel_types::MoviePayload;
use serde_json::{json, Value};
use tracing::debug;

use crate::dispatch::{MovieService, Operation};
use crate::endpoint::HealthResponse;
use crate::outcome::Outcome;

type Service = State<Arc<MovieService>>;

/// `GET /movies`
pub async fn list_movies(State(service): Service) -> Outcome {
    service.dispatch(Operation::List)
}

/// `GET /movies/:id`
pub async fn get_movie(State(service): Service, Path(id): Path<String>) -> Outcome {
    service.dispatch(Operation::Get { id })
}

/// `POST /movies`
pub async fn create_movie(
    State(service): Service,
    body: Result<Json<Value>, JsonRejection>,
) -> Outcome {
    match decode_payload(body) {
        Ok(payload) => service.dispatch(Operation::Create { payload }),
        Err(outcome) => outcome,
    }
}

/// `PUT /movies/:id`
pub async fn update_movie(
    State(service): Service,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Outcome {
    match decode_payload(body) {
        Ok(payload) => service.dispatch(Operation::Update { id, payload }),
        Err(outcome) => outcome,
    }
}

/// `DELETE /movies/:id`
pub async fn delete_movie(State(service): Service, Path(id): Path<String>) -> Outcome {
    service.dispatch(Operation::Delete { id })
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(service): Service) -> Outcome {
    match service.store().len() {
        Ok(count) => Outcome::ok(json!({
            "name": "reel-server",
            "version": env!("CARGO_PKG_VERSION"),
            "movies": count,
        })),
        Err(e) => Outcome::internal(e.to_string()),
    }
}

/// Turn a request body into a payload.
///
/// Only a JSON object is a payload. serde would otherwise read an array
/// positionally as `[title, genre, year]`.
fn decode_payload(body: Result<Json<Value>, JsonRejection>) -> Result<MoviePayload, Outcome> {
    let value = match body {
        Ok(Json(value)) => value,
        Err(rejection) => return Err(undecodable(rejection.body_text())),
    };
    if !value.is_object() {
        return Err(undecodable("Request body must be a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| undecodable(e.to_string()))
}

/// A body that never became a payload is a bad request, whatever the
/// extractor's own status would have been.
fn undecodable(reason: String) -> Outcome {
    debug!(%reason, "request body rejected");
    Outcome::bad_request(reason)
}
