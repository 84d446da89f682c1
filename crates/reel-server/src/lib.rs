//! HTTP server for reel.
//!
//! Serves a single in-memory `/movies` collection with create, read, update
//! and delete. Requests are decoded into payloads, validated by the gate,
//! applied to the store, and mapped to an [`Outcome`] (status plus JSON
//! body).

pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod handler;
pub mod outcome;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use dispatch::{MovieService, Operation};
pub use endpoint::{endpoints, HealthResponse};
pub use error::{ServerError, ServerResult};
pub use outcome::{Outcome, NOT_FOUND_MESSAGE};
pub use server::ReelServer;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use reel_gate::REQUIRED_FIELDS_MESSAGE;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app() -> Router {
        ReelServer::new(ServerConfig::default()).unwrap().router()
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Option<Value>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes).unwrap())
        };
        (status, body)
    }

    fn dune() -> Value {
        json!({ "title": "Dune", "genre": "Sci-Fi", "year": 1984 })
    }

    fn not_found() -> Option<Value> {
        Some(json!({ "message": "Movie not found" }))
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap()["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint_counts_movies() {
        let app = app();
        send(&app, "POST", "/movies", Some(dune())).await;
        let (status, body) = send(&app, "GET", "/info", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap()["movies"], 1);
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let (status, body) = send(&app(), "GET", "/movies", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Some(json!([])));
    }

    #[tokio::test]
    async fn create_get_delete_scenario() {
        let app = app();

        let (status, body) = send(&app, "POST", "/movies", Some(dune())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            Some(json!({ "id": 1, "title": "Dune", "genre": "Sci-Fi", "year": 1984 }))
        );

        let alien = json!({ "title": "Alien", "genre": "Horror", "year": 1979 });
        let (status, body) = send(&app, "POST", "/movies", Some(alien)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.unwrap()["id"], 2);

        let (status, body) = send(&app, "GET", "/movies/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap()["title"], "Dune");

        let (status, body) = send(&app, "DELETE", "/movies/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_none());

        let (status, body) = send(&app, "GET", "/movies/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found());

        // A length-derived id would be 2 here, colliding with Alien.
        let heat = json!({ "title": "Heat", "genre": "Crime", "year": 1995 });
        let (status, body) = send(&app, "POST", "/movies", Some(heat)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.unwrap()["id"], 3);

        let (_, body) = send(&app, "GET", "/movies", None).await;
        let ids: Vec<u64> = body
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn create_missing_year_is_400_and_not_stored() {
        let app = app();
        let payload = json!({ "title": "X", "genre": "Y" });
        let (status, body) = send(&app, "POST", "/movies", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Some(json!({ "message": REQUIRED_FIELDS_MESSAGE })));

        let (_, body) = send(&app, "GET", "/movies", None).await;
        assert_eq!(body, Some(json!([])));
    }

    #[tokio::test]
    async fn create_with_falsy_fields_is_400() {
        let app = app();
        for payload in [
            json!({ "title": "", "genre": "Y", "year": 2000 }),
            json!({ "title": "X", "genre": "Y", "year": 0 }),
            json!({ "title": "X", "genre": null, "year": 2000 }),
        ] {
            let (status, _) = send(&app, "POST", "/movies", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn caller_supplied_id_is_ignored() {
        let app = app();
        let mut payload = dune();
        payload["id"] = json!(77);
        let (status, body) = send(&app, "POST", "/movies", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.unwrap()["id"], 1);
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = app();
        let request = Request::builder()
            .method("POST")
            .uri("/movies")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let stringly = json!({ "title": "X", "genre": "Y", "year": "1984" });
        let (status, body) = send(&app, "POST", "/movies", Some(stringly)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.unwrap()["message"].is_string());

        let (_, body) = send(&app, "GET", "/movies", None).await;
        assert_eq!(body, Some(json!([])));
    }

    #[tokio::test]
    async fn non_object_bodies_are_400() {
        let app = app();
        for body in [json!(["Dune", "Sci-Fi", 1984]), json!("Dune"), json!(1984), json!(null)] {
            let (status, resp) = send(&app, "POST", "/movies", Some(body.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "POST {body}");
            assert!(resp.unwrap()["message"].is_string());
        }
        let (_, body) = send(&app, "GET", "/movies", None).await;
        assert_eq!(body, Some(json!([])));

        send(&app, "POST", "/movies", Some(dune())).await;
        let positional = json!(["Heat", "Crime", 1995]);
        let (status, _) = send(&app, "PUT", "/movies/1", Some(positional)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (_, body) = send(&app, "GET", "/movies/1", None).await;
        assert_eq!(body.unwrap()["title"], "Dune");
    }

    #[tokio::test]
    async fn leading_zero_id_is_404() {
        let app = app();
        send(&app, "POST", "/movies", Some(dune())).await;
        let (status, body) = send(&app, "GET", "/movies/01", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found());
    }

    #[tokio::test]
    async fn update_is_partial_and_idempotent() {
        let app = app();
        send(&app, "POST", "/movies", Some(dune())).await;

        let patch = json!({ "title": "Dune (1984)", "genre": "Space Opera" });
        let (status, first) = send(&app, "PUT", "/movies/1", Some(patch.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            first,
            Some(json!({ "id": 1, "title": "Dune (1984)", "genre": "Space Opera", "year": 1984 }))
        );

        let (status, second) = send(&app, "PUT", "/movies/1", Some(patch)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn by_id_operations_on_missing_ids_are_404() {
        let app = app();
        let cases = [
            ("GET", None),
            ("PUT", Some(json!({ "title": "X" }))),
            ("DELETE", None),
        ];
        for (method, body) in cases {
            for uri in ["/movies/1", "/movies/abc"] {
                let (status, resp) = send(&app, method, uri, body.clone()).await;
                assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
                assert_eq!(resp, not_found());
            }
        }
    }

    #[tokio::test]
    async fn second_delete_is_404() {
        let app = app();
        send(&app, "POST", "/movies", Some(dune())).await;
        let (status, _) = send(&app, "DELETE", "/movies/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, body) = send(&app, "DELETE", "/movies/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found());
    }
}
