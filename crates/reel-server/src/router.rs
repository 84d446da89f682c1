use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::dispatch::MovieService;
use crate::endpoint::endpoints;
use crate::handler;

/// Build the axum router with all reel endpoints.
pub fn build_router(service: Arc<MovieService>) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(
            endpoints::MOVIES,
            get(handler::list_movies).post(handler::create_movie),
        )
        .route(
            endpoints::MOVIE,
            get(handler::get_movie)
                .put(handler::update_movie)
                .delete(handler::delete_movie),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
