use super::{
    handlers::{geo, health},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Geo
        .route("/api/geo/pincodes", get(geo::get_pincodes))
        .route("/api/geo/pincode/{code}", get(geo::get_pincode))
        .route("/api/geo/reverse", get(geo::reverse_geocode))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
