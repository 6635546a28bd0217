//! API handlers for the library REST endpoints

pub mod health;
pub mod openapi;
pub mod resources;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    models::{Author, Book, Category, Loan, Student},
    AppState,
};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/", get(health::root))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Resources
        .merge(resources::routes::<Category>())
        .merge(resources::routes::<Author>())
        .merge(resources::routes::<Book>())
        .merge(resources::routes::<Student>())
        .merge(resources::routes::<Loan>())
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
