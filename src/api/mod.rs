//! API handlers for Smart Calendar REST endpoints

pub mod events;
pub mod extract;
pub mod health;
pub mod openapi;
pub mod views;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Categories
        .route("/categories", get(events::list_categories))
        // Events
        .route("/events", get(events::events_for_day).post(events::create_event))
        .route("/events/month", get(events::events_for_month))
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        // View states
        .route("/views/add-event", get(views::add_event_state))
        .route("/views/edit-event", get(views::edit_event_state))
        .route("/views/delete-event", get(views::delete_event_state))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
