//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::{events, health, views};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart Calendar API",
        version = "0.3.0",
        description = "Calendar scheduling REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Events
        events::list_categories,
        events::events_for_day,
        events::events_for_month,
        events::get_event,
        events::create_event,
        events::update_event,
        events::delete_event,
        // Views
        views::add_event_state,
        views::edit_event_state,
        views::delete_event_state,
    ),
    components(
        schemas(
            // Events
            crate::models::event::Event,
            crate::models::event::CreateEvent,
            crate::models::event::UpdateEvent,
            crate::models::category::Category,
            events::DeleteEventResponse,
            // Views
            crate::presentation::events::AddEventState,
            crate::presentation::events::EditEventState,
            crate::presentation::events::DeleteEventState,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::FailureKind,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Event scheduling"),
        (name = "views", description = "Presented outcome of each event flow")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
