//! Events API endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::extract::{self, Path, Query};
use crate::{
    error::AppResult,
    models::{
        category::Category,
        event::{CreateEvent, DayQuery, Event, MonthQuery, UpdateEvent},
    },
    AppState,
};

/// Delete confirmation
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeleteEventResponse {
    pub message: String,
}

/// List configured categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "events",
    responses(
        (status = 200, description = "Configured categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.calendar.events().categories().categories().to_vec())
}

/// Events starting on a given day
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    params(DayQuery),
    responses(
        (status = 200, description = "Events of the day, ordered by start", body = Vec<Event>)
    )
)]
pub async fn events_for_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> AppResult<Json<Vec<Event>>> {
    let events = state.calendar.events_for_day(query.date).await?;
    Ok(Json(events))
}

/// Events starting in a given month
#[utoipa::path(
    get,
    path = "/events/month",
    tag = "events",
    params(MonthQuery),
    responses(
        (status = 200, description = "Events of the month, ordered by start", body = Vec<Event>),
        (status = 400, description = "Invalid month", body = crate::error::ErrorResponse)
    )
)]
pub async fn events_for_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Vec<Event>>> {
    let events = state.calendar.events_for_month(query.year, query.month).await?;
    Ok(Json(events))
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "events",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event details", body = Event),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Event>> {
    let event = state.calendar.get_event(id).await?;
    Ok(Json(event))
}

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Location already booked", body = crate::error::ErrorResponse),
        (status = 422, description = "End before start", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    extract::Json(data): extract::Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = state.calendar.add_event(data).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Update an event (missing or blank fields keep their value)
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "events",
    params(("id" = Uuid, Path, description = "Event ID")),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse),
        (status = 422, description = "End before start", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    extract::Json(data): extract::Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let event = state.calendar.edit_event(id, data).await?;
    Ok(Json(event))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "events",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted", body = DeleteEventResponse),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteEventResponse>> {
    let message = state.calendar.delete_event(id).await?;
    Ok(Json(DeleteEventResponse { message }))
}
