//! View state endpoints (last presented outcome of each event flow)

use axum::{extract::State, Json};

use crate::{
    presentation::events::{AddEventState, DeleteEventState, EditEventState},
    AppState,
};

/// Add-event view state
#[utoipa::path(
    get,
    path = "/views/add-event",
    tag = "views",
    responses(
        (status = 200, description = "Outcome of the last add", body = AddEventState)
    )
)]
pub async fn add_event_state(State(state): State<AppState>) -> Json<AddEventState> {
    Json(state.calendar.views().add_event.state())
}

/// Edit-event view state
#[utoipa::path(
    get,
    path = "/views/edit-event",
    tag = "views",
    responses(
        (status = 200, description = "Outcome of the last edit", body = EditEventState)
    )
)]
pub async fn edit_event_state(State(state): State<AppState>) -> Json<EditEventState> {
    Json(state.calendar.views().edit_event.state())
}

/// Delete-event view state
#[utoipa::path(
    get,
    path = "/views/delete-event",
    tag = "views",
    responses(
        (status = 200, description = "Outcome of the last delete", body = DeleteEventState)
    )
)]
pub async fn delete_event_state(State(state): State<AppState>) -> Json<DeleteEventState> {
    Json(state.calendar.views().delete_event.state())
}
