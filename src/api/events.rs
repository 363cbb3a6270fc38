//! Event API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::event::{CreateEvent, Event, EventTypeEntry},
};

use super::AppJson;

/// Record a take or return
#[utoipa::path(
    post,
    path = "/event/create",
    tag = "events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Unknown reader or book, unsupported type, bad timestamp", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_event(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = state.services.events.create(&data).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// List the supported event types
#[utoipa::path(
    get,
    path = "/event/",
    tag = "events",
    responses(
        (status = 200, description = "Event type registry", body = Vec<EventTypeEntry>)
    )
)]
pub async fn list_event_types(State(state): State<crate::AppState>) -> Json<Vec<EventTypeEntry>> {
    Json(state.services.events.list_types())
}
