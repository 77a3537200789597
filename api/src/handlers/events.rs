//! Event handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Event, EventId, EventUpdate, NewEvent};
use crate::error::AppError;
use crate::handlers::fights::FightResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            name: event.name,
            location: event.location,
            date: event.date,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = state.event_service.list().await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<NewEvent>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let event = state.event_service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

/// GET /events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventResponse>, AppError> {
    let event = state.event_service.get(&EventId(id)).await?;
    Ok(Json(event.into()))
}

/// PATCH /events/:id
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EventUpdate>,
) -> Result<Json<EventResponse>, AppError> {
    let event = state.event_service.update(&EventId(id), &request).await?;
    Ok(Json(event.into()))
}

/// DELETE /events/:id
///
/// Removes the event's fights as well.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.event_service.delete(&EventId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /events/:id/fights
pub async fn list_event_fights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<FightResponse>>, AppError> {
    let fights = state.fight_service.list_for_event(&EventId(id)).await?;
    Ok(Json(fights.into_iter().map(Into::into).collect()))
}
