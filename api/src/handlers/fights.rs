//! Fight handlers
//!
//! Endpoints for recording and amending fights. Ranking updates happen in the
//! background, so responses never wait on a recalculation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Fight, FightId, FightUpdate, NewFight, Resolution};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct FightResponse {
    pub id: String,
    pub event_id: Option<String>,
    pub fighter_red_id: String,
    pub fighter_blue_id: String,
    pub winner_id: Option<String>,
    pub is_draw: bool,
    /// "red", "blue", "draw", "pending" or "invalid"
    pub outcome: String,
    pub method: Option<String>,
    pub round: Option<i32>,
    pub time: Option<String>,
    pub result_details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Fight> for FightResponse {
    fn from(fight: Fight) -> Self {
        let outcome = match fight.resolution() {
            Ok(Some(Resolution::Win(corner))) => corner.to_string(),
            Ok(Some(Resolution::Draw)) => "draw".to_string(),
            Ok(None) => "pending".to_string(),
            Err(_) => "invalid".to_string(),
        };

        Self {
            id: fight.id.to_string(),
            event_id: fight.event_id.map(|e| e.to_string()),
            fighter_red_id: fight.fighter_red_id.to_string(),
            fighter_blue_id: fight.fighter_blue_id.to_string(),
            winner_id: fight.winner_id.map(|w| w.to_string()),
            is_draw: fight.is_draw,
            outcome,
            method: fight.method,
            round: fight.round,
            time: fight.time,
            result_details: fight.result_details,
            created_at: fight.created_at,
            updated_at: fight.updated_at,
        }
    }
}

/// POST /fights
pub async fn create_fight(
    State(state): State<AppState>,
    Json(request): Json<NewFight>,
) -> Result<(StatusCode, Json<FightResponse>), AppError> {
    let fight = state.fight_service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(fight.into())))
}

/// GET /fights/:id
pub async fn get_fight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FightResponse>, AppError> {
    let fight = state.fight_service.get(&FightId(id)).await?;
    Ok(Json(fight.into()))
}

/// PATCH /fights/:id
pub async fn update_fight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FightUpdate>,
) -> Result<Json<FightResponse>, AppError> {
    let fight = state.fight_service.update(&FightId(id), &request).await?;
    Ok(Json(fight.into()))
}

/// DELETE /fights/:id
pub async fn delete_fight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.fight_service.delete(&FightId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
