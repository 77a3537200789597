//! Ranking handlers
//!
//! Endpoints for reading and recomputing weight class rankings.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::app::RecalculationSummary;
use crate::domain::entities::{Fighter, FighterId, RankingRecord, WeightClassId};
use crate::error::AppError;
use crate::AppState;

/// One row of a weight class ranking
#[derive(Debug, Serialize)]
pub struct RankingEntryResponse {
    pub rank: i32,
    pub fighter_id: String,
    /// Missing when the fighter has left the class since the last pass
    pub fighter_name: Option<String>,
    pub points: i32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub weight_class_id: String,
    pub weight_class: String,
    pub rankings: Vec<RankingEntryResponse>,
}

fn to_entries(
    records: Vec<RankingRecord>,
    fighters: &HashMap<FighterId, Fighter>,
) -> Vec<RankingEntryResponse> {
    records
        .into_iter()
        .map(|r| RankingEntryResponse {
            rank: r.rank,
            fighter_id: r.fighter_id.to_string(),
            fighter_name: fighters.get(&r.fighter_id).map(Fighter::display_name),
            points: r.points,
            last_updated: r.last_updated,
        })
        .collect()
}

/// GET /weight-classes/:id/rankings
pub async fn get_rankings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RankingsResponse>, AppError> {
    let weight_class_id = WeightClassId(id);
    let weight_class = state
        .roster_service
        .get_weight_class(&weight_class_id)
        .await?;

    let records = state.ranking_service.list_rankings(&weight_class_id).await?;
    let fighters: HashMap<FighterId, Fighter> = state
        .roster_service
        .list_fighters_in_weight_class(&weight_class_id)
        .await?
        .into_iter()
        .map(|f| (f.id, f))
        .collect();

    Ok(Json(RankingsResponse {
        weight_class_id: weight_class.id.to_string(),
        weight_class: weight_class.name,
        rankings: to_entries(records, &fighters),
    }))
}

/// POST /weight-classes/:id/rankings/recalculate
///
/// Run a pass synchronously and report what it did.
pub async fn recalculate_rankings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecalculationSummary>, AppError> {
    let summary = state
        .ranking_service
        .recalculate_rankings(&WeightClassId(id))
        .await?;
    Ok(Json(summary))
}
