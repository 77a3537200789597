//! Roster handlers
//!
//! Endpoints for weight classes and fighters.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{
    Fighter, FighterId, FighterUpdate, NewFighter, NewWeightClass, WeightClass, WeightClassId,
    WeightClassUpdate,
};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct WeightClassResponse {
    pub id: String,
    pub name: String,
    pub min_weight_kg: i32,
    pub max_weight_kg: i32,
}

impl From<WeightClass> for WeightClassResponse {
    fn from(class: WeightClass) -> Self {
        Self {
            id: class.id.to_string(),
            name: class.name,
            min_weight_kg: class.min_weight_kg,
            max_weight_kg: class.max_weight_kg,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FighterResponse {
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub reach_cm: Option<i32>,
    pub stance: Option<String>,
    pub gym: Option<String>,
    pub weight_class_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Fighter> for FighterResponse {
    fn from(fighter: Fighter) -> Self {
        Self {
            id: fighter.id.to_string(),
            name: fighter.display_name(),
            first_name: fighter.first_name,
            last_name: fighter.last_name,
            nickname: fighter.nickname,
            birthdate: fighter.birthdate,
            nationality: fighter.nationality,
            height_cm: fighter.height_cm,
            weight_kg: fighter.weight_kg,
            reach_cm: fighter.reach_cm,
            stance: fighter.stance,
            gym: fighter.gym,
            weight_class_id: fighter.weight_class_id.map(|c| c.to_string()),
            created_at: fighter.created_at,
            updated_at: fighter.updated_at,
        }
    }
}

/// GET /weight-classes
pub async fn list_weight_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeightClassResponse>>, AppError> {
    let classes = state.roster_service.list_weight_classes().await?;
    Ok(Json(classes.into_iter().map(Into::into).collect()))
}

/// POST /weight-classes
pub async fn create_weight_class(
    State(state): State<AppState>,
    Json(request): Json<NewWeightClass>,
) -> Result<(StatusCode, Json<WeightClassResponse>), AppError> {
    let class = state.roster_service.create_weight_class(&request).await?;
    Ok((StatusCode::CREATED, Json(class.into())))
}

/// GET /weight-classes/:id
pub async fn get_weight_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WeightClassResponse>, AppError> {
    let class = state
        .roster_service
        .get_weight_class(&WeightClassId(id))
        .await?;
    Ok(Json(class.into()))
}

/// PATCH /weight-classes/:id
pub async fn update_weight_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<WeightClassUpdate>,
) -> Result<Json<WeightClassResponse>, AppError> {
    let class = state
        .roster_service
        .update_weight_class(&WeightClassId(id), &request)
        .await?;
    Ok(Json(class.into()))
}

/// DELETE /weight-classes/:id
pub async fn delete_weight_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .roster_service
        .delete_weight_class(&WeightClassId(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /weight-classes/:id/fighters
pub async fn list_class_fighters(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<FighterResponse>>, AppError> {
    let fighters = state
        .roster_service
        .list_fighters_in_weight_class(&WeightClassId(id))
        .await?;
    Ok(Json(fighters.into_iter().map(Into::into).collect()))
}

/// GET /fighters
pub async fn list_fighters(
    State(state): State<AppState>,
) -> Result<Json<Vec<FighterResponse>>, AppError> {
    let fighters = state.roster_service.list_fighters().await?;
    Ok(Json(fighters.into_iter().map(Into::into).collect()))
}

/// POST /fighters
pub async fn create_fighter(
    State(state): State<AppState>,
    Json(request): Json<NewFighter>,
) -> Result<(StatusCode, Json<FighterResponse>), AppError> {
    let fighter = state.roster_service.create_fighter(&request).await?;
    Ok((StatusCode::CREATED, Json(fighter.into())))
}

/// GET /fighters/:id
pub async fn get_fighter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FighterResponse>, AppError> {
    let fighter = state.roster_service.get_fighter(&FighterId(id)).await?;
    Ok(Json(fighter.into()))
}

/// PATCH /fighters/:id
pub async fn update_fighter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FighterUpdate>,
) -> Result<Json<FighterResponse>, AppError> {
    let fighter = state
        .roster_service
        .update_fighter(&FighterId(id), &request)
        .await?;
    Ok(Json(fighter.into()))
}

/// DELETE /fighters/:id
pub async fn delete_fighter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.roster_service.delete_fighter(&FighterId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
