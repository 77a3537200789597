//! PostgreSQL adapter for FightRepository and FightLedger

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{EventId, Fight, FightId, FighterId, NewFight};
use crate::domain::ports::{FightLedger, FightRepository};
use crate::entity::fights;
use crate::error::DomainError;

/// PostgreSQL implementation of FightRepository
pub struct PostgresFightRepository {
    db: DatabaseConnection,
}

impl PostgresFightRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FightLedger for PostgresFightRepository {
    async fn list_resolved_fights_involving(
        &self,
        fighter_ids: &[FighterId],
    ) -> Result<Vec<Fight>, DomainError> {
        if fighter_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = fighter_ids.iter().map(|id| id.0).collect();

        let results = fights::Entity::find()
            .filter(
                Condition::any()
                    .add(fights::Column::FighterRedId.is_in(ids.clone()))
                    .add(fights::Column::FighterBlueId.is_in(ids)),
            )
            .filter(
                Condition::any()
                    .add(fights::Column::WinnerId.is_not_null())
                    .add(fights::Column::IsDraw.eq(true)),
            )
            .order_by_asc(fights::Column::CreatedAt)
            .order_by_asc(fights::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

#[async_trait]
impl FightRepository for PostgresFightRepository {
    async fn find_by_id(&self, id: &FightId) -> Result<Option<Fight>, DomainError> {
        let result = fights::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, fight: &NewFight) -> Result<Fight, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = fights::ActiveModel {
            id: Set(id),
            event_id: Set(fight.event_id.map(|e| e.0)),
            fighter_red_id: Set(fight.fighter_red_id.0),
            fighter_blue_id: Set(fight.fighter_blue_id.0),
            winner_id: Set(fight.winner_id.map(|w| w.0)),
            is_draw: Set(fight.is_draw),
            method: Set(fight.method.clone()),
            round: Set(fight.round),
            time: Set(fight.time.clone()),
            result_details: Set(fight.result_details.clone()),
            created_at: Set(now),
            updated_at: Set(None),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, fight: &Fight) -> Result<Fight, DomainError> {
        let result = fights::ActiveModel {
            id: Set(fight.id.0),
            event_id: Set(fight.event_id.map(|e| e.0)),
            winner_id: Set(fight.winner_id.map(|w| w.0)),
            is_draw: Set(fight.is_draw),
            method: Set(fight.method.clone()),
            round: Set(fight.round),
            time: Set(fight.time.clone()),
            result_details: Set(fight.result_details.clone()),
            updated_at: Set(fight.updated_at.map(|t| t.fixed_offset())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Fight not found: {}", fight.id))
            }
            other => DomainError::Database(other.to_string()),
        })?;

        Ok(result.into())
    }

    async fn delete(&self, id: &FightId) -> Result<bool, DomainError> {
        let result = fights::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Fight>, DomainError> {
        let results = fights::Entity::find()
            .filter(fights::Column::EventId.eq(event_id.0))
            .order_by_asc(fights::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count_by_fighter(&self, fighter_id: &FighterId) -> Result<u64, DomainError> {
        fights::Entity::find()
            .filter(
                Condition::any()
                    .add(fights::Column::FighterRedId.eq(fighter_id.0))
                    .add(fights::Column::FighterBlueId.eq(fighter_id.0)),
            )
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Convert SeaORM model to domain entity
impl From<fights::Model> for Fight {
    fn from(model: fights::Model) -> Self {
        Fight {
            id: FightId(model.id),
            event_id: model.event_id.map(EventId),
            fighter_red_id: FighterId(model.fighter_red_id),
            fighter_blue_id: FighterId(model.fighter_blue_id),
            winner_id: model.winner_id.map(FighterId),
            is_draw: model.is_draw,
            method: model.method,
            round: model.round,
            time: model.time,
            result_details: model.result_details,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}
