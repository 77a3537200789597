//! PostgreSQL adapter for RankingRepository
//!
//! A snapshot replacement runs in a single transaction: upsert every standing
//! keyed by (fighter, weight class), then delete rows for fighters that are no
//! longer ranked. A failure anywhere drops the transaction and rolls back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::domain::entities::{FighterId, RankingRecord, Standing, WeightClassId};
use crate::domain::ports::RankingRepository;
use crate::entity::rankings;
use crate::error::DomainError;

/// PostgreSQL implementation of RankingRepository
pub struct PostgresRankingRepository {
    db: DatabaseConnection,
}

impl PostgresRankingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn persistence_failure(e: DbErr) -> DomainError {
    DomainError::PersistenceFailure(e.to_string())
}

#[async_trait]
impl RankingRepository for PostgresRankingRepository {
    async fn replace_weight_class_rankings(
        &self,
        weight_class_id: &WeightClassId,
        standings: &[Standing],
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let now = now.fixed_offset();
        let txn = self.db.begin().await.map_err(persistence_failure)?;

        if !standings.is_empty() {
            let models = standings.iter().map(|s| rankings::ActiveModel {
                fighter_id: Set(s.fighter_id.0),
                weight_class_id: Set(weight_class_id.0),
                points: Set(s.points),
                rank: Set(s.rank),
                last_updated: Set(now),
            });

            rankings::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::columns([
                        rankings::Column::FighterId,
                        rankings::Column::WeightClassId,
                    ])
                    .update_columns([
                        rankings::Column::Points,
                        rankings::Column::Rank,
                        rankings::Column::LastUpdated,
                    ])
                    .to_owned(),
                )
                .exec_without_returning(&txn)
                .await
                .map_err(persistence_failure)?;
        }

        let mut stale = rankings::Entity::delete_many()
            .filter(rankings::Column::WeightClassId.eq(weight_class_id.0));
        if !standings.is_empty() {
            let ranked: Vec<Uuid> = standings.iter().map(|s| s.fighter_id.0).collect();
            stale = stale.filter(rankings::Column::FighterId.is_not_in(ranked));
        }
        let removed = stale.exec(&txn).await.map_err(persistence_failure)?;

        txn.commit().await.map_err(persistence_failure)?;

        tracing::debug!(
            weight_class_id = %weight_class_id,
            upserted = standings.len(),
            removed = removed.rows_affected,
            "Ranking snapshot committed"
        );
        Ok(())
    }

    async fn list_by_weight_class(
        &self,
        weight_class_id: &WeightClassId,
    ) -> Result<Vec<RankingRecord>, DomainError> {
        let results = rankings::Entity::find()
            .filter(rankings::Column::WeightClassId.eq(weight_class_id.0))
            .order_by_asc(rankings::Column::Rank)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

impl From<rankings::Model> for RankingRecord {
    fn from(model: rankings::Model) -> Self {
        RankingRecord {
            fighter_id: FighterId(model.fighter_id),
            weight_class_id: WeightClassId(model.weight_class_id),
            points: model.points,
            rank: model.rank,
            last_updated: model.last_updated.with_timezone(&Utc),
        }
    }
}
