//! PostgreSQL adapter for RosterProvider and RosterRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{
    Fighter, FighterId, NewFighter, NewWeightClass, WeightClass, WeightClassId,
};
use crate::domain::ports::{RosterProvider, RosterRepository};
use crate::entity::{fighters, weight_classes};
use crate::error::DomainError;

/// PostgreSQL implementation of RosterProvider
pub struct PostgresRosterRepository {
    db: DatabaseConnection,
}

impl PostgresRosterRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RosterProvider for PostgresRosterRepository {
    async fn find_weight_class(
        &self,
        id: &WeightClassId,
    ) -> Result<Option<WeightClass>, DomainError> {
        let result = weight_classes::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_weight_classes(&self) -> Result<Vec<WeightClass>, DomainError> {
        let results = weight_classes::Entity::find()
            .order_by_asc(weight_classes::Column::MinWeightKg)
            .order_by_asc(weight_classes::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn list_fighters_in_weight_class(
        &self,
        id: &WeightClassId,
    ) -> Result<Vec<Fighter>, DomainError> {
        let results = fighters::Entity::find()
            .filter(fighters::Column::WeightClassId.eq(id.0))
            .order_by_asc(fighters::Column::CreatedAt)
            .order_by_asc(fighters::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_fighter(&self, id: &FighterId) -> Result<Option<Fighter>, DomainError> {
        let result = fighters::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

#[async_trait]
impl RosterRepository for PostgresRosterRepository {
    async fn find_weight_class_by_name(
        &self,
        name: &str,
    ) -> Result<Option<WeightClass>, DomainError> {
        let result = weight_classes::Entity::find()
            .filter(weight_classes::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create_weight_class(
        &self,
        weight_class: &NewWeightClass,
    ) -> Result<WeightClass, DomainError> {
        let model = weight_classes::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(weight_class.name.clone()),
            min_weight_kg: Set(weight_class.min_weight_kg),
            max_weight_kg: Set(weight_class.max_weight_kg),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_weight_class(
        &self,
        weight_class: &WeightClass,
    ) -> Result<WeightClass, DomainError> {
        let result = weight_classes::ActiveModel {
            id: Set(weight_class.id.0),
            name: Set(weight_class.name.clone()),
            min_weight_kg: Set(weight_class.min_weight_kg),
            max_weight_kg: Set(weight_class.max_weight_kg),
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Weight class not found: {}", weight_class.id))
            }
            other => DomainError::Database(other.to_string()),
        })?;

        Ok(result.into())
    }

    async fn delete_weight_class(&self, id: &WeightClassId) -> Result<bool, DomainError> {
        let result = weight_classes::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn list_fighters(&self) -> Result<Vec<Fighter>, DomainError> {
        let results = fighters::Entity::find()
            .order_by_asc(fighters::Column::LastName)
            .order_by_asc(fighters::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create_fighter(&self, fighter: &NewFighter) -> Result<Fighter, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = fighters::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(fighter.first_name.clone()),
            last_name: Set(fighter.last_name.clone()),
            nickname: Set(fighter.nickname.clone()),
            birthdate: Set(fighter.birthdate),
            nationality: Set(fighter.nationality.clone()),
            height_cm: Set(fighter.height_cm),
            weight_kg: Set(fighter.weight_kg),
            reach_cm: Set(fighter.reach_cm),
            stance: Set(fighter.stance.clone()),
            gym: Set(fighter.gym.clone()),
            weight_class_id: Set(fighter.weight_class_id.map(|c| c.0)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_fighter(&self, fighter: &Fighter) -> Result<Fighter, DomainError> {
        let now = Utc::now().fixed_offset();

        let result = fighters::ActiveModel {
            id: Set(fighter.id.0),
            first_name: Set(fighter.first_name.clone()),
            last_name: Set(fighter.last_name.clone()),
            nickname: Set(fighter.nickname.clone()),
            birthdate: Set(fighter.birthdate),
            nationality: Set(fighter.nationality.clone()),
            height_cm: Set(fighter.height_cm),
            weight_kg: Set(fighter.weight_kg),
            reach_cm: Set(fighter.reach_cm),
            stance: Set(fighter.stance.clone()),
            gym: Set(fighter.gym.clone()),
            weight_class_id: Set(fighter.weight_class_id.map(|c| c.0)),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Fighter not found: {}", fighter.id))
            }
            other => DomainError::Database(other.to_string()),
        })?;

        Ok(result.into())
    }

    async fn delete_fighter(&self, id: &FighterId) -> Result<bool, DomainError> {
        let result = fighters::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

impl From<weight_classes::Model> for WeightClass {
    fn from(model: weight_classes::Model) -> Self {
        WeightClass {
            id: WeightClassId(model.id),
            name: model.name,
            min_weight_kg: model.min_weight_kg,
            max_weight_kg: model.max_weight_kg,
        }
    }
}

impl From<fighters::Model> for Fighter {
    fn from(model: fighters::Model) -> Self {
        Fighter {
            id: FighterId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            nickname: model.nickname,
            birthdate: model.birthdate,
            nationality: model.nationality,
            height_cm: model.height_cm,
            weight_kg: model.weight_kg,
            reach_cm: model.reach_cm,
            stance: model.stance,
            gym: model.gym,
            weight_class_id: model.weight_class_id.map(WeightClassId),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
