//! PostgreSQL adapter for EventRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::entities::{Event, EventId, NewEvent};
use crate::domain::ports::EventRepository;
use crate::entity::events;
use crate::error::DomainError;

/// PostgreSQL implementation of EventRepository
pub struct PostgresEventRepository {
    db: DatabaseConnection,
}

impl PostgresEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let result = events::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let results = events::Entity::find()
            .order_by_asc(events::Column::Date)
            .order_by_asc(events::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = events::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(event.name.clone()),
            location: Set(event.location.clone()),
            date: Set(event.date.fixed_offset()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, event: &Event) -> Result<Event, DomainError> {
        let now = Utc::now().fixed_offset();

        let result = events::ActiveModel {
            id: Set(event.id.0),
            name: Set(event.name.clone()),
            location: Set(event.location.clone()),
            date: Set(event.date.fixed_offset()),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Event not found: {}", event.id))
            }
            other => DomainError::Database(other.to_string()),
        })?;

        Ok(result.into())
    }

    async fn delete(&self, id: &EventId) -> Result<bool, DomainError> {
        let result = events::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

impl From<events::Model> for Event {
    fn from(model: events::Model) -> Self {
        Event {
            id: EventId(model.id),
            name: model.name,
            location: model.location,
            date: model.date.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
