//! Event service
//!
//! Fight cards. Deleting an event deletes every fight on its card, so each
//! weight class those fights were ranked in is recalculated afterwards.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::app::fight_service::weight_class_of;
use crate::app::ranking_service::RankingRecalculator;
use crate::app::recalc_scheduler::RecalcScheduler;
use crate::domain::entities::{Event, EventId, EventUpdate, NewEvent};
use crate::domain::ports::{EventRepository, FightRepository, RosterProvider};
use crate::error::{AppError, DomainError};

pub struct EventService<ER, FR, RP, R>
where
    ER: EventRepository,
    FR: FightRepository,
    RP: RosterProvider,
    R: RankingRecalculator,
{
    events: Arc<ER>,
    fights: Arc<FR>,
    roster: Arc<RP>,
    scheduler: Arc<RecalcScheduler<R>>,
}

impl<ER, FR, RP, R> EventService<ER, FR, RP, R>
where
    ER: EventRepository,
    FR: FightRepository,
    RP: RosterProvider,
    R: RankingRecalculator,
{
    pub fn new(
        events: Arc<ER>,
        fights: Arc<FR>,
        roster: Arc<RP>,
        scheduler: Arc<RecalcScheduler<R>>,
    ) -> Self {
        Self {
            events,
            fights,
            roster,
            scheduler,
        }
    }

    pub async fn list(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.events.list().await?)
    }

    pub async fn get(&self, id: &EventId) -> Result<Event, AppError> {
        self.events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event not found: {}", id)))
    }

    pub async fn create(&self, new_event: &NewEvent) -> Result<Event, AppError> {
        validate_name(&new_event.name)?;

        let event = self.events.create(new_event).await?;
        tracing::info!(event_id = %event.id, name = %event.name, "Event created");
        Ok(event)
    }

    pub async fn update(&self, id: &EventId, update: &EventUpdate) -> Result<Event, AppError> {
        let current = self.get(id).await?;
        let next = update.apply_to(&current);
        validate_name(&next.name)?;

        let saved = self.events.update(&next).await?;
        tracing::info!(event_id = %saved.id, "Event updated");
        Ok(saved)
    }

    /// Delete an event together with its card and re-rank the affected classes
    pub async fn delete(&self, id: &EventId) -> Result<(), AppError> {
        self.get(id).await?;

        let card = self.fights.list_by_event(id).await?;
        let mut affected = BTreeSet::new();
        for fight in &card {
            match weight_class_of(self.roster.as_ref(), fight).await {
                Ok(Some(class)) => {
                    affected.insert(class);
                }
                Ok(None) => {}
                Err(e) => tracing::error!(
                    fight_id = %fight.id,
                    error = %e,
                    "Failed to resolve weight class for ranking update"
                ),
            }
        }

        for fight in &card {
            self.fights.delete(&fight.id).await?;
        }
        if !self.events.delete(id).await? {
            return Err(AppError::NotFound(format!("Event not found: {}", id)));
        }

        tracing::info!(
            event_id = %id,
            fights_removed = card.len(),
            classes_affected = affected.len(),
            "Event deleted"
        );

        for class in affected {
            self.scheduler.schedule(class).await;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(
            "Event name must not be empty".to_string(),
        ));
    }
    Ok(())
}
