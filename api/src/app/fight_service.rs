//! Fight service
//!
//! Write path for fight records. Every write that can change rankings schedules
//! a background recalculation for the affected weight class; the write itself
//! never waits for it and never fails because of it.

use std::sync::Arc;

use chrono::Utc;

use crate::app::ranking_service::RankingRecalculator;
use crate::app::recalc_scheduler::RecalcScheduler;
use crate::domain::entities::{
    outcome_changed, EventId, Fight, FightId, FightUpdate, FighterId, NewFight, WeightClassId,
};
use crate::domain::ports::{EventRepository, FightRepository, RosterProvider};
use crate::error::{AppError, DomainError};

/// Service for recording and amending fights
pub struct FightService<FR, RP, ER, R>
where
    FR: FightRepository,
    RP: RosterProvider,
    ER: EventRepository,
    R: RankingRecalculator,
{
    fights: Arc<FR>,
    roster: Arc<RP>,
    events: Arc<ER>,
    scheduler: Arc<RecalcScheduler<R>>,
}

impl<FR, RP, ER, R> FightService<FR, RP, ER, R>
where
    FR: FightRepository,
    RP: RosterProvider,
    ER: EventRepository,
    R: RankingRecalculator,
{
    pub fn new(
        fights: Arc<FR>,
        roster: Arc<RP>,
        events: Arc<ER>,
        scheduler: Arc<RecalcScheduler<R>>,
    ) -> Self {
        Self {
            fights,
            roster,
            events,
            scheduler,
        }
    }

    pub async fn get(&self, id: &FightId) -> Result<Fight, AppError> {
        self.fights
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Fight not found: {}", id)))
    }

    /// Record a new fight and schedule a ranking update
    pub async fn create(&self, new_fight: &NewFight) -> Result<Fight, AppError> {
        validate_outcome(
            new_fight.fighter_red_id,
            new_fight.fighter_blue_id,
            new_fight.winner_id,
            new_fight.is_draw,
        )?;
        self.require_fighter(&new_fight.fighter_red_id).await?;
        self.require_fighter(&new_fight.fighter_blue_id).await?;
        if let Some(event_id) = &new_fight.event_id {
            self.require_event(event_id).await?;
        }

        let fight = self.fights.create(new_fight).await?;

        tracing::info!(
            fight_id = %fight.id,
            red = %fight.fighter_red_id,
            blue = %fight.fighter_blue_id,
            resolved = fight.is_resolved(),
            "Fight recorded"
        );

        self.trigger_ranking_update(&fight).await;
        Ok(fight)
    }

    /// Amend a fight. Only edits to a field that feeds into scoring move
    /// `updated_at` and schedule a recalculation; `updated_at` is the fight's
    /// recency timestamp, so any other edit must leave it alone.
    pub async fn update(&self, id: &FightId, update: &FightUpdate) -> Result<Fight, AppError> {
        let current = self.get(id).await?;
        let mut next = update.apply_to(&current);
        validate_outcome(
            next.fighter_red_id,
            next.fighter_blue_id,
            next.winner_id,
            next.is_draw,
        )?;
        if let Some(event_id) = &update.event_id {
            self.require_event(event_id).await?;
        }

        let changed = outcome_changed(&current, &next);
        if changed {
            next.updated_at = Some(Utc::now());
        }

        let saved = self.fights.update(&next).await?;

        if changed {
            tracing::info!(fight_id = %saved.id, "Fight outcome changed");
            self.trigger_ranking_update(&saved).await;
        } else {
            tracing::debug!(fight_id = %saved.id, "Fight updated without outcome change");
        }

        Ok(saved)
    }

    /// Delete a fight and schedule a ranking update for its weight class
    pub async fn delete(&self, id: &FightId) -> Result<(), AppError> {
        let fight = self.get(id).await?;

        if !self.fights.delete(id).await? {
            return Err(AppError::NotFound(format!("Fight not found: {}", id)));
        }

        tracing::info!(fight_id = %id, "Fight deleted");
        self.trigger_ranking_update(&fight).await;
        Ok(())
    }

    /// The fights on an event's card
    pub async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Fight>, AppError> {
        self.require_event(event_id).await?;
        Ok(self.fights.list_by_event(event_id).await?)
    }

    async fn require_fighter(&self, id: &FighterId) -> Result<(), AppError> {
        match self.roster.find_fighter(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::Domain(DomainError::NotFound(format!(
                "Fighter not found: {}",
                id
            )))),
        }
    }

    async fn require_event(&self, id: &EventId) -> Result<(), AppError> {
        match self.events.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::Domain(DomainError::NotFound(format!(
                "Event not found: {}",
                id
            )))),
        }
    }

    /// Resolve the fight's weight class through either participant and
    /// schedule a pass. Failures are logged, never returned.
    async fn trigger_ranking_update(&self, fight: &Fight) {
        match weight_class_of(self.roster.as_ref(), fight).await {
            Ok(Some(weight_class_id)) => {
                let outcome = self.scheduler.schedule(weight_class_id).await;
                tracing::debug!(
                    fight_id = %fight.id,
                    weight_class_id = %weight_class_id,
                    outcome = ?outcome,
                    "Ranking update scheduled"
                );
            }
            Ok(None) => {
                tracing::warn!(
                    fight_id = %fight.id,
                    "No weight class for either fighter, rankings not updated"
                );
            }
            Err(e) => {
                tracing::error!(
                    fight_id = %fight.id,
                    error = %e,
                    "Failed to resolve weight class for ranking update"
                );
            }
        }
    }
}

/// Weight class a fight is ranked in: the red corner's, else the blue corner's
pub(crate) async fn weight_class_of<RP>(
    roster: &RP,
    fight: &Fight,
) -> Result<Option<WeightClassId>, DomainError>
where
    RP: RosterProvider + ?Sized,
{
    for fighter_id in [fight.fighter_red_id, fight.fighter_blue_id] {
        if let Some(class) = roster
            .find_fighter(&fighter_id)
            .await?
            .and_then(|f| f.weight_class_id)
        {
            return Ok(Some(class));
        }
    }
    Ok(None)
}

/// Check the outcome fields of a fight for consistency
fn validate_outcome(
    red: FighterId,
    blue: FighterId,
    winner: Option<FighterId>,
    is_draw: bool,
) -> Result<(), DomainError> {
    if red == blue {
        return Err(DomainError::Validation(
            "A fighter cannot fight themselves".to_string(),
        ));
    }
    if let Some(winner) = winner {
        if is_draw {
            return Err(DomainError::Validation(
                "A fight cannot have both a winner and a draw".to_string(),
            ));
        }
        if winner != red && winner != blue {
            return Err(DomainError::Validation(format!(
                "Winner {} did not take part in the fight",
                winner
            )));
        }
    }
    Ok(())
}
