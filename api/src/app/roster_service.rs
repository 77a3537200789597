//! Roster service
//!
//! Maintains weight classes and fighters. A fighter changing weight class
//! leaves one roster and joins another, so both classes are re-ranked.

use std::sync::Arc;

use crate::app::ranking_service::RankingRecalculator;
use crate::app::recalc_scheduler::RecalcScheduler;
use crate::domain::entities::{
    Fighter, FighterId, FighterUpdate, NewFighter, NewWeightClass, WeightClass, WeightClassId,
    WeightClassUpdate,
};
use crate::domain::ports::{FightRepository, RosterRepository};
use crate::error::{AppError, DomainError};

pub struct RosterService<RR, FR, R>
where
    RR: RosterRepository,
    FR: FightRepository,
    R: RankingRecalculator,
{
    roster: Arc<RR>,
    fights: Arc<FR>,
    scheduler: Arc<RecalcScheduler<R>>,
}

impl<RR, FR, R> RosterService<RR, FR, R>
where
    RR: RosterRepository,
    FR: FightRepository,
    R: RankingRecalculator,
{
    pub fn new(roster: Arc<RR>, fights: Arc<FR>, scheduler: Arc<RecalcScheduler<R>>) -> Self {
        Self {
            roster,
            fights,
            scheduler,
        }
    }

    // ------------------------------------------------------------------
    // Weight classes
    // ------------------------------------------------------------------

    pub async fn list_weight_classes(&self) -> Result<Vec<WeightClass>, AppError> {
        Ok(self.roster.list_weight_classes().await?)
    }

    pub async fn get_weight_class(&self, id: &WeightClassId) -> Result<WeightClass, AppError> {
        self.roster
            .find_weight_class(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Weight class not found: {}", id)))
    }

    pub async fn create_weight_class(
        &self,
        new_class: &NewWeightClass,
    ) -> Result<WeightClass, AppError> {
        validate_weight_class(
            &new_class.name,
            new_class.min_weight_kg,
            new_class.max_weight_kg,
        )?;
        self.require_unique_name(&new_class.name, None).await?;

        let class = self.roster.create_weight_class(new_class).await?;
        tracing::info!(weight_class_id = %class.id, name = %class.name, "Weight class created");
        Ok(class)
    }

    pub async fn update_weight_class(
        &self,
        id: &WeightClassId,
        update: &WeightClassUpdate,
    ) -> Result<WeightClass, AppError> {
        let current = self.get_weight_class(id).await?;
        let next = update.apply_to(&current);
        validate_weight_class(&next.name, next.min_weight_kg, next.max_weight_kg)?;
        if next.name != current.name {
            self.require_unique_name(&next.name, Some(id)).await?;
        }

        let saved = self.roster.update_weight_class(&next).await?;
        tracing::info!(weight_class_id = %saved.id, "Weight class updated");
        Ok(saved)
    }

    /// Delete an empty weight class. Classes with enrolled fighters are kept.
    pub async fn delete_weight_class(&self, id: &WeightClassId) -> Result<(), AppError> {
        self.get_weight_class(id).await?;

        let enrolled = self.roster.list_fighters_in_weight_class(id).await?;
        if !enrolled.is_empty() {
            return Err(DomainError::Validation(format!(
                "Weight class {} still has {} fighter(s) enrolled",
                id,
                enrolled.len()
            ))
            .into());
        }

        if !self.roster.delete_weight_class(id).await? {
            return Err(AppError::NotFound(format!("Weight class not found: {}", id)));
        }
        tracing::info!(weight_class_id = %id, "Weight class deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Fighters
    // ------------------------------------------------------------------

    pub async fn list_fighters(&self) -> Result<Vec<Fighter>, AppError> {
        Ok(self.roster.list_fighters().await?)
    }

    /// Fighters enrolled in a weight class, in enrollment order
    pub async fn list_fighters_in_weight_class(
        &self,
        id: &WeightClassId,
    ) -> Result<Vec<Fighter>, AppError> {
        self.get_weight_class(id).await?;
        Ok(self.roster.list_fighters_in_weight_class(id).await?)
    }

    pub async fn get_fighter(&self, id: &FighterId) -> Result<Fighter, AppError> {
        self.roster
            .find_fighter(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Fighter not found: {}", id)))
    }

    /// Add a fighter. A fighter with no fights is not ranked, so no pass runs.
    pub async fn create_fighter(&self, new_fighter: &NewFighter) -> Result<Fighter, AppError> {
        validate_names(&new_fighter.first_name, &new_fighter.last_name)?;
        self.check_enrollment(new_fighter.weight_class_id, new_fighter.weight_kg)
            .await?;

        let fighter = self.roster.create_fighter(new_fighter).await?;
        tracing::info!(
            fighter_id = %fighter.id,
            weight_class_id = ?fighter.weight_class_id,
            "Fighter created"
        );
        Ok(fighter)
    }

    /// Amend a fighter. Moving to another weight class re-ranks the class
    /// left behind and the class joined.
    pub async fn update_fighter(
        &self,
        id: &FighterId,
        update: &FighterUpdate,
    ) -> Result<Fighter, AppError> {
        let current = self.get_fighter(id).await?;
        let next = update.apply_to(&current);
        validate_names(&next.first_name, &next.last_name)?;
        self.check_enrollment(next.weight_class_id, next.weight_kg)
            .await?;

        let saved = self.roster.update_fighter(&next).await?;

        if current.weight_class_id != saved.weight_class_id {
            tracing::info!(
                fighter_id = %saved.id,
                from = ?current.weight_class_id,
                to = ?saved.weight_class_id,
                "Fighter changed weight class"
            );
            for class in [current.weight_class_id, saved.weight_class_id]
                .into_iter()
                .flatten()
            {
                let outcome = self.scheduler.schedule(class).await;
                tracing::debug!(
                    weight_class_id = %class,
                    outcome = ?outcome,
                    "Ranking update scheduled"
                );
            }
        } else {
            tracing::debug!(fighter_id = %saved.id, "Fighter updated");
        }

        Ok(saved)
    }

    /// Delete a fighter with no recorded fights
    pub async fn delete_fighter(&self, id: &FighterId) -> Result<(), AppError> {
        self.get_fighter(id).await?;

        let fights = self.fights.count_by_fighter(id).await?;
        if fights > 0 {
            return Err(DomainError::Validation(format!(
                "Fighter {} has {} recorded fight(s) and cannot be deleted",
                id, fights
            ))
            .into());
        }

        if !self.roster.delete_fighter(id).await? {
            return Err(AppError::NotFound(format!("Fighter not found: {}", id)));
        }
        tracing::info!(fighter_id = %id, "Fighter deleted");
        Ok(())
    }

    async fn require_unique_name(
        &self,
        name: &str,
        except: Option<&WeightClassId>,
    ) -> Result<(), AppError> {
        match self.roster.find_weight_class_by_name(name).await? {
            Some(existing) if Some(&existing.id) != except => Err(DomainError::Validation(
                format!("Weight class name already in use: {}", name),
            )
            .into()),
            _ => Ok(()),
        }
    }

    /// The target class must exist and admit the fighter's weight, when known
    async fn check_enrollment(
        &self,
        weight_class_id: Option<WeightClassId>,
        weight_kg: Option<i32>,
    ) -> Result<(), AppError> {
        let Some(class_id) = weight_class_id else {
            return Ok(());
        };
        let class = self.roster.find_weight_class(&class_id).await?.ok_or_else(|| {
            DomainError::NotFound(format!("Weight class not found: {}", class_id))
        })?;

        match weight_kg {
            Some(weight) if !class.admits(weight) => Err(DomainError::Validation(format!(
                "{} kg is outside {} ({}-{} kg)",
                weight, class.name, class.min_weight_kg, class.max_weight_kg
            ))
            .into()),
            _ => Ok(()),
        }
    }
}

fn validate_weight_class(
    name: &str,
    min_weight_kg: i32,
    max_weight_kg: i32,
) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(
            "Weight class name must not be empty".to_string(),
        ));
    }
    if min_weight_kg <= 0 || min_weight_kg > max_weight_kg {
        return Err(DomainError::Validation(format!(
            "Invalid weight range: {}-{} kg",
            min_weight_kg, max_weight_kg
        )));
    }
    Ok(())
}

fn validate_names(first_name: &str, last_name: &str) -> Result<(), DomainError> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(DomainError::Validation(
            "Fighter first and last name must not be empty".to_string(),
        ));
    }
    Ok(())
}
