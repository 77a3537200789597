//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Read ports return fully materialized value objects; the ranking engine
//! never follows relations lazily while aggregating.

use async_trait::async_trait;

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Event, EventId, Fight, FightId, Fighter, FighterId, NewEvent, NewFight, NewFighter,
    NewWeightClass, RankingRecord, Standing, WeightClass, WeightClassId,
};
use crate::error::DomainError;

/// Read-only source of fight records
#[async_trait]
pub trait FightLedger: Send + Sync {
    /// List every resolved fight (winner or draw) in which at least one of the
    /// given fighters took part, ordered by creation time
    async fn list_resolved_fights_involving(
        &self,
        fighter_ids: &[FighterId],
    ) -> Result<Vec<Fight>, DomainError>;
}

/// Read-only source of weight classes and roster membership
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// Find a weight class by ID
    async fn find_weight_class(
        &self,
        id: &WeightClassId,
    ) -> Result<Option<WeightClass>, DomainError>;

    /// List all weight classes, lightest first
    async fn list_weight_classes(&self) -> Result<Vec<WeightClass>, DomainError>;

    /// List the fighters currently enrolled in a weight class
    async fn list_fighters_in_weight_class(
        &self,
        id: &WeightClassId,
    ) -> Result<Vec<Fighter>, DomainError>;

    /// Find a fighter by ID
    async fn find_fighter(&self, id: &FighterId) -> Result<Option<Fighter>, DomainError>;
}

/// Persisted rankings, one snapshot per weight class
#[async_trait]
pub trait RankingRepository: Send + Sync {
    /// Replace the ranking snapshot of a weight class as one atomic unit.
    ///
    /// Every standing is upserted keyed by (fighter, weight class) with
    /// `last_updated = now`; rows of fighters absent from `standings` are
    /// removed. Either the whole batch commits or nothing does.
    async fn replace_weight_class_rankings(
        &self,
        weight_class_id: &WeightClassId,
        standings: &[Standing],
        now: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// List persisted rankings for a weight class ordered by rank ascending
    async fn list_by_weight_class(
        &self,
        weight_class_id: &WeightClassId,
    ) -> Result<Vec<RankingRecord>, DomainError>;
}

/// Write access to fight records
#[async_trait]
pub trait FightRepository: Send + Sync {
    /// Find a fight by ID
    async fn find_by_id(&self, id: &FightId) -> Result<Option<Fight>, DomainError>;

    /// Record a new fight
    async fn create(&self, fight: &NewFight) -> Result<Fight, DomainError>;

    /// Persist a modified fight as given. `updated_at` is written as-is;
    /// callers decide whether the edit counts as an update of the outcome.
    async fn update(&self, fight: &Fight) -> Result<Fight, DomainError>;

    /// Delete a fight. Returns false if it did not exist.
    async fn delete(&self, id: &FightId) -> Result<bool, DomainError>;

    /// List the fights on an event's card, ordered by creation time
    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Fight>, DomainError>;

    /// Count fights (resolved or not) in which a fighter took part
    async fn count_by_fighter(&self, fighter_id: &FighterId) -> Result<u64, DomainError>;
}

/// Write access to weight classes and fighters
#[async_trait]
pub trait RosterRepository: RosterProvider {
    async fn find_weight_class_by_name(
        &self,
        name: &str,
    ) -> Result<Option<WeightClass>, DomainError>;

    async fn create_weight_class(
        &self,
        weight_class: &NewWeightClass,
    ) -> Result<WeightClass, DomainError>;

    async fn update_weight_class(
        &self,
        weight_class: &WeightClass,
    ) -> Result<WeightClass, DomainError>;

    /// Delete a weight class. Returns false if it did not exist.
    async fn delete_weight_class(&self, id: &WeightClassId) -> Result<bool, DomainError>;

    /// List every fighter, enrolled or not, ordered by last name
    async fn list_fighters(&self) -> Result<Vec<Fighter>, DomainError>;

    async fn create_fighter(&self, fighter: &NewFighter) -> Result<Fighter, DomainError>;

    /// Persist a modified fighter, stamping `updated_at`
    async fn update_fighter(&self, fighter: &Fighter) -> Result<Fighter, DomainError>;

    /// Delete a fighter. Returns false if it did not exist.
    async fn delete_fighter(&self, id: &FighterId) -> Result<bool, DomainError>;
}

/// Event persistence
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// List all events, soonest first
    async fn list(&self) -> Result<Vec<Event>, DomainError>;

    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError>;

    /// Persist a modified event, stamping `updated_at`
    async fn update(&self, event: &Event) -> Result<Event, DomainError>;

    /// Delete an event. Returns false if it did not exist.
    async fn delete(&self, id: &EventId) -> Result<bool, DomainError>;
}
