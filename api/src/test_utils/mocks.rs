//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::{
    Event, EventId, Fight, FightId, Fighter, FighterId, NewEvent, NewFight, NewFighter,
    NewWeightClass, RankingRecord, Standing, WeightClass, WeightClassId,
};
use crate::domain::ports::{
    EventRepository, FightLedger, FightRepository, RankingRepository, RosterProvider,
    RosterRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Roster
// ============================================================================

#[derive(Default)]
pub struct InMemoryRoster {
    weight_classes: Arc<RwLock<Vec<WeightClass>>>,
    /// Kept in enrollment order
    fighters: Arc<RwLock<Vec<Fighter>>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a weight class for testing
    pub fn with_weight_class(self, weight_class: WeightClass) -> Self {
        self.add_weight_class(weight_class);
        self
    }

    pub fn add_weight_class(&self, weight_class: WeightClass) {
        self.weight_classes.write().unwrap().push(weight_class);
    }

    pub fn add_fighter(&self, fighter: Fighter) {
        self.fighters.write().unwrap().push(fighter);
    }
}

#[async_trait]
impl RosterProvider for InMemoryRoster {
    async fn find_weight_class(
        &self,
        id: &WeightClassId,
    ) -> Result<Option<WeightClass>, DomainError> {
        let classes = self.weight_classes.read().unwrap();
        Ok(classes.iter().find(|c| c.id == *id).cloned())
    }

    async fn list_weight_classes(&self) -> Result<Vec<WeightClass>, DomainError> {
        let mut classes = self.weight_classes.read().unwrap().clone();
        classes.sort_by_key(|c| c.min_weight_kg);
        Ok(classes)
    }

    async fn list_fighters_in_weight_class(
        &self,
        id: &WeightClassId,
    ) -> Result<Vec<Fighter>, DomainError> {
        let fighters = self.fighters.read().unwrap();
        Ok(fighters
            .iter()
            .filter(|f| f.weight_class_id == Some(*id))
            .cloned()
            .collect())
    }

    async fn find_fighter(&self, id: &FighterId) -> Result<Option<Fighter>, DomainError> {
        let fighters = self.fighters.read().unwrap();
        Ok(fighters.iter().find(|f| f.id == *id).cloned())
    }
}

#[async_trait]
impl RosterRepository for InMemoryRoster {
    async fn find_weight_class_by_name(
        &self,
        name: &str,
    ) -> Result<Option<WeightClass>, DomainError> {
        let classes = self.weight_classes.read().unwrap();
        Ok(classes.iter().find(|c| c.name == name).cloned())
    }

    async fn create_weight_class(
        &self,
        weight_class: &NewWeightClass,
    ) -> Result<WeightClass, DomainError> {
        let created = WeightClass {
            id: WeightClassId::new(),
            name: weight_class.name.clone(),
            min_weight_kg: weight_class.min_weight_kg,
            max_weight_kg: weight_class.max_weight_kg,
        };
        self.weight_classes.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_weight_class(
        &self,
        weight_class: &WeightClass,
    ) -> Result<WeightClass, DomainError> {
        let mut classes = self.weight_classes.write().unwrap();
        let stored = classes
            .iter_mut()
            .find(|c| c.id == weight_class.id)
            .ok_or_else(|| {
                DomainError::NotFound(format!("Weight class not found: {}", weight_class.id))
            })?;
        *stored = weight_class.clone();
        Ok(stored.clone())
    }

    async fn delete_weight_class(&self, id: &WeightClassId) -> Result<bool, DomainError> {
        let mut classes = self.weight_classes.write().unwrap();
        let before = classes.len();
        classes.retain(|c| c.id != *id);
        if classes.len() == before {
            return Ok(false);
        }
        // Mirrors ON DELETE SET NULL on fighters.weight_class_id
        for fighter in self.fighters.write().unwrap().iter_mut() {
            if fighter.weight_class_id == Some(*id) {
                fighter.weight_class_id = None;
            }
        }
        Ok(true)
    }

    async fn list_fighters(&self) -> Result<Vec<Fighter>, DomainError> {
        let mut fighters = self.fighters.read().unwrap().clone();
        fighters.sort_by(|a, b| {
            (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name))
        });
        Ok(fighters)
    }

    async fn create_fighter(&self, fighter: &NewFighter) -> Result<Fighter, DomainError> {
        let now = Utc::now();
        let created = Fighter {
            id: FighterId::new(),
            first_name: fighter.first_name.clone(),
            last_name: fighter.last_name.clone(),
            nickname: fighter.nickname.clone(),
            birthdate: fighter.birthdate,
            nationality: fighter.nationality.clone(),
            height_cm: fighter.height_cm,
            weight_kg: fighter.weight_kg,
            reach_cm: fighter.reach_cm,
            stance: fighter.stance.clone(),
            gym: fighter.gym.clone(),
            weight_class_id: fighter.weight_class_id,
            created_at: now,
            updated_at: now,
        };
        self.fighters.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_fighter(&self, fighter: &Fighter) -> Result<Fighter, DomainError> {
        let mut fighters = self.fighters.write().unwrap();
        let stored = fighters
            .iter_mut()
            .find(|f| f.id == fighter.id)
            .ok_or_else(|| DomainError::NotFound(format!("Fighter not found: {}", fighter.id)))?;
        *stored = Fighter {
            updated_at: Utc::now(),
            ..fighter.clone()
        };
        Ok(stored.clone())
    }

    async fn delete_fighter(&self, id: &FighterId) -> Result<bool, DomainError> {
        let mut fighters = self.fighters.write().unwrap();
        let before = fighters.len();
        fighters.retain(|f| f.id != *id);
        Ok(fighters.len() < before)
    }
}

// ============================================================================
// In-Memory Fight Repository (also serves as the fight ledger)
// ============================================================================

#[derive(Default)]
pub struct InMemoryFightRepository {
    /// Kept in insertion order
    fights: Arc<RwLock<Vec<Fight>>>,
    read_delay: Arc<RwLock<Option<Duration>>>,
}

impl InMemoryFightRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, fight: Fight) {
        self.fights.write().unwrap().push(fight);
    }

    pub fn remove(&self, id: &FightId) {
        self.fights.write().unwrap().retain(|f| f.id != *id);
    }

    /// Slow down ledger reads to widen race windows in concurrency tests
    pub fn set_read_delay(&self, delay: Duration) {
        *self.read_delay.write().unwrap() = Some(delay);
    }
}

#[async_trait]
impl FightLedger for InMemoryFightRepository {
    async fn list_resolved_fights_involving(
        &self,
        fighter_ids: &[FighterId],
    ) -> Result<Vec<Fight>, DomainError> {
        let delay = *self.read_delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let fights = self.fights.read().unwrap();
        Ok(fights
            .iter()
            .filter(|f| f.is_resolved())
            .filter(|f| fighter_ids.iter().any(|id| f.involves(id)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FightRepository for InMemoryFightRepository {
    async fn find_by_id(&self, id: &FightId) -> Result<Option<Fight>, DomainError> {
        let fights = self.fights.read().unwrap();
        Ok(fights.iter().find(|f| f.id == *id).cloned())
    }

    async fn create(&self, new_fight: &NewFight) -> Result<Fight, DomainError> {
        let fight = Fight {
            id: FightId::new(),
            event_id: new_fight.event_id,
            fighter_red_id: new_fight.fighter_red_id,
            fighter_blue_id: new_fight.fighter_blue_id,
            winner_id: new_fight.winner_id,
            is_draw: new_fight.is_draw,
            method: new_fight.method.clone(),
            round: new_fight.round,
            time: new_fight.time.clone(),
            result_details: new_fight.result_details.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.fights.write().unwrap().push(fight.clone());
        Ok(fight)
    }

    async fn update(&self, fight: &Fight) -> Result<Fight, DomainError> {
        let mut fights = self.fights.write().unwrap();
        let stored = fights
            .iter_mut()
            .find(|f| f.id == fight.id)
            .ok_or_else(|| DomainError::NotFound(format!("Fight not found: {}", fight.id)))?;

        *stored = fight.clone();
        Ok(stored.clone())
    }

    async fn delete(&self, id: &FightId) -> Result<bool, DomainError> {
        let mut fights = self.fights.write().unwrap();
        let before = fights.len();
        fights.retain(|f| f.id != *id);
        Ok(fights.len() < before)
    }

    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Fight>, DomainError> {
        let fights = self.fights.read().unwrap();
        Ok(fights
            .iter()
            .filter(|f| f.event_id == Some(*event_id))
            .cloned()
            .collect())
    }

    async fn count_by_fighter(&self, fighter_id: &FighterId) -> Result<u64, DomainError> {
        let fights = self.fights.read().unwrap();
        Ok(fights.iter().filter(|f| f.involves(fighter_id)).count() as u64)
    }
}

// ============================================================================
// In-Memory Event Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let events = self.events.read().unwrap();
        Ok(events.iter().find(|e| e.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let mut events = self.events.read().unwrap().clone();
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError> {
        let now = Utc::now();
        let created = Event {
            id: EventId::new(),
            name: event.name.clone(),
            location: event.location.clone(),
            date: event.date,
            created_at: now,
            updated_at: now,
        };
        self.events.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, event: &Event) -> Result<Event, DomainError> {
        let mut events = self.events.write().unwrap();
        let stored = events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| DomainError::NotFound(format!("Event not found: {}", event.id)))?;
        *stored = Event {
            updated_at: Utc::now(),
            ..event.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: &EventId) -> Result<bool, DomainError> {
        let mut events = self.events.write().unwrap();
        let before = events.len();
        events.retain(|e| e.id != *id);
        Ok(events.len() < before)
    }
}

// ============================================================================
// In-Memory Ranking Repository
// ============================================================================

/// Stores one snapshot per weight class and swaps it whole, so readers never
/// see a partially applied batch
#[derive(Default)]
pub struct InMemoryRankingRepository {
    snapshots: Arc<RwLock<HashMap<WeightClassId, Vec<RankingRecord>>>>,
    fail_next: AtomicBool,
    write_delay: Arc<RwLock<Option<Duration>>>,
    writes: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl InMemoryRankingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next replace call fail without touching stored data
    pub fn fail_next_write(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Hold each write open for a while before committing it
    pub fn set_write_delay(&self, delay: Duration) {
        *self.write_delay.write().unwrap() = Some(delay);
    }

    /// Number of successful replace calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Highest number of replace calls observed running at once
    pub fn max_concurrent_writes(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RankingRepository for InMemoryRankingRepository {
    async fn replace_weight_class_rankings(
        &self,
        weight_class_id: &WeightClassId,
        standings: &[Standing],
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        let delay = *self.write_delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let result = if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(DomainError::PersistenceFailure(
                "transaction rolled back".to_string(),
            ))
        } else {
            let records = standings
                .iter()
                .map(|s| RankingRecord {
                    fighter_id: s.fighter_id,
                    weight_class_id: *weight_class_id,
                    points: s.points,
                    rank: s.rank,
                    last_updated: now,
                })
                .collect();
            self.snapshots
                .write()
                .unwrap()
                .insert(*weight_class_id, records);
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn list_by_weight_class(
        &self,
        weight_class_id: &WeightClassId,
    ) -> Result<Vec<RankingRecord>, DomainError> {
        let snapshots = self.snapshots.read().unwrap();
        let mut records = snapshots.get(weight_class_id).cloned().unwrap_or_default();
        records.sort_by_key(|r| r.rank);
        Ok(records)
    }
}
