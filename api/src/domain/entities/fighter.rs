//! Fighter domain entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::weight_class::WeightClassId;

/// Unique identifier for a fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FighterId(pub Uuid);

impl FighterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FighterId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FighterId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FighterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fighter on the roster. Belongs to at most one weight class at a time.
#[derive(Debug, Clone, Serialize)]
pub struct Fighter {
    pub id: FighterId,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub reach_cm: Option<i32>,
    /// e.g. "Orthodox", "Southpaw"
    pub stance: Option<String>,
    pub gym: Option<String>,
    pub weight_class_id: Option<WeightClassId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Fighter {
    /// Display name, including the nickname when present
    pub fn display_name(&self) -> String {
        match &self.nickname {
            Some(nick) if !nick.is_empty() => {
                format!("{} \"{}\" {}", self.first_name, nick, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Data needed to add a fighter to the roster
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFighter {
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
    pub weight_class_id: Option<WeightClassId>,
}

/// Partial update of a fighter. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FighterUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub reach_cm: Option<i32>,
    pub stance: Option<String>,
    pub gym: Option<String>,
    pub weight_class_id: Option<WeightClassId>,
}

impl FighterUpdate {
    /// Apply this update on top of an existing fighter
    pub fn apply_to(&self, fighter: &Fighter) -> Fighter {
        let mut next = fighter.clone();
        if let Some(first_name) = &self.first_name {
            next.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            next.last_name = last_name.clone();
        }
        if self.nickname.is_some() {
            next.nickname = self.nickname.clone();
        }
        if self.birthdate.is_some() {
            next.birthdate = self.birthdate;
        }
        if self.nationality.is_some() {
            next.nationality = self.nationality.clone();
        }
        if self.height_cm.is_some() {
            next.height_cm = self.height_cm;
        }
        if self.weight_kg.is_some() {
            next.weight_kg = self.weight_kg;
        }
        if self.reach_cm.is_some() {
            next.reach_cm = self.reach_cm;
        }
        if self.stance.is_some() {
            next.stance = self.stance.clone();
        }
        if self.gym.is_some() {
            next.gym = self.gym.clone();
        }
        if self.weight_class_id.is_some() {
            next.weight_class_id = self.weight_class_id;
        }
        next
    }
}
