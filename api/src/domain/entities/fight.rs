//! Fight domain entity
//!
//! A fight pairs a red-corner and a blue-corner fighter. Its outcome is either
//! pending, a draw, or a win for one corner. Only resolved fights count towards
//! rankings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::EventId;
use super::fighter::FighterId;
use crate::error::DomainError;

/// Unique identifier for a fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FightId(pub Uuid);

impl FightId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FightId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FightId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side of the cage a fighter was assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    Red,
    Blue,
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Corner::Red => write!(f, "red"),
            Corner::Blue => write!(f, "blue"),
        }
    }
}

/// Outcome of a resolved fight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Win(Corner),
    Draw,
}

/// A fight record as stored in the fight ledger
#[derive(Debug, Clone, Serialize)]
pub struct Fight {
    pub id: FightId,
    pub event_id: Option<EventId>,
    pub fighter_red_id: FighterId,
    pub fighter_blue_id: FighterId,
    pub winner_id: Option<FighterId>,
    pub is_draw: bool,
    pub method: Option<String>,
    pub round: Option<i32>,
    pub time: Option<String>,
    pub result_details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Fight {
    /// Resolve the stored outcome.
    ///
    /// Returns `Ok(None)` for a pending fight and `DataInconsistency` when the
    /// outcome columns contradict each other.
    pub fn resolution(&self) -> Result<Option<Resolution>, DomainError> {
        match (self.winner_id, self.is_draw) {
            (None, false) => Ok(None),
            (None, true) => Ok(Some(Resolution::Draw)),
            (Some(winner), false) => {
                if winner == self.fighter_red_id {
                    Ok(Some(Resolution::Win(Corner::Red)))
                } else if winner == self.fighter_blue_id {
                    Ok(Some(Resolution::Win(Corner::Blue)))
                } else {
                    Err(DomainError::DataInconsistency(format!(
                        "fight {} winner {} is not a participant",
                        self.id, winner
                    )))
                }
            }
            (Some(_), true) => Err(DomainError::DataInconsistency(format!(
                "fight {} has both a winner and a draw outcome",
                self.id
            ))),
        }
    }

    /// Check if the fight has an explicit winner or draw outcome
    pub fn is_resolved(&self) -> bool {
        self.winner_id.is_some() || self.is_draw
    }

    /// Timestamp used for recency tie-breaks: last update, else creation
    pub fn effective_at(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    pub fn involves(&self, fighter_id: &FighterId) -> bool {
        self.fighter_red_id == *fighter_id || self.fighter_blue_id == *fighter_id
    }
}

/// Data needed to record a new fight
#[derive(Debug, Clone, Deserialize)]
pub struct NewFight {
    #[serde(default)]
    pub event_id: Option<EventId>,
    pub fighter_red_id: FighterId,
    pub fighter_blue_id: FighterId,
    pub winner_id: Option<FighterId>,
    #[serde(default)]
    pub is_draw: bool,
    pub method: Option<String>,
    pub round: Option<i32>,
    pub time: Option<String>,
    pub result_details: Option<String>,
}

/// Partial update of a fight. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FightUpdate {
    pub event_id: Option<EventId>,
    pub winner_id: Option<FighterId>,
    pub is_draw: Option<bool>,
    pub method: Option<String>,
    pub round: Option<i32>,
    pub time: Option<String>,
    pub result_details: Option<String>,
}

impl FightUpdate {
    /// Apply this update on top of an existing fight
    pub fn apply_to(&self, fight: &Fight) -> Fight {
        let mut next = fight.clone();
        if self.event_id.is_some() {
            next.event_id = self.event_id;
        }
        if let Some(winner) = self.winner_id {
            next.winner_id = Some(winner);
            next.is_draw = false;
        }
        if let Some(is_draw) = self.is_draw {
            next.is_draw = is_draw;
            if is_draw {
                next.winner_id = None;
            }
        }
        if let Some(method) = &self.method {
            next.method = Some(method.clone());
        }
        if let Some(round) = self.round {
            next.round = Some(round);
        }
        if let Some(time) = &self.time {
            next.time = Some(time.clone());
        }
        if let Some(details) = &self.result_details {
            next.result_details = Some(details.clone());
        }
        next
    }
}

/// Check whether two versions of a fight differ in a field that affects rankings
pub fn outcome_changed(before: &Fight, after: &Fight) -> bool {
    before.winner_id != after.winner_id
        || before.is_draw != after.is_draw
        || before.method != after.method
        || before.round != after.round
        || before.time != after.time
}
