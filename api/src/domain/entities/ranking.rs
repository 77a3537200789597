//! Ranking domain entities
//!
//! `RankingRecord` is the persisted row; `Standing` is what the ranker hands to
//! the rank store at the end of a recalculation pass.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::fighter::FighterId;
use super::weight_class::WeightClassId;

/// A fighter's persisted position within a weight class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingRecord {
    pub fighter_id: FighterId,
    pub weight_class_id: WeightClassId,
    pub points: i32,
    /// Dense, 1-based
    pub rank: i32,
    pub last_updated: DateTime<Utc>,
}

/// Computed ranking position for one qualifying fighter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub fighter_id: FighterId,
    pub rank: i32,
    pub points: i32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub fight_count: u32,
    pub last_activity: Option<DateTime<Utc>>,
}
