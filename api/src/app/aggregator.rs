//! Fight aggregation
//!
//! Folds the fights of one weight class into per-fighter tallies. Every counted
//! fight touches exactly two tallies; fights that cannot be counted are either
//! ignored (pending) or recorded as skipped (inconsistent data).

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::app::scoring::score;
use crate::domain::entities::{Corner, Fight, FightId, Fighter, FighterId, Resolution};
use crate::error::DomainError;

/// Running totals for one fighter within a single pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub points: i32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub fight_count: u32,
    pub last_activity: Option<DateTime<Utc>>,
}

impl Tally {
    fn record(&mut self, points: i32, result: FightResult, at: DateTime<Utc>) {
        self.points += points;
        match result {
            FightResult::Win => self.wins += 1,
            FightResult::Loss => self.losses += 1,
            FightResult::Draw => self.draws += 1,
        }
        self.fight_count += 1;
        self.last_activity = Some(self.last_activity.map_or(at, |prev| prev.max(at)));
    }
}

#[derive(Debug, Clone, Copy)]
enum FightResult {
    Win,
    Loss,
    Draw,
}

/// A fighter's tally, keyed by fighter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FighterTally {
    pub fighter_id: FighterId,
    pub tally: Tally,
}

/// A fight left out of the pass because its data is inconsistent
#[derive(Debug)]
pub struct SkippedFight {
    pub fight_id: FightId,
    pub reason: DomainError,
}

/// Result of folding a weight class's fights
#[derive(Debug, Default)]
pub struct Aggregation {
    /// One entry per roster fighter, in roster order
    pub tallies: Vec<FighterTally>,
    pub counted: usize,
    pub skipped: Vec<SkippedFight>,
}

/// Fold `fights` into tallies for the fighters of one weight class
pub fn aggregate(fighters: &[Fighter], fights: &[Fight]) -> Aggregation {
    let mut index: HashMap<FighterId, usize> = HashMap::with_capacity(fighters.len());
    let mut tallies = Vec::with_capacity(fighters.len());
    for fighter in fighters {
        if index.contains_key(&fighter.id) {
            continue;
        }
        index.insert(fighter.id, tallies.len());
        tallies.push(FighterTally {
            fighter_id: fighter.id,
            tally: Tally::default(),
        });
    }

    let mut counted = 0;
    let mut skipped = Vec::new();

    for fight in fights {
        let resolution = match fight.resolution() {
            Ok(Some(resolution)) => resolution,
            Ok(None) => continue,
            Err(reason) => {
                tracing::warn!(fight_id = %fight.id, error = %reason, "Skipping malformed fight");
                skipped.push(SkippedFight {
                    fight_id: fight.id,
                    reason,
                });
                continue;
            }
        };

        let (Some(&red), Some(&blue)) = (
            index.get(&fight.fighter_red_id),
            index.get(&fight.fighter_blue_id),
        ) else {
            tracing::warn!(
                fight_id = %fight.id,
                red = %fight.fighter_red_id,
                blue = %fight.fighter_blue_id,
                "Skipping fight with a participant outside the weight class"
            );
            skipped.push(SkippedFight {
                fight_id: fight.id,
                reason: DomainError::DataInconsistency(format!(
                    "fight {} has a participant outside the weight class",
                    fight.id
                )),
            });
            continue;
        };

        let delta = score(resolution, fight.method.as_deref());
        let at = fight.effective_at();
        let (red_result, blue_result) = match resolution {
            Resolution::Draw => (FightResult::Draw, FightResult::Draw),
            Resolution::Win(Corner::Red) => (FightResult::Win, FightResult::Loss),
            Resolution::Win(Corner::Blue) => (FightResult::Loss, FightResult::Win),
        };

        tallies[red]
            .tally
            .record(delta.for_corner(Corner::Red), red_result, at);
        tallies[blue]
            .tally
            .record(delta.for_corner(Corner::Blue), blue_result, at);
        counted += 1;
    }

    Aggregation {
        tallies,
        counted,
        skipped,
    }
}
