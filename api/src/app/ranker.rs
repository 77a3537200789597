//! Ranker
//!
//! Orders tallied fighters and assigns dense ranks. Ordering is total:
//! points, then win rate, then most recent activity, then fighter id.

use std::cmp::Ordering;

use crate::app::aggregator::{FighterTally, Tally};
use crate::domain::entities::Standing;

/// Compare win rates (wins / fight_count) exactly, higher first.
/// Callers guarantee `fight_count > 0`.
fn cmp_win_rate_desc(a: &Tally, b: &Tally) -> Ordering {
    let lhs = u64::from(b.wins) * u64::from(a.fight_count);
    let rhs = u64::from(a.wins) * u64::from(b.fight_count);
    lhs.cmp(&rhs)
}

fn cmp_standing(a: &FighterTally, b: &FighterTally) -> Ordering {
    b.tally
        .points
        .cmp(&a.tally.points)
        .then_with(|| cmp_win_rate_desc(&a.tally, &b.tally))
        .then_with(|| b.tally.last_activity.cmp(&a.tally.last_activity))
        .then_with(|| a.fighter_id.cmp(&b.fighter_id))
}

/// Rank every fighter with at least one counted fight
pub fn rank(tallies: Vec<FighterTally>) -> Vec<Standing> {
    let mut qualifying: Vec<FighterTally> = tallies
        .into_iter()
        .filter(|t| t.tally.fight_count > 0)
        .collect();

    qualifying.sort_by(cmp_standing);

    qualifying
        .into_iter()
        .enumerate()
        .map(|(position, entry)| Standing {
            fighter_id: entry.fighter_id,
            rank: position as i32 + 1,
            points: entry.tally.points,
            wins: entry.tally.wins,
            losses: entry.tally.losses,
            draws: entry.tally.draws,
            fight_count: entry.tally.fight_count,
            last_activity: entry.tally.last_activity,
        })
        .collect()
}
