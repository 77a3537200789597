//! Ranking service
//!
//! Runs recalculation passes: read roster and fights, aggregate, rank, and
//! replace the weight class's persisted ranking in one atomic write. Passes for
//! the same weight class are serialized.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::app::aggregator::aggregate;
use crate::app::class_locks::WeightClassLocks;
use crate::app::ranker::rank;
use crate::domain::entities::{FighterId, RankingRecord, WeightClassId};
use crate::domain::ports::{FightLedger, RankingRepository, RosterProvider};
use crate::error::{AppError, DomainError};

/// Outcome of one recalculation pass
#[derive(Debug, Clone, Serialize)]
pub struct RecalculationSummary {
    pub weight_class_id: WeightClassId,
    pub roster_size: usize,
    pub fights_counted: usize,
    pub fights_skipped: usize,
    pub ranked: usize,
}

/// Anything that can run a recalculation pass for a weight class
#[async_trait]
pub trait RankingRecalculator: Send + Sync + 'static {
    async fn recalculate(
        &self,
        weight_class_id: &WeightClassId,
    ) -> Result<RecalculationSummary, AppError>;
}

/// Service for ranking recalculation and lookup
pub struct RankingService<RP, FL, RR>
where
    RP: RosterProvider,
    FL: FightLedger,
    RR: RankingRepository,
{
    roster: Arc<RP>,
    fights: Arc<FL>,
    rankings: Arc<RR>,
    locks: WeightClassLocks,
}

impl<RP, FL, RR> RankingService<RP, FL, RR>
where
    RP: RosterProvider,
    FL: FightLedger,
    RR: RankingRepository,
{
    pub fn new(roster: Arc<RP>, fights: Arc<FL>, rankings: Arc<RR>) -> Self {
        Self {
            roster,
            fights,
            rankings,
            locks: WeightClassLocks::new(),
        }
    }

    /// Recompute and persist the ranking of one weight class.
    ///
    /// Aborts with `NotFound` if the weight class does not exist and with
    /// `PersistenceFailure` if the ranking batch cannot be committed; in both
    /// cases the previously persisted ranking is left as it was.
    pub async fn recalculate_rankings(
        &self,
        weight_class_id: &WeightClassId,
    ) -> Result<RecalculationSummary, AppError> {
        let _scope = self.locks.acquire(weight_class_id).await;

        let weight_class = self
            .roster
            .find_weight_class(weight_class_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Weight class not found: {}", weight_class_id))
            })?;

        let fighters = self
            .roster
            .list_fighters_in_weight_class(weight_class_id)
            .await?;
        let fighter_ids: Vec<FighterId> = fighters.iter().map(|f| f.id).collect();

        let fights = if fighter_ids.is_empty() {
            Vec::new()
        } else {
            self.fights
                .list_resolved_fights_involving(&fighter_ids)
                .await?
        };

        let aggregation = aggregate(&fighters, &fights);
        let fights_counted = aggregation.counted;
        let fights_skipped = aggregation.skipped.len();
        let standings = rank(aggregation.tallies);

        self.rankings
            .replace_weight_class_rankings(weight_class_id, &standings, Utc::now())
            .await
            .map_err(|e| match e {
                DomainError::PersistenceFailure(_) => e,
                other => DomainError::PersistenceFailure(other.to_string()),
            })?;

        tracing::info!(
            weight_class_id = %weight_class_id,
            weight_class = %weight_class.name,
            roster_size = fighters.len(),
            fights_counted = fights_counted,
            fights_skipped = fights_skipped,
            ranked = standings.len(),
            "Rankings recalculated"
        );

        Ok(RecalculationSummary {
            weight_class_id: *weight_class_id,
            roster_size: fighters.len(),
            fights_counted,
            fights_skipped,
            ranked: standings.len(),
        })
    }

    /// Current persisted ranking of a weight class, best first
    pub async fn list_rankings(
        &self,
        weight_class_id: &WeightClassId,
    ) -> Result<Vec<RankingRecord>, AppError> {
        if self
            .roster
            .find_weight_class(weight_class_id)
            .await?
            .is_none()
        {
            return Err(AppError::Domain(DomainError::NotFound(format!(
                "Weight class not found: {}",
                weight_class_id
            ))));
        }

        Ok(self.rankings.list_by_weight_class(weight_class_id).await?)
    }
}

#[async_trait]
impl<RP, FL, RR> RankingRecalculator for RankingService<RP, FL, RR>
where
    RP: RosterProvider + 'static,
    FL: FightLedger + 'static,
    RR: RankingRepository + 'static,
{
    async fn recalculate(
        &self,
        weight_class_id: &WeightClassId,
    ) -> Result<RecalculationSummary, AppError> {
        self.recalculate_rankings(weight_class_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration;

    use crate::domain::entities::{Fighter, WeightClass};
    use crate::test_utils::{
        test_fight, test_fighter_in, test_weight_class, InMemoryFightRepository,
        InMemoryRankingRepository, InMemoryRoster,
    };

    type TestService =
        RankingService<InMemoryRoster, InMemoryFightRepository, InMemoryRankingRepository>;

    struct Harness {
        service: Arc<TestService>,
        roster: Arc<InMemoryRoster>,
        fights: Arc<InMemoryFightRepository>,
        rankings: Arc<InMemoryRankingRepository>,
        class: WeightClass,
    }

    fn harness() -> Harness {
        let class = test_weight_class("Lightweight");
        let roster = Arc::new(InMemoryRoster::new().with_weight_class(class.clone()));
        let fights = Arc::new(InMemoryFightRepository::new());
        let rankings = Arc::new(InMemoryRankingRepository::new());
        let service = Arc::new(RankingService::new(
            roster.clone(),
            fights.clone(),
            rankings.clone(),
        ));
        Harness {
            service,
            roster,
            fights,
            rankings,
            class,
        }
    }

    impl Harness {
        fn enroll(&self, name: &str) -> Fighter {
            let fighter = test_fighter_in(name, self.class.id);
            self.roster.add_fighter(fighter.clone());
            fighter
        }

        fn record(&self, red: &Fighter, blue: &Fighter, winner: Option<&Fighter>, method: &str) {
            self.fights.insert(test_fight(
                red,
                blue,
                winner.map(|f| f.id),
                false,
                Some(method),
            ));
        }

        fn draw(&self, red: &Fighter, blue: &Fighter) {
            self.fights
                .insert(test_fight(red, blue, None, true, Some("Draw")));
        }

        async fn ranking(&self) -> Vec<RankingRecord> {
            self.service.list_rankings(&self.class.id).await.unwrap()
        }
    }

    fn assert_dense(records: &[RankingRecord]) {
        let ranks: Vec<i32> = records.iter().map(|r| r.rank).collect();
        let expected: Vec<i32> = (1..=records.len() as i32).collect();
        assert_eq!(ranks, expected);
    }

    #[tokio::test]
    async fn scoring_scenario_orders_ko_over_decision() {
        let h = harness();
        let a = h.enroll("A");
        let b = h.enroll("B");
        let c = h.enroll("C");
        h.record(&a, &b, Some(&a), "KO");
        h.record(&c, &b, Some(&c), "Decision");

        h.service.recalculate_rankings(&h.class.id).await.unwrap();
        let ranking = h.ranking().await;

        let order: Vec<(FighterId, i32, i32)> = ranking
            .iter()
            .map(|r| (r.fighter_id, r.points, r.rank))
            .collect();
        assert_eq!(order, vec![(a.id, 4, 1), (c.id, 3, 2), (b.id, 0, 3)]);
    }

    #[tokio::test]
    async fn draw_scenario_gives_one_point_each() {
        let h = harness();
        let a = h.enroll("A");
        let b = h.enroll("B");
        h.draw(&a, &b);

        let summary = h.service.recalculate_rankings(&h.class.id).await.unwrap();
        let ranking = h.ranking().await;

        assert_eq!(summary.fights_counted, 1);
        assert_eq!(ranking.len(), 2);
        assert!(ranking.iter().all(|r| r.points == 1));
        assert_dense(&ranking);
    }

    #[tokio::test]
    async fn tie_break_scenario_prefers_higher_win_rate() {
        let h = harness();
        let a = h.enroll("A");
        let c = h.enroll("C");
        let d = h.enroll("D");
        let e = h.enroll("E");
        // A: 1 win / 1 fight = 3 points; C: 1 win / 2 fights = 3 points
        h.record(&a, &d, Some(&a), "Decision");
        h.record(&c, &e, Some(&c), "Decision");
        h.record(&c, &e, Some(&e), "Decision");

        h.service.recalculate_rankings(&h.class.id).await.unwrap();
        let ranking = h.ranking().await;

        let rank_of = |id: FighterId| ranking.iter().find(|r| r.fighter_id == id).unwrap().rank;
        assert!(rank_of(a.id) < rank_of(c.id));
    }

    #[tokio::test]
    async fn pending_fights_create_no_records() {
        let h = harness();
        let a = h.enroll("A");
        let b = h.enroll("B");
        h.fights
            .insert(test_fight(&a, &b, None, false, Some("KO")));

        let summary = h.service.recalculate_rankings(&h.class.id).await.unwrap();

        assert_eq!(summary.ranked, 0);
        assert!(h.ranking().await.is_empty());
    }

    #[tokio::test]
    async fn fighters_without_fights_get_no_record() {
        let h = harness();
        let a = h.enroll("A");
        let b = h.enroll("B");
        let idle = h.enroll("Idle");
        h.record(&a, &b, Some(&b), "Submission");

        h.service.recalculate_rankings(&h.class.id).await.unwrap();
        let ranking = h.ranking().await;

        assert_eq!(ranking.len(), 2);
        assert!(ranking.iter().all(|r| r.fighter_id != idle.id));
    }

    #[tokio::test]
    async fn recalculation_is_idempotent() {
        let h = harness();
        let fighters: Vec<Fighter> = ["A", "B", "C", "D"].iter().map(|n| h.enroll(n)).collect();
        h.record(&fighters[0], &fighters[1], Some(&fighters[0]), "KO");
        h.record(&fighters[2], &fighters[3], Some(&fighters[3]), "Decision");
        h.draw(&fighters[1], &fighters[2]);

        h.service.recalculate_rankings(&h.class.id).await.unwrap();
        let first: Vec<(FighterId, i32, i32)> = h
            .ranking()
            .await
            .iter()
            .map(|r| (r.fighter_id, r.points, r.rank))
            .collect();

        h.service.recalculate_rankings(&h.class.id).await.unwrap();
        let second: Vec<(FighterId, i32, i32)> = h
            .ranking()
            .await
            .iter()
            .map(|r| (r.fighter_id, r.points, r.rank))
            .collect();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn stale_records_are_removed_when_fighter_drops_out() {
        let h = harness();
        let a = h.enroll("A");
        let b = h.enroll("B");
        let c = h.enroll("C");
        h.record(&a, &b, Some(&a), "KO");
        let only_fight_of_c = test_fight(&c, &b, Some(c.id), false, Some("Decision"));
        h.fights.insert(only_fight_of_c.clone());

        h.service.recalculate_rankings(&h.class.id).await.unwrap();
        assert_eq!(h.ranking().await.len(), 3);

        h.fights.remove(&only_fight_of_c.id);
        h.service.recalculate_rankings(&h.class.id).await.unwrap();
        let ranking = h.ranking().await;

        assert_eq!(ranking.len(), 2);
        assert!(ranking.iter().all(|r| r.fighter_id != c.id));
        assert_dense(&ranking);
    }

    #[tokio::test]
    async fn unknown_weight_class_is_not_found() {
        let h = harness();
        let err = h
            .service
            .recalculate_rankings(&WeightClassId::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = h
            .service
            .list_rankings(&WeightClassId::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn persistence_failure_keeps_prior_snapshot() {
        let h = harness();
        let a = h.enroll("A");
        let b = h.enroll("B");
        h.record(&a, &b, Some(&a), "KO");
        h.service.recalculate_rankings(&h.class.id).await.unwrap();
        let before = h.ranking().await;

        let c = h.enroll("C");
        h.record(&c, &a, Some(&c), "KO");
        h.record(&c, &b, Some(&c), "KO");
        h.rankings.fail_next_write();

        let err = h
            .service
            .recalculate_rankings(&h.class.id)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::PersistenceFailure(_))
        ));
        assert_eq!(h.ranking().await, before);
    }

    #[tokio::test]
    async fn cross_class_fights_are_skipped_not_fatal() {
        let h = harness();
        let a = h.enroll("A");
        let b = h.enroll("B");
        let outsider = test_fighter_in("Outsider", WeightClassId::new());
        h.roster.add_fighter(outsider.clone());
        h.record(&a, &outsider, Some(&a), "KO");
        h.record(&a, &b, Some(&b), "Decision");

        let summary = h.service.recalculate_rankings(&h.class.id).await.unwrap();

        assert_eq!(summary.fights_counted, 1);
        assert_eq!(summary.fights_skipped, 1);
        let ranking = h.ranking().await;
        assert_eq!(ranking[0].fighter_id, b.id);
        assert_eq!(ranking[0].points, 3);
        assert_eq!(ranking[1].fighter_id, a.id);
        assert_eq!(ranking[1].points, 0);
    }

    #[tokio::test]
    async fn overlapping_passes_leave_dense_ranks() {
        let h = harness();
        let fighters: Vec<Fighter> = (0..8).map(|i| h.enroll(&format!("F{}", i))).collect();
        for pair in fighters.chunks(2) {
            h.record(&pair[0], &pair[1], Some(&pair[0]), "KO");
        }
        h.fights.set_read_delay(Duration::from_millis(20));
        h.rankings.set_write_delay(Duration::from_millis(20));

        let first = {
            let service = h.service.clone();
            let id = h.class.id;
            tokio::spawn(async move { service.recalculate_rankings(&id).await })
        };
        let second = {
            let service = h.service.clone();
            let id = h.class.id;
            let fights = h.fights.clone();
            let extra = test_fight(
                &fighters[1],
                &fighters[3],
                Some(fighters[3].id),
                false,
                Some("Decision"),
            );
            tokio::spawn(async move {
                fights.insert(extra);
                service.recalculate_rankings(&id).await
            })
        };

        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        let ranking = h.ranking().await;
        assert_eq!(ranking.len(), 8);
        assert_dense(&ranking);
        let unique: HashSet<FighterId> = ranking.iter().map(|r| r.fighter_id).collect();
        assert_eq!(unique.len(), 8);
        assert_eq!(h.rankings.max_concurrent_writes(), 1);
    }

    #[tokio::test]
    async fn different_weight_classes_recalculate_independently() {
        let h = harness();
        let heavy = test_weight_class("Heavyweight");
        h.roster.add_weight_class(heavy.clone());
        let a = h.enroll("A");
        let b = h.enroll("B");
        let x = test_fighter_in("X", heavy.id);
        let y = test_fighter_in("Y", heavy.id);
        h.roster.add_fighter(x.clone());
        h.roster.add_fighter(y.clone());
        h.record(&a, &b, Some(&a), "KO");
        h.record(&x, &y, Some(&y), "Submission");

        let (light, heavy_result) = tokio::join!(
            h.service.recalculate_rankings(&h.class.id),
            h.service.recalculate_rankings(&heavy.id)
        );
        light.unwrap();
        heavy_result.unwrap();

        let heavy_ranking = h.service.list_rankings(&heavy.id).await.unwrap();
        assert_eq!(heavy_ranking[0].fighter_id, y.id);
        assert_eq!(heavy_ranking[0].points, 4);
        assert_eq!(h.ranking().await[0].fighter_id, a.id);
    }
}
