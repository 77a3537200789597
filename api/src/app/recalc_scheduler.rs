//! Recalculation scheduler
//!
//! Turns fight writes into background recalculation passes. Each weight class
//! has at most one worker task. A trigger that arrives while the worker is
//! mid-pass marks the class dirty, and the worker runs exactly one more pass
//! once the current one finishes, so bursts of writes coalesce without any
//! trigger being lost.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::app::ranking_service::RankingRecalculator;
use crate::domain::entities::WeightClassId;

#[derive(Debug, Default)]
struct ClassSlot {
    dirty: bool,
}

/// What happened to a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// A new worker was spawned for the weight class
    Started,
    /// A pass is already in flight; a follow-up pass is queued behind it
    Coalesced,
}

pub struct RecalcScheduler<R>
where
    R: RankingRecalculator,
{
    recalculator: Arc<R>,
    /// Present while a worker owns the weight class
    slots: Arc<Mutex<HashMap<WeightClassId, ClassSlot>>>,
}

impl<R> RecalcScheduler<R>
where
    R: RankingRecalculator,
{
    pub fn new(recalculator: Arc<R>) -> Self {
        Self {
            recalculator,
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Request a recalculation of a weight class. Never waits for the pass.
    pub async fn schedule(&self, weight_class_id: WeightClassId) -> ScheduleOutcome {
        let mut slots = self.slots.lock().await;
        if let Some(slot) = slots.get_mut(&weight_class_id) {
            slot.dirty = true;
            tracing::debug!(weight_class_id = %weight_class_id, "Recalculation coalesced");
            return ScheduleOutcome::Coalesced;
        }
        slots.insert(weight_class_id, ClassSlot::default());
        drop(slots);

        tokio::spawn(Self::run_worker(
            self.recalculator.clone(),
            self.slots.clone(),
            weight_class_id,
        ));
        ScheduleOutcome::Started
    }

    /// Check whether a pass is running or queued for a weight class
    pub async fn is_pending(&self, weight_class_id: &WeightClassId) -> bool {
        self.slots.lock().await.contains_key(weight_class_id)
    }

    async fn run_worker(
        recalculator: Arc<R>,
        slots: Arc<Mutex<HashMap<WeightClassId, ClassSlot>>>,
        weight_class_id: WeightClassId,
    ) {
        loop {
            // Each pass runs in its own task so a panic surfaces as a JoinError
            // here and the slot below is still released
            let pass = tokio::spawn({
                let recalculator = recalculator.clone();
                async move { recalculator.recalculate(&weight_class_id).await }
            });

            match pass.await {
                Ok(Ok(summary)) => tracing::debug!(
                    weight_class_id = %weight_class_id,
                    ranked = summary.ranked,
                    "Background recalculation finished"
                ),
                Ok(Err(e)) => tracing::error!(
                    weight_class_id = %weight_class_id,
                    error = %e,
                    "Background recalculation failed"
                ),
                Err(e) => tracing::error!(
                    weight_class_id = %weight_class_id,
                    panicked = e.is_panic(),
                    "Background recalculation aborted"
                ),
            }

            let mut slots = slots.lock().await;
            match slots.get_mut(&weight_class_id) {
                Some(slot) if slot.dirty => slot.dirty = false,
                _ => {
                    slots.remove(&weight_class_id);
                    return;
                }
            }
        }
    }
}
