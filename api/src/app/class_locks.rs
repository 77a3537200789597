//! Per-weight-class exclusive scopes
//!
//! One async mutex per weight class, created on first use. Passes for the same
//! class queue on its mutex; different classes never contend.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::entities::WeightClassId;

#[derive(Default)]
pub struct WeightClassLocks {
    locks: Mutex<HashMap<WeightClassId, Arc<Mutex<()>>>>,
}

impl WeightClassLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the exclusive scope of a weight class, waiting for any pass
    /// currently holding it
    pub async fn acquire(&self, id: &WeightClassId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(*id).or_default().clone()
        };
        lock.lock_owned().await
    }
}
