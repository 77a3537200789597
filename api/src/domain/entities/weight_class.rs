//! Weight class domain entity
//!
//! Rankings are always scoped to exactly one weight class.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a weight class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeightClassId(pub Uuid);

impl WeightClassId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WeightClassId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for WeightClassId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for WeightClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weight bracket, e.g. "Lightweight" (66-70 kg)
#[derive(Debug, Clone, Serialize)]
pub struct WeightClass {
    pub id: WeightClassId,
    pub name: String,
    pub min_weight_kg: i32,
    pub max_weight_kg: i32,
}

impl WeightClass {
    /// Check whether a weight (kg) falls inside this bracket
    pub fn admits(&self, weight_kg: i32) -> bool {
        (self.min_weight_kg..=self.max_weight_kg).contains(&weight_kg)
    }
}

/// Data needed to create a weight class
#[derive(Debug, Clone, Deserialize)]
pub struct NewWeightClass {
    pub name: String,
    pub min_weight_kg: i32,
    pub max_weight_kg: i32,
}

/// Partial update of a weight class. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeightClassUpdate {
    pub name: Option<String>,
    pub min_weight_kg: Option<i32>,
    pub max_weight_kg: Option<i32>,
}

impl WeightClassUpdate {
    pub fn apply_to(&self, class: &WeightClass) -> WeightClass {
        WeightClass {
            id: class.id,
            name: self.name.clone().unwrap_or_else(|| class.name.clone()),
            min_weight_kg: self.min_weight_kg.unwrap_or(class.min_weight_kg),
            max_weight_kg: self.max_weight_kg.unwrap_or(class.max_weight_kg),
        }
    }
}
