//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod event;
pub mod fight;
pub mod fighter;
pub mod ranking;
pub mod weight_class;

pub use event::{Event, EventId, EventUpdate, NewEvent};
pub use fight::{outcome_changed, Corner, Fight, FightId, FightUpdate, NewFight, Resolution};
pub use fighter::{Fighter, FighterId, FighterUpdate, NewFighter};
pub use ranking::{RankingRecord, Standing};
pub use weight_class::{NewWeightClass, WeightClass, WeightClassId, WeightClassUpdate};
