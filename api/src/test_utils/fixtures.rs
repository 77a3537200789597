//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    Fight, FightId, Fighter, FighterId, NewEvent, NewFight, NewFighter, WeightClass,
    WeightClassId,
};

/// Create a test weight class with a given name
pub fn test_weight_class(name: &str) -> WeightClass {
    WeightClass {
        id: WeightClassId(Uuid::new_v4()),
        name: name.to_string(),
        min_weight_kg: 66,
        max_weight_kg: 70,
    }
}

/// Create a test fighter enrolled in a weight class
pub fn test_fighter_in(name: &str, weight_class_id: WeightClassId) -> Fighter {
    let now = Utc::now();
    Fighter {
        id: FighterId(Uuid::new_v4()),
        first_name: name.to_string(),
        last_name: "Tester".to_string(),
        nickname: None,
        birthdate: None,
        nationality: None,
        height_cm: Some(178),
        weight_kg: None,
        reach_cm: None,
        stance: Some("Orthodox".to_string()),
        gym: None,
        weight_class_id: Some(weight_class_id),
        created_at: now,
        updated_at: now,
    }
}

/// Create the input for adding a fighter to the roster
pub fn test_new_fighter(name: &str, weight_class_id: Option<WeightClassId>) -> NewFighter {
    NewFighter {
        first_name: name.to_string(),
        last_name: "Tester".to_string(),
        weight_class_id,
        ..Default::default()
    }
}

/// Create the input for scheduling an event a week from now
pub fn test_new_event(name: &str) -> NewEvent {
    NewEvent {
        name: name.to_string(),
        location: Some("Test Arena".to_string()),
        date: Utc::now() + Duration::days(7),
    }
}

/// Create a stored fight between two fighters
pub fn test_fight(
    red: &Fighter,
    blue: &Fighter,
    winner_id: Option<FighterId>,
    is_draw: bool,
    method: Option<&str>,
) -> Fight {
    Fight {
        id: FightId(Uuid::new_v4()),
        event_id: None,
        fighter_red_id: red.id,
        fighter_blue_id: blue.id,
        winner_id,
        is_draw,
        method: method.map(str::to_string),
        round: Some(1),
        time: Some("4:59".to_string()),
        result_details: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

/// Create the input for recording a fight
pub fn test_new_fight(
    red: &Fighter,
    blue: &Fighter,
    winner_id: Option<FighterId>,
    method: &str,
) -> NewFight {
    NewFight {
        event_id: None,
        fighter_red_id: red.id,
        fighter_blue_id: blue.id,
        winner_id,
        is_draw: false,
        method: Some(method.to_string()),
        round: Some(3),
        time: Some("5:00".to_string()),
        result_details: None,
    }
}
