//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod events;
pub mod fights;
pub mod rankings;
pub mod roster;

pub use events::{
    create_event, delete_event, get_event, list_event_fights, list_events, update_event,
};
pub use fights::{create_fight, delete_fight, get_fight, update_fight};
pub use rankings::{get_rankings, recalculate_rankings};
pub use roster::{
    create_fighter, create_weight_class, delete_fighter, delete_weight_class, get_fighter,
    get_weight_class, list_class_fighters, list_fighters, list_weight_classes, update_fighter,
    update_weight_class,
};
