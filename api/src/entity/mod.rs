//! SeaORM entities
//!
//! Table mappings for the PostgreSQL schema in `migrations/`.

pub mod events;
pub mod fighters;
pub mod fights;
pub mod rankings;
pub mod weight_classes;
