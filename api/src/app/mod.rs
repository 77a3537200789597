//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and background work.

pub mod aggregator;
pub mod class_locks;
pub mod event_service;
pub mod fight_service;
pub mod ranker;
pub mod ranking_service;
pub mod recalc_scheduler;
pub mod roster_service;
pub mod scoring;
pub mod scoring_config;
pub mod seed;

pub use event_service::EventService;
pub use fight_service::FightService;
pub use ranking_service::{RankingService, RecalculationSummary};
pub use recalc_scheduler::RecalcScheduler;
pub use roster_service::RosterService;
