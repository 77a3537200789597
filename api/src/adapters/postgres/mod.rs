//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod event_repo;
pub mod fight_repo;
pub mod ranking_repo;
pub mod roster_repo;


pub use event_repo::PostgresEventRepository;
pub use fight_repo::PostgresFightRepository;
pub use ranking_repo::PostgresRankingRepository;
pub use roster_repo::PostgresRosterRepository;
