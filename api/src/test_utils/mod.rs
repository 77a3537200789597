//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories honour the same contracts as the PostgreSQL
//! adapters (ordering, atomic ranking replacement) and expose knobs for
//! injecting failures and delays.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
