//! Ranking point configuration
//!
//! Defines the points awarded for each kind of fight outcome.

/// Points for a win by knockout (including TKO) or submission
pub const POINTS_FINISH_WIN: i32 = 4;

/// Points for a win on the judges' scorecards
pub const POINTS_DECISION_WIN: i32 = 3;

/// Points for a win by any other or unrecorded method
pub const POINTS_OTHER_WIN: i32 = 3;

/// Points for each fighter in a draw
pub const POINTS_DRAW: i32 = 1;

/// Points for a loss
pub const POINTS_LOSS: i32 = 0;

/// Method keywords (lowercase) that count as a finish
pub const FINISH_KEYWORDS: [&str; 2] = ["ko", "submission"];

/// Method keyword (lowercase) that counts as a decision
pub const DECISION_KEYWORD: &str = "decision";
