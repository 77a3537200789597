//! Fight scoring
//!
//! Pure mapping from a resolved fight outcome to per-corner point deltas.

use crate::app::scoring_config::{
    DECISION_KEYWORD, FINISH_KEYWORDS, POINTS_DECISION_WIN, POINTS_DRAW, POINTS_FINISH_WIN,
    POINTS_LOSS, POINTS_OTHER_WIN,
};
use crate::domain::entities::{Corner, Resolution};

/// How a fight was won, derived from the free-text method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinMethod {
    Finish,
    Decision,
    Other,
}

impl WinMethod {
    /// Classify a method string. Finishes take precedence over decisions.
    pub fn classify(method: Option<&str>) -> Self {
        let Some(method) = method else {
            return WinMethod::Other;
        };
        let method = method.to_lowercase();

        if FINISH_KEYWORDS.iter().any(|k| method.contains(k)) {
            WinMethod::Finish
        } else if method.contains(DECISION_KEYWORD) {
            WinMethod::Decision
        } else {
            WinMethod::Other
        }
    }

    pub fn points(self) -> i32 {
        match self {
            WinMethod::Finish => POINTS_FINISH_WIN,
            WinMethod::Decision => POINTS_DECISION_WIN,
            WinMethod::Other => POINTS_OTHER_WIN,
        }
    }
}

/// Points earned by each corner in one fight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    pub red: i32,
    pub blue: i32,
}

impl ScoreDelta {
    pub fn for_corner(&self, corner: Corner) -> i32 {
        match corner {
            Corner::Red => self.red,
            Corner::Blue => self.blue,
        }
    }
}

/// Score a resolved fight
pub fn score(resolution: Resolution, method: Option<&str>) -> ScoreDelta {
    match resolution {
        Resolution::Draw => ScoreDelta {
            red: POINTS_DRAW,
            blue: POINTS_DRAW,
        },
        Resolution::Win(Corner::Red) => ScoreDelta {
            red: WinMethod::classify(method).points(),
            blue: POINTS_LOSS,
        },
        Resolution::Win(Corner::Blue) => ScoreDelta {
            red: POINTS_LOSS,
            blue: WinMethod::classify(method).points(),
        },
    }
}
