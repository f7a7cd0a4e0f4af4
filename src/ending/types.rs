use crate::achievements::Achievement;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndingKind {
    /// The class is stopped at a tolerable cost.
    Victory,
    /// The class is stopped, but the player paid heavily for it.
    Pyrrhic,
    /// Time ran out with nothing resolved.
    Stalemate,
    Failure,
    /// The player's identity came out through a named report.
    Backfire,
    /// The class was stopped on paper and moved somewhere else.
    Redirect,
}

impl EndingKind {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            EndingKind::Victory | EndingKind::Pyrrhic | EndingKind::Redirect
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            EndingKind::Victory => "Complete victory",
            EndingKind::Pyrrhic => "Pyrrhic victory",
            EndingKind::Stalemate => "Stalemate",
            EndingKind::Failure => "Failure",
            EndingKind::Backfire => "Backfire",
            EndingKind::Redirect => "Redirected",
        }
    }
}

impl fmt::Display for EndingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Final verdict of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEndResult {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: EndingKind,
    pub day: u32,
    pub total_cost: f64,
    /// 0-100.
    pub final_success_rate: f64,
    pub summary: String,
    pub comment: String,
    /// Achievements unlocked by the end of the session.
    pub achievements: Vec<Achievement>,
}
