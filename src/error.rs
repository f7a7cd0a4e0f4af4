//! Error types surfaced by the engine.

use crate::catalog::{ChannelKind, EvidenceKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an action is rejected. None of these are fatal: the session turns
/// them into a failed `ActionResult` and leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ActionError {
    #[error("only one action can be taken per day")]
    ActionAlreadyUsed,

    #[error("invalid evidence selection: {0}")]
    InvalidEvidenceSelection(String),

    #[error("{0} has already been collected")]
    EvidenceAlreadyCollected(EvidenceKind),

    #[error("{0} already has a report waiting for a reply")]
    ChannelBusy(ChannelKind),

    #[error("budget exceeded: {total:.1} spent, another {cost:.1} would pass the cap of {cap:.1}")]
    BudgetExceeded { total: f64, cost: f64, cap: f64 },

    #[error("{0} does not accept anonymous reports")]
    AnonymityNotSupported(ChannelKind),

    #[error("unknown evidence kind `{0}`")]
    InvalidEvidenceKind(String),

    #[error("unknown channel `{0}`")]
    InvalidChannelKind(String),

    #[error("the game has not started yet")]
    NotStarted,

    #[error("the game has already ended")]
    GameEnded,
}

impl ActionError {
    /// Short hint for the player on what to do instead.
    pub fn hint(&self) -> &'static str {
        match self {
            ActionError::ActionAlreadyUsed => "Wait for tomorrow or finish today's action first.",
            ActionError::InvalidEvidenceSelection(_) => {
                "Attach between one and three pieces of evidence you already hold."
            }
            ActionError::EvidenceAlreadyCollected(_) => "Pick a piece of evidence you do not have yet.",
            ActionError::ChannelBusy(_) => "Wait for that channel to reply, or try another one.",
            ActionError::BudgetExceeded { .. } => "Use a free channel instead.",
            ActionError::AnonymityNotSupported(_) => {
                "Only the 12345 hotlines accept anonymous reports."
            }
            ActionError::InvalidEvidenceKind(_) | ActionError::InvalidChannelKind(_) => {
                "Choose an entry from the catalog."
            }
            ActionError::NotStarted => "Start the game before taking actions.",
            ActionError::GameEnded => "Start a new game to keep playing.",
        }
    }
}

/// Failures while loading an `EngineConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid engine config: {0}")]
    Invalid(String),
}
