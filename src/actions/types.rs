//! Action outcome types.

use crate::error::ActionError;
use crate::events::GameEvent;
use serde::{Deserialize, Serialize};

/// Deltas to the session counters. Used both for requested changes and for
/// what actually landed after clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StateChanges {
    pub school_pressure: i32,
    pub bureau_fear: i32,
    pub exposure_risk: i32,
    pub work_orders: i32,
    pub cost: f64,
}

impl StateChanges {
    pub fn is_empty(&self) -> bool {
        *self == StateChanges::default()
    }

    pub fn merge(&mut self, other: &StateChanges) {
        self.school_pressure += other.school_pressure;
        self.bureau_fear += other.bureau_fear;
        self.exposure_risk += other.exposure_risk;
        self.work_orders += other.work_orders;
        self.cost += other.cost;
    }
}

/// What the player sees after an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub description: String,
    pub feedback: Option<String>,
    /// Deltas from the action. Through a session this also includes the
    /// drift, event and replies of the day advance that followed.
    pub changes: StateChanges,
    /// Random event that fired during the day advance following the action.
    pub new_event: Option<GameEvent>,
    pub error: Option<ActionError>,
}

impl ActionResult {
    pub fn succeeded(description: impl Into<String>, changes: StateChanges) -> Self {
        Self {
            success: true,
            description: description.into(),
            feedback: None,
            changes,
            new_event: None,
            error: None,
        }
    }

    /// A failed result carrying the error. Nothing was changed.
    pub fn rejected(error: ActionError) -> Self {
        Self {
            success: false,
            description: error.to_string(),
            feedback: Some(error.hint().to_string()),
            changes: StateChanges::default(),
            new_event: None,
            error: Some(error),
        }
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}
