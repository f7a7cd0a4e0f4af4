use crate::catalog::events::{DailyDrift, EventEffects};
use crate::catalog::{EventKind, EventType};
use serde::{Deserialize, Serialize};

/// An event that fired during the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: u32,
    pub kind: EventKind,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub description: String,
    pub effects: EventEffects,
    pub duration: Option<u32>,
    /// Day the event fired.
    pub day: u32,
}

/// A lingering modifier left behind by an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Id of the event that spawned it.
    pub id: u32,
    pub name: String,
    /// Days left; the effect is dropped when this reaches zero.
    pub remaining: u32,
    /// Percentage points added to success rolls.
    pub success_rate: i32,
    pub daily: DailyDrift,
}
