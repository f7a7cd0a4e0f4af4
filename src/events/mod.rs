//! Random events.

pub mod logic;
pub mod types;

pub use logic::{decay_active_effects, event_chance, fire_event, roll_daily_event};
pub use types::{ActiveEffect, GameEvent};
