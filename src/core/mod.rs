//! Core game state, tuning and the day loop.

pub mod config;
pub mod constants;
pub mod game_state;
pub mod session;
pub mod tick;

pub use config::{DifficultySettings, EngineConfig};
pub use game_state::{Counter, Difficulty, Evidence, GamePhase, GameState};
pub use session::GameSession;
pub use tick::{advance_day, DayEvent, DayReport};
