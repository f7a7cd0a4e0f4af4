//! Hotline - Turn-Based Remedial-Class Reporting Simulation
//!
//! This crate exposes the game engine for front ends, tests and the balance
//! simulator. A front end owns a [`GameSession`], calls one action per day
//! and renders the returned [`ActionResult`] and [`DayReport`].

pub mod ack;
pub mod achievements;
pub mod actions;
pub mod advice;
pub mod catalog;
pub mod core;
pub mod ending;
pub mod error;
pub mod events;
pub mod replies;
pub mod simulator;

pub use actions::ActionResult;
pub use crate::core::{DayReport, Difficulty, EngineConfig, GameSession, GameState};
pub use ending::{EndingKind, GameEndResult};
pub use error::{ActionError, ConfigError};
