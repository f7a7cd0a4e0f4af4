//! Game balance simulator for Monte Carlo analysis.
//!
//! Plays many sessions with a scripted player to analyze:
//! - How often each ending occurs per difficulty
//! - How long games last and what they cost
//! - Which achievements are reachable in practice
//!
//! Every run drives a real `GameSession`, so results match actual play.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{DifficultySummary, SimReport};
pub use runner::{choose_move, run_simulation, simulate_single_run, RunStats, SimMove};
