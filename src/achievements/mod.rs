//! Achievement system module.
//!
//! Tracks which of the fixed achievements a session has earned. Unlocks are
//! monotonic: once earned, an achievement stays earned for the session.

pub mod data;
pub mod progress;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use progress::{evaluate_ending, evaluate_progress};
pub use types::{Achievement, AchievementId, AchievementRarity, Achievements};
