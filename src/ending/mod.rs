//! Session endings.

pub mod logic;
pub mod types;

pub use logic::{check_termination, conclude, final_success_rate};
pub use types::{EndingKind, GameEndResult};
