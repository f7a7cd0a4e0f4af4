//! Player actions and their outcomes.

pub mod logic;
pub mod types;

pub use logic::{can_act, collect_evidence, ensure_can_act, submit_report, wait_one_day};
pub use types::{ActionResult, StateChanges};
