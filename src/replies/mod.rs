//! Delayed bureau replies to filed reports.

pub mod logic;
pub mod types;

pub use logic::{resolve_replies, ResolvedReply};
pub use types::{BureauReply, WorkOrder, WorkOrderStatus};
