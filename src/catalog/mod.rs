//! Static reference data shared by every session.

pub mod channels;
pub mod events;
pub mod evidence;
pub mod profile;
pub mod replies;

pub use channels::{ChannelDef, ChannelKind, ChannelTier};
pub use events::{EventDef, EventKind, EventType};
pub use evidence::{EvidenceDef, EvidenceKind};
pub use profile::{ClassDetail, SchoolProfile};
pub use replies::ReplyTemplate;
