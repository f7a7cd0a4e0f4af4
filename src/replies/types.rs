use crate::catalog::{ChannelKind, ReplyTemplate};
use crate::core::game_state::Evidence;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Pending,
    Replied,
}

/// The bureau's answer to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BureauReply {
    pub template: ReplyTemplate,
    pub content: String,
    pub day: u32,
}

/// A filed report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: u32,
    pub channel: ChannelKind,
    /// Evidence as it was when attached.
    pub evidences: Vec<Evidence>,
    /// Day the report was filed.
    pub day: u32,
    pub anonymous: bool,
    pub persuasiveness: f64,
    pub status: WorkOrderStatus,
    pub reply: Option<BureauReply>,
}

impl WorkOrder {
    pub fn new(
        id: u32,
        channel: ChannelKind,
        evidences: Vec<Evidence>,
        day: u32,
        anonymous: bool,
        persuasiveness: f64,
    ) -> Self {
        Self {
            id,
            channel,
            evidences,
            day,
            anonymous,
            persuasiveness,
            status: WorkOrderStatus::Pending,
            reply: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == WorkOrderStatus::Pending
    }

    pub fn evidence_power(&self) -> u32 {
        self.evidences.iter().map(Evidence::power).sum()
    }

    /// Last day a reply can arrive.
    pub fn reply_deadline(&self, jitter_days: u32) -> u32 {
        self.day + self.channel.def().reply_days + jitter_days
    }

    /// Attaches the reply. A replied order never changes again; returns
    /// false if it already had one.
    pub fn record_reply(&mut self, reply: BureauReply) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.reply = Some(reply);
        self.status = WorkOrderStatus::Replied;
        true
    }
}
