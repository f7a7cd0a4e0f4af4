//! Evidence the player can gather before filing a report.

use crate::error::ActionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every kind of evidence that can be collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    Chat,
    Receipt,
    Photo,
    Recording,
    Petition,
    Schedule,
    Parent,
    Screenshot,
    App,
}

impl EvidenceKind {
    /// All evidence kinds in catalog order.
    pub const ALL: [EvidenceKind; 9] = [
        EvidenceKind::Chat,
        EvidenceKind::Receipt,
        EvidenceKind::Photo,
        EvidenceKind::Recording,
        EvidenceKind::Petition,
        EvidenceKind::Schedule,
        EvidenceKind::Parent,
        EvidenceKind::Screenshot,
        EvidenceKind::App,
    ];

    /// Stable key used by the presentation layer.
    pub fn key(&self) -> &'static str {
        match self {
            EvidenceKind::Chat => "chat",
            EvidenceKind::Receipt => "receipt",
            EvidenceKind::Photo => "photo",
            EvidenceKind::Recording => "recording",
            EvidenceKind::Petition => "petition",
            EvidenceKind::Schedule => "schedule",
            EvidenceKind::Parent => "parent",
            EvidenceKind::Screenshot => "screenshot",
            EvidenceKind::App => "app",
        }
    }

    pub fn def(&self) -> &'static EvidenceDef {
        &EVIDENCE_CATALOG[*self as usize]
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.def().name)
    }
}

impl FromStr for EvidenceKind {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvidenceKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| ActionError::InvalidEvidenceKind(s.to_string()))
    }
}

/// Static definition of a piece of evidence.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceDef {
    pub kind: EvidenceKind,
    pub name: &'static str,
    /// Persuasiveness when attached to a report (1-10).
    pub power: u8,
    /// Exposure contribution (1-10).
    pub risk: u8,
    /// How hard it is to obtain cleanly (1-10).
    pub difficulty: u8,
    pub description: &'static str,
}

/// Indexed by `EvidenceKind as usize`.
pub const EVIDENCE_CATALOG: [EvidenceDef; 9] = [
    EvidenceDef {
        kind: EvidenceKind::Chat,
        name: "Class group chat log",
        power: 6,
        risk: 3,
        difficulty: 2,
        description: "Group messages in which teachers order everyone to attend",
    },
    EvidenceDef {
        kind: EvidenceKind::Receipt,
        name: "Fee receipt / transfer record",
        power: 8,
        risk: 5,
        difficulty: 5,
        description: "Decisive once it carries the school's official seal",
    },
    EvidenceDef {
        kind: EvidenceKind::Photo,
        name: "On-site photo or video",
        power: 8,
        risk: 8,
        difficulty: 7,
        description: "Needs a clear angle and a timestamp watermark",
    },
    EvidenceDef {
        kind: EvidenceKind::Recording,
        name: "Audio recording",
        power: 10,
        risk: 6,
        difficulty: 7,
        description: "Must capture a teacher admitting the compulsion or the fees",
    },
    EvidenceDef {
        kind: EvidenceKind::Petition,
        name: "Classmates' joint letter",
        power: 6,
        risk: 9,
        difficulty: 5,
        description: "If it leaks, every signatory is exposed",
    },
    EvidenceDef {
        kind: EvidenceKind::Schedule,
        name: "Class timetable",
        power: 3,
        risk: 2,
        difficulty: 2,
        description: "Supporting evidence only",
    },
    EvidenceDef {
        kind: EvidenceKind::Parent,
        name: "Parent testimony",
        power: 6,
        risk: 5,
        difficulty: 5,
        description: "Parents may take their statements back",
    },
    EvidenceDef {
        kind: EvidenceKind::Screenshot,
        name: "Web screenshot",
        power: 3,
        risk: 2,
        difficulty: 1,
        description: "Its authenticity is easy to question",
    },
    EvidenceDef {
        kind: EvidenceKind::App,
        name: "Payment app record",
        power: 7,
        risk: 5,
        difficulty: 3,
        description: "Shows the school or an affiliated company as the payee",
    },
];

/// Sum of every catalog entry's power; the ceiling for accumulated evidence.
pub fn total_catalog_power() -> u32 {
    EVIDENCE_CATALOG.iter().map(|def| def.power as u32).sum()
}
