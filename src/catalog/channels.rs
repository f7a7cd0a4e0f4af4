//! Administrative channels a report can be filed through.

use crate::error::ActionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    #[serde(rename = "city_12345")]
    City12345,
    #[serde(rename = "province_12345")]
    Province12345,
    MinistryPhone,
    CityBureau,
    ProvinceBureau,
    #[serde(rename = "web_12345")]
    Web12345,
    BureauWebsite,
    LeaderBoard,
    StateCouncil,
    EducationSupervision,
    SocialMedia,
    OnsitePetition,
    MailPetition,
    DisciplineInspection,
}

/// Broad family of a channel; drives which substantive reply it can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelTier {
    Phone,
    Web,
    Public,
    Petition,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 14] = [
        ChannelKind::City12345,
        ChannelKind::Province12345,
        ChannelKind::MinistryPhone,
        ChannelKind::CityBureau,
        ChannelKind::ProvinceBureau,
        ChannelKind::Web12345,
        ChannelKind::BureauWebsite,
        ChannelKind::LeaderBoard,
        ChannelKind::StateCouncil,
        ChannelKind::EducationSupervision,
        ChannelKind::SocialMedia,
        ChannelKind::OnsitePetition,
        ChannelKind::MailPetition,
        ChannelKind::DisciplineInspection,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ChannelKind::City12345 => "city_12345",
            ChannelKind::Province12345 => "province_12345",
            ChannelKind::MinistryPhone => "ministry_phone",
            ChannelKind::CityBureau => "city_bureau",
            ChannelKind::ProvinceBureau => "province_bureau",
            ChannelKind::Web12345 => "web_12345",
            ChannelKind::BureauWebsite => "bureau_website",
            ChannelKind::LeaderBoard => "leader_board",
            ChannelKind::StateCouncil => "state_council",
            ChannelKind::EducationSupervision => "education_supervision",
            ChannelKind::SocialMedia => "social_media",
            ChannelKind::OnsitePetition => "onsite_petition",
            ChannelKind::MailPetition => "mail_petition",
            ChannelKind::DisciplineInspection => "discipline_inspection",
        }
    }

    pub fn def(&self) -> &'static ChannelDef {
        &CHANNEL_CATALOG[*self as usize]
    }

    pub fn is_petition(&self) -> bool {
        matches!(self, ChannelKind::OnsitePetition | ChannelKind::MailPetition)
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.def().name)
    }
}

impl FromStr for ChannelKind {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| ActionError::InvalidChannelKind(s.to_string()))
    }
}

/// Static definition of a reporting channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDef {
    pub kind: ChannelKind,
    pub name: &'static str,
    /// Whether the channel lets the reporter withhold their identity.
    pub anonymous: bool,
    /// Phone charges, postage or travel.
    pub cost: f64,
    /// Official reply deadline in days.
    pub reply_days: u32,
    /// Multiplier on a report's composite persuasiveness.
    pub effectiveness: f64,
    pub tier: ChannelTier,
    pub description: &'static str,
}

/// Indexed by `ChannelKind as usize`.
pub const CHANNEL_CATALOG: [ChannelDef; 14] = [
    ChannelDef {
        kind: ChannelKind::City12345,
        name: "City 12345 hotline",
        anonymous: true,
        cost: 1.0,
        reply_days: 15,
        effectiveness: 1.0,
        tier: ChannelTier::Phone,
        description: "The default citizen hotline; forwards cases to the district bureau",
    },
    ChannelDef {
        kind: ChannelKind::Province12345,
        name: "Provincial 12345 hotline",
        anonymous: true,
        cost: 1.5,
        reply_days: 15,
        effectiveness: 1.2,
        tier: ChannelTier::Phone,
        description: "Provincial dispatch lands on the city bureau with a little more weight",
    },
    ChannelDef {
        kind: ChannelKind::MinistryPhone,
        name: "Ministry of Education report line",
        anonymous: false,
        cost: 3.0,
        reply_days: 30,
        effectiveness: 1.6,
        tier: ChannelTier::Phone,
        description: "Rarely reached, but a ministry referral is hard to ignore",
    },
    ChannelDef {
        kind: ChannelKind::CityBureau,
        name: "City education bureau line",
        anonymous: false,
        cost: 1.0,
        reply_days: 15,
        effectiveness: 0.9,
        tier: ChannelTier::Phone,
        description: "Goes straight to the office that supervises the school",
    },
    ChannelDef {
        kind: ChannelKind::ProvinceBureau,
        name: "Provincial education department line",
        anonymous: false,
        cost: 2.0,
        reply_days: 20,
        effectiveness: 1.3,
        tier: ChannelTier::Phone,
        description: "One level above the city bureau",
    },
    ChannelDef {
        kind: ChannelKind::Web12345,
        name: "12345 mini-program",
        anonymous: true,
        cost: 0.0,
        reply_days: 15,
        effectiveness: 0.9,
        tier: ChannelTier::Web,
        description: "Free online form feeding the same queue as the hotline",
    },
    ChannelDef {
        kind: ChannelKind::BureauWebsite,
        name: "Education bureau website",
        anonymous: false,
        cost: 0.0,
        reply_days: 15,
        effectiveness: 0.8,
        tier: ChannelTier::Web,
        description: "A complaint form the bureau answers at its own pace",
    },
    ChannelDef {
        kind: ChannelKind::LeaderBoard,
        name: "Leaders' message board",
        anonymous: false,
        cost: 0.0,
        reply_days: 30,
        effectiveness: 1.3,
        tier: ChannelTier::Web,
        description: "Public messages addressed to local leadership",
    },
    ChannelDef {
        kind: ChannelKind::StateCouncil,
        name: "State Council online inspection",
        anonymous: false,
        cost: 0.0,
        reply_days: 30,
        effectiveness: 1.7,
        tier: ChannelTier::Web,
        description: "Central inspection platform; cases are tracked top-down",
    },
    ChannelDef {
        kind: ChannelKind::EducationSupervision,
        name: "China Education Supervision portal",
        anonymous: false,
        cost: 0.0,
        reply_days: 30,
        effectiveness: 1.5,
        tier: ChannelTier::Web,
        description: "National supervision office for school conduct",
    },
    ChannelDef {
        kind: ChannelKind::SocialMedia,
        name: "Short-video / microblog exposure",
        anonymous: false,
        cost: 0.0,
        reply_days: 7,
        effectiveness: 1.4,
        tier: ChannelTier::Public,
        description: "Fast and loud, and it points straight back at you",
    },
    ChannelDef {
        kind: ChannelKind::OnsitePetition,
        name: "In-person petition",
        anonymous: false,
        cost: 5.0,
        reply_days: 60,
        effectiveness: 1.8,
        tier: ChannelTier::Petition,
        description: "Registered petitions must be formally accepted and answered",
    },
    ChannelDef {
        kind: ChannelKind::MailPetition,
        name: "Mailed petition",
        anonymous: false,
        cost: 3.0,
        reply_days: 63,
        effectiveness: 1.4,
        tier: ChannelTier::Petition,
        description: "Slower than going in person, with the same formal weight",
    },
    ChannelDef {
        kind: ChannelKind::DisciplineInspection,
        name: "Discipline inspection commission",
        anonymous: false,
        cost: 0.0,
        reply_days: 90,
        effectiveness: 2.0,
        tier: ChannelTier::Petition,
        description: "Targets the officials who look the other way",
    },
];
