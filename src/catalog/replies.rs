//! Reply archetypes a bureau can answer a report with.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTemplate {
    DenyHard,
    Disguise,
    Vague,
    Emotional,
    Delay,
    Compromise,
    Deflect,
    PetitionAcceptance,
    PhoneFeedback,
    WebReceipt,
}

/// Deltas applied when a reply is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyEffects {
    pub school_pressure: i32,
    pub bureau_fear: i32,
    pub exposure_risk: i32,
}

impl ReplyTemplate {
    pub const ALL: [ReplyTemplate; 10] = [
        ReplyTemplate::DenyHard,
        ReplyTemplate::Disguise,
        ReplyTemplate::Vague,
        ReplyTemplate::Emotional,
        ReplyTemplate::Delay,
        ReplyTemplate::Compromise,
        ReplyTemplate::Deflect,
        ReplyTemplate::PetitionAcceptance,
        ReplyTemplate::PhoneFeedback,
        ReplyTemplate::WebReceipt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReplyTemplate::DenyHard => "Flat denial",
            ReplyTemplate::Disguise => "Relabelled as voluntary",
            ReplyTemplate::Vague => "Boilerplate",
            ReplyTemplate::Emotional => "Appeal to understanding",
            ReplyTemplate::Delay => "Still investigating",
            ReplyTemplate::Compromise => "Partial correction",
            ReplyTemplate::Deflect => "Blame shifted",
            ReplyTemplate::PetitionAcceptance => "Petition accepted",
            ReplyTemplate::PhoneFeedback => "Hotline feedback",
            ReplyTemplate::WebReceipt => "Online case closed",
        }
    }

    /// Whether the reply concedes anything. Denials and stonewalling do not.
    pub fn is_substantive(&self) -> bool {
        !matches!(
            self,
            ReplyTemplate::DenyHard
                | ReplyTemplate::Disguise
                | ReplyTemplate::Vague
                | ReplyTemplate::Deflect
        )
    }

    pub fn effects(&self) -> ReplyEffects {
        let (school_pressure, bureau_fear, exposure_risk) = match self {
            ReplyTemplate::DenyHard => (-5, 0, 3),
            ReplyTemplate::Disguise => (-2, 2, 2),
            ReplyTemplate::Vague => (0, 2, 1),
            ReplyTemplate::Emotional => (3, 3, 0),
            ReplyTemplate::Delay => (0, 4, 0),
            ReplyTemplate::Compromise => (15, 8, 0),
            ReplyTemplate::Deflect => (-3, 1, 1),
            ReplyTemplate::PetitionAcceptance => (25, 12, 0),
            ReplyTemplate::PhoneFeedback => (12, 6, 0),
            ReplyTemplate::WebReceipt => (10, 5, 0),
        };
        ReplyEffects {
            school_pressure,
            bureau_fear,
            exposure_risk,
        }
    }

    /// Reply text. Placeholders: `{school}`, `{class}`, `{count}`, `{channel}`, `{day}`.
    pub fn text(&self) -> &'static str {
        match self {
            ReplyTemplate::DenyHard => "Regarding your report via {channel}: after verification, {school} has not organised any paid or compulsory make-up classes. The report does not match the facts. Thank you for your attention to education.",
            ReplyTemplate::Disguise => "Regarding your report via {channel}: the \"{class}\" programme at {school} is a voluntary service requested by parents. Students join of their own free will and no violation was found.",
            ReplyTemplate::Vague => "Your report via {channel} has been received and forwarded to the relevant department. We will continue to pay attention to the matter. Thank you for your understanding and support.",
            ReplyTemplate::Emotional => "Regarding your report via {channel}: the teachers at {school} gave up their own rest to help students with \"{class}\". We hope you can understand their good intentions. The school has been reminded to communicate better with families.",
            ReplyTemplate::Delay => "Your report via {channel} is still being investigated. The {count} piece(s) of material you provided are under review and the result will be announced in due course.",
            ReplyTemplate::Compromise => "Regarding your report via {channel}: an investigation found that \"{class}\" at {school} was not standardised. The school has been ordered to rectify it, stop collecting fees and refund what was charged.",
            ReplyTemplate::Deflect => "Regarding your report via {channel}: \"{class}\" was organised by an outside training company and is not the school's responsibility. The case has been forwarded to the market regulator.",
            ReplyTemplate::PetitionAcceptance => "Petition notice: your petition concerning {school} has been formally accepted on day {day}. After investigation, \"{class}\" has been suspended and those responsible will be dealt with according to the rules.",
            ReplyTemplate::PhoneFeedback => "Hotline feedback: following your call via {channel}, staff visited {school}. \"{class}\" has been halted and the school has promised not to organise similar classes again.",
            ReplyTemplate::WebReceipt => "Online case update: your report via {channel} with {count} attachment(s) has been handled. {school} has been instructed to cancel \"{class}\" and a follow-up check is scheduled.",
        }
    }
}
