//! Random event definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Policy,
    School,
    Personal,
    External,
    Reward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    InspectionCampaign,
    BurdenReductionNotice,
    LeakerHunt,
    AllHandsWarning,
    ConsentForms,
    ParentsFindOut,
    ClassmateSupport,
    ExamWeek,
    LocalNews,
    HotlineMaintenance,
    OtherParentReports,
    QuietPeriod,
    InspectorInterest,
}

impl EventKind {
    pub const ALL: [EventKind; 13] = [
        EventKind::InspectionCampaign,
        EventKind::BurdenReductionNotice,
        EventKind::LeakerHunt,
        EventKind::AllHandsWarning,
        EventKind::ConsentForms,
        EventKind::ParentsFindOut,
        EventKind::ClassmateSupport,
        EventKind::ExamWeek,
        EventKind::LocalNews,
        EventKind::HotlineMaintenance,
        EventKind::OtherParentReports,
        EventKind::QuietPeriod,
        EventKind::InspectorInterest,
    ];

    pub fn def(&self) -> &'static EventDef {
        &EVENT_CATALOG[*self as usize]
    }
}

/// Immediate deltas an event applies, plus the roll modifier it grants while active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEffects {
    pub school_pressure: i32,
    pub bureau_fear: i32,
    pub exposure_risk: i32,
    pub work_orders: i32,
    /// Percentage points added to success rolls while the event lingers.
    pub success_rate: i32,
}

const fn effects(
    school_pressure: i32,
    bureau_fear: i32,
    exposure_risk: i32,
    work_orders: i32,
    success_rate: i32,
) -> EventEffects {
    EventEffects {
        school_pressure,
        bureau_fear,
        exposure_risk,
        work_orders,
        success_rate,
    }
}

/// Per-day drift applied while a lingering event is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDrift {
    pub school_pressure: i32,
    pub bureau_fear: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDef {
    pub kind: EventKind,
    pub event_type: EventType,
    pub title: &'static str,
    pub description: &'static str,
    pub effects: EventEffects,
    /// Days the event lingers as an active effect.
    pub duration: Option<u32>,
    pub daily: DailyDrift,
}

const NO_DRIFT: DailyDrift = DailyDrift {
    school_pressure: 0,
    bureau_fear: 0,
};

/// Indexed by `EventKind as usize`.
pub const EVENT_CATALOG: [EventDef; 13] = [
    EventDef {
        kind: EventKind::InspectionCampaign,
        event_type: EventType::Policy,
        title: "Provincial crackdown on paid tutoring",
        description: "The province launches a special campaign against paid make-up classes. Every complaint is now logged twice.",
        effects: effects(0, 10, 0, 0, 15),
        duration: Some(5),
        daily: DailyDrift {
            school_pressure: 0,
            bureau_fear: 1,
        },
    },
    EventDef {
        kind: EventKind::BurdenReductionNotice,
        event_type: EventType::Policy,
        title: "Ministry restates the burden-reduction rules",
        description: "A fresh notice reminds schools that compulsory extra classes are banned.",
        effects: effects(4, 6, 0, 0, 0),
        duration: None,
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::LeakerHunt,
        event_type: EventType::School,
        title: "Homeroom teacher hunts for the leaker",
        description: "Phones are checked during self-study. Someone mentions your name.",
        effects: effects(0, 0, 10, 0, 0),
        duration: None,
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::AllHandsWarning,
        event_type: EventType::School,
        title: "Principal's all-hands warning",
        description: "At assembly the principal warns against 'airing the school's laundry'.",
        effects: effects(-5, 0, 5, 0, 0),
        duration: None,
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::ConsentForms,
        event_type: EventType::School,
        title: "'Voluntary' consent forms handed out",
        description: "Parents are asked to sign that the classes are voluntary. Reports now look weaker on paper.",
        effects: effects(-3, 0, 0, 0, -10),
        duration: Some(3),
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::ParentsFindOut,
        event_type: EventType::Personal,
        title: "Your parents find out",
        description: "They are worried the school will hold it against you.",
        effects: effects(0, 0, 6, 0, 0),
        duration: None,
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::ClassmateSupport,
        event_type: EventType::Personal,
        title: "A classmate quietly backs you",
        description: "Someone else starts asking questions in the group chat, drawing attention away from you.",
        effects: effects(0, 0, -5, 0, 0),
        duration: None,
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::ExamWeek,
        event_type: EventType::Personal,
        title: "Exam week",
        description: "Revision eats every spare minute.",
        effects: effects(0, 0, 0, 0, -5),
        duration: Some(2),
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::LocalNews,
        event_type: EventType::External,
        title: "Local media covers illegal tutoring",
        description: "A city paper runs a piece on schools charging for extra classes.",
        effects: effects(6, 6, 0, 0, 0),
        duration: None,
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::HotlineMaintenance,
        event_type: EventType::External,
        title: "Hotline system maintenance",
        description: "The complaint platform is being upgraded. Cases queue up and lose urgency.",
        effects: effects(0, 0, 0, 0, -15),
        duration: Some(3),
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::OtherParentReports,
        event_type: EventType::External,
        title: "Another parent files a report",
        description: "You are not the only one. A second complaint lands on the same desk.",
        effects: effects(0, 5, 0, 1, 0),
        duration: None,
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::QuietPeriod,
        event_type: EventType::Reward,
        title: "Attention shifts elsewhere",
        description: "A sports meet takes over the school's attention for a while.",
        effects: effects(0, 0, -8, 0, 0),
        duration: None,
        daily: NO_DRIFT,
    },
    EventDef {
        kind: EventKind::InspectorInterest,
        event_type: EventType::Reward,
        title: "An inspector takes an interest",
        description: "A supervisor from the bureau asks for the case file by name.",
        effects: effects(5, 5, 0, 0, 10),
        duration: Some(4),
        daily: DailyDrift {
            school_pressure: 1,
            bureau_fear: 0,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_kinds() {
        for (idx, kind) in EventKind::ALL.iter().enumerate() {
            assert_eq!(EVENT_CATALOG[idx].kind, *kind);
        }
    }

    #[test]
    fn test_roll_modifiers_only_on_lingering_events() {
        for def in &EVENT_CATALOG {
            if def.effects.success_rate != 0 || def.daily != DailyDrift::default() {
                assert!(def.duration.is_some(), "{} should linger", def.title);
            }
        }
    }
}
