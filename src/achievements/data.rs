//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId, AchievementRarity};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // ENDINGS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstVictory,
        name: "First Victory",
        description: "Stop a remedial class for the first time",
        rarity: AchievementRarity::Common,
        icon: "🏆",
    },
    AchievementDef {
        id: AchievementId::PerfectVictory,
        name: "Perfect Victory",
        description: "Win on easy with a single report",
        rarity: AchievementRarity::Rare,
        icon: "⭐",
    },
    AchievementDef {
        id: AchievementId::PersistentFighter,
        name: "Persistent Fighter",
        description: "Win on medium with at most three reports",
        rarity: AchievementRarity::Rare,
        icon: "🛡️",
    },
    AchievementDef {
        id: AchievementId::HardcoreChampion,
        name: "Hardcore Champion",
        description: "Win on hard with at most nine reports",
        rarity: AchievementRarity::Legendary,
        icon: "👑",
    },
    AchievementDef {
        id: AchievementId::LowCostVictory,
        name: "Shoestring Budget",
        description: "Win having spent less than 10",
        rarity: AchievementRarity::Uncommon,
        icon: "🪙",
    },
    AchievementDef {
        id: AchievementId::SpeedRun,
        name: "Speed Run",
        description: "Achieve a complete victory by day 10",
        rarity: AchievementRarity::Epic,
        icon: "⚡",
    },
    AchievementDef {
        id: AchievementId::HighRiskHighReward,
        name: "High Risk, High Reward",
        description: "Win after your exposure passed 80",
        rarity: AchievementRarity::Epic,
        icon: "🎲",
    },
    // ═══════════════════════════════════════════════════════════════
    // PROGRESS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::EvidenceMaster,
        name: "Evidence Master",
        description: "Collect every kind of evidence",
        rarity: AchievementRarity::Uncommon,
        icon: "🗂️",
    },
    AchievementDef {
        id: AchievementId::ChannelMaster,
        name: "Channel Master",
        description: "File a report through every channel",
        rarity: AchievementRarity::Epic,
        icon: "📡",
    },
    AchievementDef {
        id: AchievementId::SocialMediaStar,
        name: "Going Viral",
        description: "Post on social media three times",
        rarity: AchievementRarity::Uncommon,
        icon: "📣",
    },
    AchievementDef {
        id: AchievementId::DisciplineInspector,
        name: "Discipline Inspector",
        description: "Report to the discipline inspection commission",
        rarity: AchievementRarity::Rare,
        icon: "⚖️",
    },
    AchievementDef {
        id: AchievementId::PetitionExpert,
        name: "Petition Expert",
        description: "Submit a petition in person or by mail",
        rarity: AchievementRarity::Uncommon,
        icon: "📜",
    },
    AchievementDef {
        id: AchievementId::MinistryContact,
        name: "Straight to the Top",
        description: "Call the Ministry of Education",
        rarity: AchievementRarity::Common,
        icon: "☎️",
    },
    AchievementDef {
        id: AchievementId::StateCouncilReporter,
        name: "State Council Reporter",
        description: "Leave a message on the State Council platform",
        rarity: AchievementRarity::Common,
        icon: "🏛️",
    },
];

/// Get the definition for an achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_id_defined_once() {
        let ids: HashSet<_> = ALL_ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ALL_ACHIEVEMENTS.len());
        assert_eq!(ALL_ACHIEVEMENTS.len(), 14);
        assert!(get_achievement_def(AchievementId::ChannelMaster).is_some());
    }
}
