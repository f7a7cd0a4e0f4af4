//! Achievement types and the per-session unlock ledger.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl AchievementRarity {
    pub fn name(&self) -> &'static str {
        match self {
            AchievementRarity::Common => "Common",
            AchievementRarity::Uncommon => "Uncommon",
            AchievementRarity::Rare => "Rare",
            AchievementRarity::Epic => "Epic",
            AchievementRarity::Legendary => "Legendary",
        }
    }
}

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Endings
    FirstVictory,
    PerfectVictory,     // easy, one report
    PersistentFighter,  // medium, at most 3 reports
    HardcoreChampion,   // hard, at most 9 reports
    LowCostVictory,
    SpeedRun,
    HighRiskHighReward,
    // Progress
    EvidenceMaster,
    ChannelMaster,
    SocialMediaStar,
    DisciplineInspector,
    PetitionExpert,
    MinistryContact,
    StateCouncilReporter,
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: AchievementRarity,
    pub icon: &'static str,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    /// Game day on which it was unlocked.
    pub day: u32,
}

/// An achievement as shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    pub icon: String,
    pub rarity: AchievementRarity,
}

/// Unlock ledger for one session. Entries are never removed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Achievements {
    pub unlocked: HashMap<AchievementId, UnlockedAchievement>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId, day: u32) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(id, UnlockedAchievement { day });
        true
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn total_count(&self) -> usize {
        super::data::ALL_ACHIEVEMENTS.len()
    }

    /// Every achievement in display order with its unlock flag.
    pub fn view(&self) -> Vec<Achievement> {
        super::data::ALL_ACHIEVEMENTS
            .iter()
            .map(|def| Achievement {
                id: def.id,
                name: def.name.to_string(),
                description: def.description.to_string(),
                unlocked: self.is_unlocked(def.id),
                icon: def.icon.to_string(),
                rarity: def.rarity,
            })
            .collect()
    }

    pub fn unlocked_view(&self) -> Vec<Achievement> {
        self.view().into_iter().filter(|a| a.unlocked).collect()
    }
}
