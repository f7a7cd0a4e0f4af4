//! Unlock checks, run after every day advance and once at the end.

use super::types::{AchievementId, Achievements};
use crate::catalog::{ChannelKind, EvidenceKind};
use crate::core::constants::*;
use crate::core::game_state::{Difficulty, GameState};
use crate::ending::EndingKind;
use tracing::info;

impl Achievements {
    /// Called whenever the state changes. Unlocks collection and channel
    /// milestones.
    pub fn on_progress(&mut self, state: &GameState) -> Vec<AchievementId> {
        let day = state.day;
        let mut earned = Vec::new();
        let mut check = |id: AchievementId, met: bool| {
            if met && self.unlock(id, day) {
                earned.push(id);
            }
        };

        check(
            AchievementId::EvidenceMaster,
            EvidenceKind::ALL.iter().all(|kind| state.has_evidence(*kind)),
        );
        check(
            AchievementId::ChannelMaster,
            state.used_channels().len() == ChannelKind::ALL.len(),
        );
        check(
            AchievementId::SocialMediaStar,
            state.channel_use_count(ChannelKind::SocialMedia) >= SOCIAL_MEDIA_STAR_USES,
        );
        check(
            AchievementId::DisciplineInspector,
            state.channel_use_count(ChannelKind::DisciplineInspection) > 0,
        );
        check(
            AchievementId::PetitionExpert,
            state.channel_use_count(ChannelKind::OnsitePetition) > 0
                || state.channel_use_count(ChannelKind::MailPetition) > 0,
        );
        check(
            AchievementId::MinistryContact,
            state.channel_use_count(ChannelKind::MinistryPhone) > 0,
        );
        check(
            AchievementId::StateCouncilReporter,
            state.channel_use_count(ChannelKind::StateCouncil) > 0,
        );
        earned
    }

    /// Called once when the session ends. Unlocks the ending achievements.
    pub fn on_game_end(&mut self, state: &GameState, kind: EndingKind) -> Vec<AchievementId> {
        let mut earned = self.on_progress(state);
        if !kind.is_success() {
            return earned;
        }

        let day = state.day;
        let reports = state.submitted_work_orders.len();
        let mut check = |id: AchievementId, met: bool| {
            if met && self.unlock(id, day) {
                earned.push(id);
            }
        };

        check(AchievementId::FirstVictory, true);
        check(
            AchievementId::PerfectVictory,
            state.difficulty == Difficulty::Easy && reports == PERFECT_VICTORY_REPORTS,
        );
        check(
            AchievementId::PersistentFighter,
            state.difficulty == Difficulty::Medium && reports <= PERSISTENT_FIGHTER_REPORTS,
        );
        check(
            AchievementId::HardcoreChampion,
            state.difficulty == Difficulty::Hard && reports <= HARDCORE_CHAMPION_REPORTS,
        );
        check(
            AchievementId::LowCostVictory,
            state.total_cost < LOW_COST_VICTORY_LIMIT,
        );
        check(
            AchievementId::SpeedRun,
            kind == EndingKind::Victory && state.day <= SPEED_RUN_DAY_LIMIT,
        );
        check(
            AchievementId::HighRiskHighReward,
            state.peak_exposure_risk > HIGH_RISK_THRESHOLD,
        );
        earned
    }
}

fn announce(earned: &[AchievementId], day: u32) {
    for id in earned {
        if let Some(def) = super::get_achievement_def(*id) {
            info!(day, achievement = def.name, "achievement unlocked");
        }
    }
}

/// Re-evaluates progress achievements against the session state.
pub fn evaluate_progress(state: &mut GameState) -> Vec<AchievementId> {
    let mut ledger = std::mem::take(&mut state.achievements);
    let earned = ledger.on_progress(state);
    state.achievements = ledger;
    announce(&earned, state.day);
    earned
}

/// Settles every achievement at the end of the session.
pub fn evaluate_ending(state: &mut GameState, kind: EndingKind) -> Vec<AchievementId> {
    let mut ledger = std::mem::take(&mut state.achievements);
    let earned = ledger.on_game_end(state, kind);
    state.achievements = ledger;
    announce(&earned, state.day);
    earned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use crate::core::game_state::Evidence;
    use crate::replies::WorkOrder;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state(difficulty: Difficulty) -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut state = GameState::new(difficulty, false, &EngineConfig::default(), &mut rng);
        state.start();
        state
    }

    fn file(state: &mut GameState, channel: ChannelKind) {
        let id = state.submitted_work_orders.len() as u32 + 1;
        state
            .submitted_work_orders
            .push(WorkOrder::new(id, channel, Vec::new(), state.day, false, 1.0));
    }

    #[test]
    fn test_channel_achievements() {
        let mut s = state(Difficulty::Easy);
        file(&mut s, ChannelKind::MinistryPhone);
        file(&mut s, ChannelKind::MailPetition);
        let earned = evaluate_progress(&mut s);
        assert!(earned.contains(&AchievementId::MinistryContact));
        assert!(earned.contains(&AchievementId::PetitionExpert));
        assert!(!s.achievements.is_unlocked(AchievementId::StateCouncilReporter));

        assert!(evaluate_progress(&mut s).is_empty());
    }

    #[test]
    fn test_social_media_star_needs_three_posts() {
        let mut s = state(Difficulty::Easy);
        file(&mut s, ChannelKind::SocialMedia);
        file(&mut s, ChannelKind::SocialMedia);
        evaluate_progress(&mut s);
        assert!(!s.achievements.is_unlocked(AchievementId::SocialMediaStar));
        file(&mut s, ChannelKind::SocialMedia);
        evaluate_progress(&mut s);
        assert!(s.achievements.is_unlocked(AchievementId::SocialMediaStar));
    }

    #[test]
    fn test_evidence_and_channel_masters() {
        let mut s = state(Difficulty::Medium);
        for kind in EvidenceKind::ALL {
            s.collected_evidences.push(Evidence {
                kind,
                acquired_day: 1,
                clean: true,
            });
        }
        for channel in ChannelKind::ALL {
            file(&mut s, channel);
        }
        let earned = evaluate_progress(&mut s);
        assert!(earned.contains(&AchievementId::EvidenceMaster));
        assert!(earned.contains(&AchievementId::ChannelMaster));
        assert!(earned.contains(&AchievementId::DisciplineInspector));
    }

    #[test]
    fn test_easy_single_report_victory() {
        let mut s = state(Difficulty::Easy);
        s.day = 9;
        file(&mut s, ChannelKind::Web12345);
        let earned = evaluate_ending(&mut s, EndingKind::Victory);
        for id in [
            AchievementId::FirstVictory,
            AchievementId::PerfectVictory,
            AchievementId::LowCostVictory,
            AchievementId::SpeedRun,
        ] {
            assert!(earned.contains(&id), "{id:?}");
        }
        assert!(!earned.contains(&AchievementId::HighRiskHighReward));
    }

    #[test]
    fn test_speed_run_requires_full_victory() {
        let mut s = state(Difficulty::Easy);
        s.day = 8;
        s.total_cost = 25.0;
        evaluate_ending(&mut s, EndingKind::Pyrrhic);
        assert!(s.achievements.is_unlocked(AchievementId::FirstVictory));
        assert!(!s.achievements.is_unlocked(AchievementId::SpeedRun));
        assert!(!s.achievements.is_unlocked(AchievementId::LowCostVictory));
    }

    #[test]
    fn test_high_risk_uses_peak_exposure() {
        let mut s = state(Difficulty::Hard);
        s.peak_exposure_risk = 85;
        s.exposure_risk = 30;
        s.day = 20;
        evaluate_ending(&mut s, EndingKind::Victory);
        assert!(s.achievements.is_unlocked(AchievementId::HighRiskHighReward));
        assert!(s.achievements.is_unlocked(AchievementId::HardcoreChampion));
    }

    #[test]
    fn test_losses_unlock_no_ending_achievements() {
        let mut s = state(Difficulty::Easy);
        file(&mut s, ChannelKind::StateCouncil);
        let earned = evaluate_ending(&mut s, EndingKind::Backfire);
        assert_eq!(earned, vec![AchievementId::StateCouncilReporter]);
        assert!(!s.achievements.is_unlocked(AchievementId::FirstVictory));
    }
}
