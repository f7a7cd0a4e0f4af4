//! The session object the presentation layer talks to.

use crate::achievements::Achievements;
use crate::actions::{self, ActionResult};
use crate::catalog::{ChannelKind, EvidenceKind};
use crate::core::config::EngineConfig;
use crate::core::game_state::{Difficulty, GameState};
use crate::core::tick::{advance_day, DayReport};
use crate::ending::GameEndResult;
use crate::error::ActionError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// One game: the state, its generator and the tuning it runs under.
///
/// Every successful action advances the day exactly once. Rejected actions
/// leave the state as it was apart from `last_action_result`.
#[derive(Debug, Clone)]
pub struct GameSession<R: Rng = ChaCha8Rng> {
    state: GameState,
    config: EngineConfig,
    rng: R,
    last_day: Option<DayReport>,
}

impl GameSession<ChaCha8Rng> {
    /// Starts a reproducible session with default tuning.
    pub fn seeded(difficulty: Difficulty, enable_ai: bool, seed: u64) -> Self {
        Self::new(
            difficulty,
            enable_ai,
            EngineConfig::default(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    pub fn from_entropy(difficulty: Difficulty, enable_ai: bool) -> Self {
        Self::new(
            difficulty,
            enable_ai,
            EngineConfig::default(),
            ChaCha8Rng::from_entropy(),
        )
    }
}

impl<R: Rng> GameSession<R> {
    /// Rolls a new game and starts it on day 1.
    pub fn new(difficulty: Difficulty, enable_ai: bool, config: EngineConfig, mut rng: R) -> Self {
        let mut state = GameState::new(difficulty, enable_ai, &config, &mut rng);
        state.start();
        Self {
            state,
            config,
            rng,
            last_day: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn end_result(&self) -> Option<&GameEndResult> {
        self.state.end_result.as_ref()
    }

    pub fn achievements(&self) -> &Achievements {
        &self.state.achievements
    }

    /// What happened during the most recent day advance.
    pub fn last_day_report(&self) -> Option<&DayReport> {
        self.last_day.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn can_act(&self) -> bool {
        actions::can_act(&self.state)
    }

    pub fn collect_evidence(&mut self, kind: EvidenceKind) -> ActionResult {
        let outcome = actions::collect_evidence(&mut self.state, kind, &mut self.rng);
        self.finish(outcome)
    }

    pub fn collect_evidence_key(&mut self, key: &str) -> ActionResult {
        match key.parse::<EvidenceKind>() {
            Ok(kind) => self.collect_evidence(kind),
            Err(err) => self.finish(Err(err)),
        }
    }

    /// Files a report. `anonymous: None` uses the channel's default.
    pub fn submit_report(
        &mut self,
        channel: ChannelKind,
        evidences: &[EvidenceKind],
        anonymous: Option<bool>,
    ) -> ActionResult {
        let outcome = actions::submit_report(&mut self.state, channel, evidences, anonymous);
        self.finish(outcome)
    }

    pub fn submit_report_keys(
        &mut self,
        channel: &str,
        evidences: &[&str],
        anonymous: Option<bool>,
    ) -> ActionResult {
        let parsed = channel.parse::<ChannelKind>().and_then(|channel| {
            evidences
                .iter()
                .map(|key| key.parse::<EvidenceKind>())
                .collect::<Result<Vec<_>, ActionError>>()
                .map(|kinds| (channel, kinds))
        });
        match parsed {
            Ok((channel, kinds)) => self.submit_report(channel, &kinds, anonymous),
            Err(err) => self.finish(Err(err)),
        }
    }

    pub fn wait_one_day(&mut self) -> ActionResult {
        let outcome = actions::wait_one_day(&mut self.state);
        self.finish(outcome)
    }

    /// Advances the day after a successful action and records the result.
    fn finish(&mut self, outcome: Result<ActionResult, ActionError>) -> ActionResult {
        let result = match outcome {
            Ok(mut result) => {
                let report = advance_day(&mut self.state, &self.config, &mut self.rng);
                result.changes.merge(&report.changes);
                result.new_event = report.new_event.clone();
                self.last_day = Some(report);
                result
            }
            Err(err) => {
                debug!(day = self.state.day, error = %err, "action rejected");
                ActionResult::rejected(err)
            }
        };
        self.state.last_action_result = Some(result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::GamePhase;

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let mut a = GameSession::seeded(Difficulty::Medium, false, 99);
        let mut b = GameSession::seeded(Difficulty::Medium, false, 99);
        for kind in [EvidenceKind::Chat, EvidenceKind::Photo, EvidenceKind::App] {
            assert_eq!(a.collect_evidence(kind), b.collect_evidence(kind));
        }
        for _ in 0..10 {
            a.wait_one_day();
            b.wait_one_day();
        }
        assert_eq!(a.state().exposure_risk, b.state().exposure_risk);
        assert_eq!(a.state().game_events, b.state().game_events);
        assert_eq!(a.state().session_id, b.state().session_id);
    }

    #[test]
    fn test_result_changes_include_the_day_advance() {
        let config = EngineConfig {
            event_base_chance: 1.0,
            ..EngineConfig::default()
        };
        for seed in 0..10 {
            let mut session = GameSession::new(
                Difficulty::Easy,
                false,
                config.clone(),
                ChaCha8Rng::seed_from_u64(seed),
            );
            let before = session.state().clone();
            let result = session.wait_one_day();
            let after = session.state();
            assert!(result.new_event.is_some());
            assert_eq!(
                result.changes.exposure_risk,
                after.exposure_risk - before.exposure_risk
            );
            assert_eq!(
                result.changes.bureau_fear,
                after.bureau_fear - before.bureau_fear
            );
        }
    }

    #[test]
    fn test_new_session_is_playing_on_day_one() {
        let session = GameSession::seeded(Difficulty::Easy, true, 1);
        assert_eq!(session.state().game_phase, GamePhase::Playing);
        assert_eq!(session.state().day, 1);
        assert!(session.can_act());
        assert!(session.end_result().is_none());
    }

    #[test]
    fn test_successful_action_advances_one_day() {
        let mut session = GameSession::seeded(Difficulty::Easy, false, 2);
        let result = session.wait_one_day();
        assert!(result.success);
        assert_eq!(session.state().day, 2);
        assert!(session.can_act());
        assert_eq!(session.last_day_report().map(|r| r.day), Some(2));
        assert_eq!(session.state().last_action_result.as_ref(), Some(&result));
    }

    #[test]
    fn test_rejected_action_keeps_the_day() {
        let mut session = GameSession::seeded(Difficulty::Easy, false, 3);
        let result = session.collect_evidence_key("illegal");
        assert!(!result.success);
        assert_eq!(
            result.error,
            Some(ActionError::InvalidEvidenceKind("illegal".to_string()))
        );
        assert_eq!(session.state().day, 1);

        let result = session.submit_report_keys("city_12345", &["chat"], None);
        assert!(matches!(
            result.error,
            Some(ActionError::InvalidEvidenceSelection(_))
        ));
        let result = session.submit_report_keys("fax", &["chat"], None);
        assert_eq!(
            result.error,
            Some(ActionError::InvalidChannelKind("fax".to_string()))
        );
        assert_eq!(session.state().day, 1);
    }
}
