use crate::achievements::Achievements;
use crate::actions::{ActionResult, StateChanges};
use crate::catalog::evidence::total_catalog_power;
use crate::catalog::profile::{roll_class_detail, roll_school_profile};
use crate::catalog::{ChannelKind, ClassDetail, EvidenceKind, SchoolProfile};
use crate::core::config::EngineConfig;
use crate::core::constants::*;
use crate::ending::GameEndResult;
use crate::error::ConfigError;
use crate::events::{ActiveEffect, GameEvent};
use crate::replies::{WorkOrder, WorkOrderStatus};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::Invalid(format!("unknown difficulty `{s}`")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Rolled but not yet started.
    Init,
    Playing,
    Ended,
}

/// The three bounded counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    SchoolPressure,
    BureauFear,
    ExposureRisk,
}

/// A collected piece of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub kind: EvidenceKind,
    pub acquired_day: u32,
    /// False when someone may have noticed the acquisition.
    pub clean: bool,
}

impl Evidence {
    pub fn name(&self) -> &'static str {
        self.kind.def().name
    }

    pub fn power(&self) -> u32 {
        self.kind.def().power as u32
    }

    pub fn risk(&self) -> u32 {
        self.kind.def().risk as u32
    }
}

/// Root state of one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub session_id: Uuid,
    pub difficulty: Difficulty,
    pub enable_ai: bool,
    pub school_profile: SchoolProfile,
    pub class_detail: ClassDetail,
    pub school_pressure: i32,
    pub bureau_fear: i32,
    pub exposure_risk: i32,
    pub work_orders: u32,
    pub day: u32,
    pub total_cost: f64,
    pub collected_evidences: Vec<Evidence>,
    pub submitted_work_orders: Vec<WorkOrder>,
    pub game_events: Vec<GameEvent>,
    pub active_effects: Vec<ActiveEffect>,
    pub game_phase: GamePhase,
    /// Set by a wait action so the presentation layer can show the day passing.
    pub is_waiting: bool,
    pub last_action_result: Option<ActionResult>,
    pub action_taken_today: bool,
    /// Highest exposure ever observed.
    pub peak_exposure_risk: i32,
    pub cost_cap: Option<f64>,
    pub max_day: u32,
    pub achievements: Achievements,
    pub end_result: Option<GameEndResult>,
    pub next_work_order_id: u32,
    pub next_event_id: u32,
}

impl GameState {
    /// Rolls the school and class and seeds the counters for `difficulty`.
    /// The state starts in [`GamePhase::Init`]; call [`GameState::start`] to play.
    pub fn new<R: Rng>(
        difficulty: Difficulty,
        enable_ai: bool,
        config: &EngineConfig,
        rng: &mut R,
    ) -> Self {
        let settings = config.difficulty(difficulty);
        let session_id = uuid::Builder::from_random_bytes(rng.gen::<[u8; 16]>()).into_uuid();
        let school_profile = roll_school_profile(difficulty, rng);
        let class_detail = roll_class_detail(difficulty, rng);

        Self {
            session_id,
            difficulty,
            enable_ai,
            school_profile,
            class_detail,
            school_pressure: settings.baseline_pressure,
            bureau_fear: settings.baseline_fear,
            exposure_risk: settings.baseline_risk,
            work_orders: 0,
            day: 1,
            total_cost: 0.0,
            collected_evidences: Vec::new(),
            submitted_work_orders: Vec::new(),
            game_events: Vec::new(),
            active_effects: Vec::new(),
            game_phase: GamePhase::Init,
            is_waiting: false,
            last_action_result: None,
            action_taken_today: false,
            peak_exposure_risk: settings.baseline_risk,
            cost_cap: settings.cost_cap,
            max_day: settings.max_day,
            achievements: Achievements::default(),
            end_result: None,
            next_work_order_id: 1,
            next_event_id: 1,
        }
    }

    pub fn start(&mut self) {
        if self.game_phase != GamePhase::Init {
            return;
        }
        self.game_phase = GamePhase::Playing;
        info!(
            session = %self.session_id,
            difficulty = %self.difficulty,
            school = %self.school_profile.describe(),
            class = self.class_detail.name.name(),
            "game started"
        );
    }

    pub fn is_over(&self) -> bool {
        self.game_phase == GamePhase::Ended
    }

    pub fn counter(&self, counter: Counter) -> i32 {
        match counter {
            Counter::SchoolPressure => self.school_pressure,
            Counter::BureauFear => self.bureau_fear,
            Counter::ExposureRisk => self.exposure_risk,
        }
    }

    /// Adds `delta` to a counter, clamped to the counter range.
    /// Returns the delta actually applied.
    pub fn adjust(&mut self, counter: Counter, delta: i32) -> i32 {
        let slot = match counter {
            Counter::SchoolPressure => &mut self.school_pressure,
            Counter::BureauFear => &mut self.bureau_fear,
            Counter::ExposureRisk => &mut self.exposure_risk,
        };
        let before = *slot;
        *slot = (before + delta).clamp(COUNTER_MIN, COUNTER_MAX);
        let applied = *slot - before;
        self.peak_exposure_risk = self.peak_exposure_risk.max(self.exposure_risk);
        applied
    }

    /// Applies a batch of deltas and returns what actually landed after clamping.
    pub fn apply_changes(&mut self, changes: &StateChanges) -> StateChanges {
        let before_orders = self.work_orders;
        self.work_orders = self.work_orders.saturating_add_signed(changes.work_orders);
        self.total_cost += changes.cost;

        let applied = StateChanges {
            school_pressure: self.adjust(Counter::SchoolPressure, changes.school_pressure),
            bureau_fear: self.adjust(Counter::BureauFear, changes.bureau_fear),
            exposure_risk: self.adjust(Counter::ExposureRisk, changes.exposure_risk),
            work_orders: self.work_orders as i32 - before_orders as i32,
            cost: changes.cost,
        };
        self.check_invariants();
        applied
    }

    pub fn has_evidence(&self, kind: EvidenceKind) -> bool {
        self.collected_evidences.iter().any(|e| e.kind == kind)
    }

    pub fn evidence(&self, kind: EvidenceKind) -> Option<&Evidence> {
        self.collected_evidences.iter().find(|e| e.kind == kind)
    }

    pub fn uncollected_evidence(&self) -> Vec<EvidenceKind> {
        EvidenceKind::ALL
            .into_iter()
            .filter(|kind| !self.has_evidence(*kind))
            .collect()
    }

    /// The unresolved report on `channel`, if any.
    pub fn pending_order(&self, channel: ChannelKind) -> Option<&WorkOrder> {
        self.submitted_work_orders
            .iter()
            .find(|o| o.channel == channel && o.status == WorkOrderStatus::Pending)
    }

    pub fn pending_count(&self) -> usize {
        self.submitted_work_orders
            .iter()
            .filter(|o| o.status == WorkOrderStatus::Pending)
            .count()
    }

    pub fn channel_use_count(&self, channel: ChannelKind) -> usize {
        self.submitted_work_orders
            .iter()
            .filter(|o| o.channel == channel)
            .count()
    }

    pub fn used_channels(&self) -> BTreeSet<ChannelKind> {
        self.submitted_work_orders.iter().map(|o| o.channel).collect()
    }

    /// Whether a further spend of `cost` stays within the difficulty's cap.
    pub fn can_afford(&self, cost: f64) -> bool {
        self.cost_cap
            .map_or(true, |cap| self.total_cost + cost <= cap)
    }

    pub fn remaining_budget(&self) -> Option<f64> {
        self.cost_cap.map(|cap| (cap - self.total_cost).max(0.0))
    }

    /// Sum of the success-rate modifiers of all active effects, in percent.
    pub fn success_modifier(&self) -> i32 {
        self.active_effects
            .iter()
            .map(|e| e.success_rate)
            .sum::<i32>()
            .clamp(SUCCESS_MODIFIER_MIN, SUCCESS_MODIFIER_MAX)
    }

    pub fn class_has_started(&self) -> bool {
        self.day >= self.class_detail.start_day()
    }

    /// The class has run its full length.
    pub fn class_is_over(&self) -> bool {
        self.day >= self.class_detail.end_day()
    }

    /// Exposure has touched the maximum at some point, even if a later
    /// effect on the same day brought it back down.
    pub fn identity_exposed(&self) -> bool {
        self.exposure_risk.max(self.peak_exposure_risk) >= COUNTER_MAX
    }

    pub fn thresholds_met(&self, threshold: i32) -> bool {
        self.school_pressure >= threshold || self.bureau_fear >= threshold
    }

    pub fn identified_reports_filed(&self) -> bool {
        self.submitted_work_orders.iter().any(|o| !o.anonymous)
    }

    /// Replies that conceded something.
    pub fn substantive_replies(&self) -> usize {
        self.submitted_work_orders
            .iter()
            .filter_map(|o| o.reply.as_ref())
            .filter(|r| r.template.is_substantive())
            .count()
    }

    pub fn evidence_power_total(&self) -> u32 {
        self.collected_evidences.iter().map(Evidence::power).sum()
    }

    /// Accumulated evidence power as a fraction of the whole catalog.
    pub fn evidence_power_ratio(&self) -> f64 {
        (self.evidence_power_total() as f64 / total_catalog_power() as f64).min(1.0)
    }

    fn check_invariants(&self) {
        debug_assert!((COUNTER_MIN..=COUNTER_MAX).contains(&self.school_pressure));
        debug_assert!((COUNTER_MIN..=COUNTER_MAX).contains(&self.bureau_fear));
        debug_assert!((COUNTER_MIN..=COUNTER_MAX).contains(&self.exposure_risk));
        debug_assert!(self.total_cost >= 0.0);
        debug_assert!(self.day >= 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fresh(difficulty: Difficulty) -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        GameState::new(difficulty, false, &EngineConfig::default(), &mut rng)
    }

    #[test]
    fn test_new_game_state_baselines() {
        let state = fresh(Difficulty::Medium);
        assert_eq!(state.day, 1);
        assert_eq!(state.game_phase, GamePhase::Init);
        assert_eq!(state.school_pressure, 5);
        assert_eq!(state.bureau_fear, 10);
        assert_eq!(state.exposure_risk, 5);
        assert_eq!(state.total_cost, 0.0);
        assert_eq!(state.cost_cap, None);
        assert!(state.collected_evidences.is_empty());
    }

    #[test]
    fn test_hard_mode_has_cost_cap() {
        let state = fresh(Difficulty::Hard);
        assert_eq!(state.cost_cap, Some(HARD_MODE_COST_CAP));
        assert_eq!(state.max_day, HARD_MAX_DAY);
    }

    #[test]
    fn test_session_id_follows_seed() {
        let a = fresh(Difficulty::Easy);
        let b = fresh(Difficulty::Easy);
        assert_eq!(a.session_id, b.session_id);
        assert_eq!(a.school_profile, b.school_profile);

        let mut rng = ChaCha8Rng::seed_from_u64(43);
        let c = GameState::new(Difficulty::Easy, false, &EngineConfig::default(), &mut rng);
        assert_ne!(a.session_id, c.session_id);
    }

    #[test]
    fn test_start_moves_to_playing_once() {
        let mut state = fresh(Difficulty::Easy);
        state.start();
        assert_eq!(state.game_phase, GamePhase::Playing);
        state.game_phase = GamePhase::Ended;
        state.start();
        assert_eq!(state.game_phase, GamePhase::Ended);
    }

    #[test]
    fn test_adjust_clamps_and_reports_applied_delta() {
        let mut state = fresh(Difficulty::Easy);
        state.exposure_risk = 95;
        assert_eq!(state.adjust(Counter::ExposureRisk, 20), 5);
        assert_eq!(state.exposure_risk, 100);
        assert_eq!(state.peak_exposure_risk, 100);

        state.school_pressure = 3;
        assert_eq!(state.adjust(Counter::SchoolPressure, -10), -3);
        assert_eq!(state.school_pressure, 0);
    }

    #[test]
    fn test_peak_exposure_survives_cooldown() {
        let mut state = fresh(Difficulty::Easy);
        state.adjust(Counter::ExposureRisk, 85);
        state.adjust(Counter::ExposureRisk, -40);
        assert_eq!(state.exposure_risk, 45);
        assert_eq!(state.peak_exposure_risk, 85);
    }

    #[test]
    fn test_apply_changes_counts_cost_and_orders() {
        let mut state = fresh(Difficulty::Easy);
        let applied = state.apply_changes(&StateChanges {
            bureau_fear: 500,
            work_orders: 1,
            cost: 1.5,
            ..StateChanges::default()
        });
        assert_eq!(state.bureau_fear, 100);
        assert_eq!(applied.bureau_fear, 80);
        assert_eq!(state.work_orders, 1);
        assert_eq!(state.total_cost, 1.5);
    }

    #[test]
    fn test_can_afford_respects_cap() {
        let mut state = fresh(Difficulty::Hard);
        state.total_cost = 48.0;
        assert!(state.can_afford(2.0));
        assert!(!state.can_afford(5.0));
        assert_eq!(state.remaining_budget(), Some(2.0));

        let easy = fresh(Difficulty::Easy);
        assert!(easy.can_afford(1000.0));
        assert_eq!(easy.remaining_budget(), None);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("HARD".parse::<Difficulty>().ok(), Some(Difficulty::Hard));
        assert!("nightmare".parse::<Difficulty>().is_err());
    }
}
