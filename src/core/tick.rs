//! Day advance: the per-turn orchestration function.
//!
//! [`advance_day`] runs once after every completed action. It moves the
//! calendar forward, lets active effects drift and expire, rolls for a random
//! event, delivers due replies, re-evaluates achievements and checks whether
//! the game is over. It returns a [`DayReport`] describing what happened so
//! the presentation layer can render the day without touching engine logic.

use crate::achievements::{evaluate_progress, AchievementId};
use crate::actions::StateChanges;
use crate::catalog::{ChannelKind, ReplyTemplate};
use crate::core::config::EngineConfig;
use crate::core::game_state::{GamePhase, GameState};
use crate::ending::{check_termination, conclude, EndingKind, GameEndResult};
use crate::events::{decay_active_effects, roll_daily_event, GameEvent};
use crate::replies::resolve_replies;
use rand::Rng;
use tracing::debug;

/// Something that happened during a day advance.
#[derive(Debug, Clone, PartialEq)]
pub enum DayEvent {
    EffectExpired {
        name: String,
    },
    RandomEvent(GameEvent),
    ReplyArrived {
        order_id: u32,
        channel: ChannelKind,
        template: ReplyTemplate,
    },
    AchievementUnlocked(AchievementId),
    GameOver(EndingKind),
}

/// Outcome of one day advance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayReport {
    /// The new day.
    pub day: u32,
    pub events: Vec<DayEvent>,
    pub new_event: Option<GameEvent>,
    /// Net deltas from drift, events and replies.
    pub changes: StateChanges,
    pub ending: Option<GameEndResult>,
}

impl DayReport {
    pub fn replies(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DayEvent::ReplyArrived { .. }))
            .count()
    }
}

/// Advances the session by one day. Does nothing once the game has ended.
///
/// Order: effect decay, event roll, replies, achievements, termination.
pub fn advance_day<R: Rng>(
    state: &mut GameState,
    config: &EngineConfig,
    rng: &mut R,
) -> DayReport {
    let mut report = DayReport {
        day: state.day,
        ..DayReport::default()
    };
    if state.game_phase != GamePhase::Playing {
        return report;
    }

    state.day += 1;
    state.action_taken_today = false;
    report.day = state.day;

    let (drift, expired) = decay_active_effects(state);
    report.changes.merge(&drift);
    report
        .events
        .extend(expired.into_iter().map(|name| DayEvent::EffectExpired { name }));

    if let Some((event, applied)) = roll_daily_event(state, config, rng) {
        report.changes.merge(&applied);
        report.events.push(DayEvent::RandomEvent(event.clone()));
        report.new_event = Some(event);
    }

    for reply in resolve_replies(state, config, rng) {
        report.changes.merge(&reply.changes);
        report.events.push(DayEvent::ReplyArrived {
            order_id: reply.order_id,
            channel: reply.channel,
            template: reply.template,
        });
    }

    report.events.extend(
        evaluate_progress(state)
            .into_iter()
            .map(DayEvent::AchievementUnlocked),
    );

    if let Some(kind) = check_termination(state, config) {
        report.events.push(DayEvent::GameOver(kind));
        report.ending = Some(conclude(state, kind));
    }

    debug!(
        day = state.day,
        pressure = state.school_pressure,
        fear = state.bureau_fear,
        exposure = state.exposure_risk,
        events = report.events.len(),
        "day advanced"
    );
    report
}
