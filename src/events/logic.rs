//! Daily random events and the effects they leave behind.

use super::types::{ActiveEffect, GameEvent};
use crate::actions::StateChanges;
use crate::catalog::EventKind;
use crate::core::config::EngineConfig;
use crate::core::game_state::GameState;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

/// Probability that an event fires today.
pub fn event_chance(state: &GameState, config: &EngineConfig) -> f64 {
    let bonus = config.difficulty(state.difficulty).event_chance_bonus;
    (config.event_base_chance + bonus + state.exposure_risk as f64 / config.event_risk_divisor)
        .clamp(0.0, 1.0)
}

/// Rolls for at most one event and fires it.
pub fn roll_daily_event<R: Rng>(
    state: &mut GameState,
    config: &EngineConfig,
    rng: &mut R,
) -> Option<(GameEvent, StateChanges)> {
    if !config.events_enabled {
        return None;
    }
    if !rng.gen_bool(event_chance(state, config)) {
        return None;
    }
    let kind = *EventKind::ALL.choose(rng)?;
    Some(fire_event(state, kind))
}

/// Applies an event's immediate deltas, records it and spawns its lingering
/// effect, if any. Returns the event and the deltas that landed.
pub fn fire_event(state: &mut GameState, kind: EventKind) -> (GameEvent, StateChanges) {
    let def = kind.def();
    let applied = state.apply_changes(&StateChanges {
        school_pressure: def.effects.school_pressure,
        bureau_fear: def.effects.bureau_fear,
        exposure_risk: def.effects.exposure_risk,
        work_orders: def.effects.work_orders,
        cost: 0.0,
    });

    let id = state.next_event_id;
    state.next_event_id += 1;
    let event = GameEvent {
        id,
        kind,
        event_type: def.event_type,
        title: def.title.to_string(),
        description: def.description.to_string(),
        effects: def.effects,
        duration: def.duration,
        day: state.day,
    };

    if let Some(duration) = def.duration.filter(|d| *d > 0) {
        state.active_effects.push(ActiveEffect {
            id,
            name: def.title.to_string(),
            remaining: duration,
            success_rate: def.effects.success_rate,
            daily: def.daily,
        });
    }
    state.game_events.push(event.clone());

    info!(day = state.day, event = def.title, "random event");
    (event, applied)
}

/// Applies each active effect's daily drift, then counts it down.
/// Returns the drift that landed and the names of effects that expired.
pub fn decay_active_effects(state: &mut GameState) -> (StateChanges, Vec<String>) {
    let drift = state
        .active_effects
        .iter()
        .fold(StateChanges::default(), |mut acc, effect| {
            acc.school_pressure += effect.daily.school_pressure;
            acc.bureau_fear += effect.daily.bureau_fear;
            acc
        });
    let applied = if drift.is_empty() {
        drift
    } else {
        state.apply_changes(&drift)
    };

    let mut expired = Vec::new();
    state.active_effects.retain_mut(|effect| {
        effect.remaining = effect.remaining.saturating_sub(1);
        if effect.remaining == 0 {
            expired.push(effect.name.clone());
            false
        } else {
            true
        }
    });
    (applied, expired)
}
