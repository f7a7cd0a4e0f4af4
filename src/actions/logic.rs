//! Action resolvers: collect evidence, submit a report, wait.
//!
//! Each resolver validates, mutates the state and closes the day's action
//! gate. None of them advance the day; [`crate::core::tick::advance_day`]
//! does that.

use super::types::{ActionResult, StateChanges};
use crate::catalog::{ChannelDef, ChannelKind, EvidenceDef, EvidenceKind};
use crate::core::constants::*;
use crate::core::game_state::{Evidence, GamePhase, GameState};
use crate::error::ActionError;
use crate::replies::WorkOrder;
use rand::Rng;
use tracing::debug;

/// Whether the player may still act today.
pub fn can_act(state: &GameState) -> bool {
    ensure_can_act(state).is_ok()
}

pub fn ensure_can_act(state: &GameState) -> Result<(), ActionError> {
    match state.game_phase {
        GamePhase::Init => Err(ActionError::NotStarted),
        GamePhase::Ended => Err(ActionError::GameEnded),
        GamePhase::Playing if state.action_taken_today => Err(ActionError::ActionAlreadyUsed),
        GamePhase::Playing => Ok(()),
    }
}

/// Chance that acquiring evidence of the given difficulty goes unnoticed.
pub fn clean_acquisition_chance(difficulty: u8, success_modifier: i32) -> f64 {
    (CLEAN_ACQUISITION_BASE - CLEAN_ACQUISITION_PER_DIFFICULTY * difficulty as f64
        + success_modifier as f64 / 100.0)
        .clamp(CLEAN_ACQUISITION_MIN, CLEAN_ACQUISITION_MAX)
}

/// Exposure gained from acquiring a piece of evidence.
pub fn acquisition_exposure(def: &EvidenceDef, clean: bool) -> i32 {
    let base = def.risk as f64
        * (ACQUISITION_RISK_BASE + def.difficulty as f64 / ACQUISITION_RISK_DIFFICULTY_DIVISOR);
    let scaled = if clean {
        base
    } else {
        base * MESSY_ACQUISITION_MULTIPLIER
    };
    scaled.round() as i32
}

pub fn report_persuasiveness(total_power: u32, channel: &ChannelDef, success_modifier: i32) -> f64 {
    total_power as f64 * channel.effectiveness * (1.0 + success_modifier as f64 / 100.0)
}

pub fn anonymity_factor(channel: &ChannelDef, anonymous: bool) -> f64 {
    match (channel.anonymous, anonymous) {
        (_, true) => ANONYMOUS_RISK_FACTOR,
        (true, false) => IDENTIFIED_RISK_FACTOR,
        (false, false) => FORCED_IDENTITY_RISK_FACTOR,
    }
}

pub fn collect_evidence<R: Rng>(
    state: &mut GameState,
    kind: EvidenceKind,
    rng: &mut R,
) -> Result<ActionResult, ActionError> {
    ensure_can_act(state)?;
    if state.has_evidence(kind) {
        return Err(ActionError::EvidenceAlreadyCollected(kind));
    }

    let def = kind.def();
    let chance = clean_acquisition_chance(def.difficulty, state.success_modifier());
    let clean = rng.gen_bool(chance);
    let applied = state.apply_changes(&StateChanges {
        exposure_risk: acquisition_exposure(def, clean),
        ..StateChanges::default()
    });

    state.collected_evidences.push(Evidence {
        kind,
        acquired_day: state.day,
        clean,
    });
    state.action_taken_today = true;
    state.is_waiting = false;

    debug!(
        day = state.day,
        evidence = kind.key(),
        clean,
        exposure = applied.exposure_risk,
        "evidence collected"
    );

    let description = if clean {
        format!("You obtained the {} without drawing attention.", def.name.to_lowercase())
    } else {
        format!("You got the {}, but someone may have noticed.", def.name.to_lowercase())
    };
    Ok(ActionResult::succeeded(description, applied).with_feedback(def.description))
}

/// Checks a report's evidence list and snapshots the chosen pieces.
fn select_evidence(
    state: &GameState,
    kinds: &[EvidenceKind],
) -> Result<Vec<Evidence>, ActionError> {
    if kinds.is_empty() {
        return Err(ActionError::InvalidEvidenceSelection(
            "attach at least one piece of evidence".to_string(),
        ));
    }
    if kinds.len() > MAX_EVIDENCE_PER_REPORT {
        return Err(ActionError::InvalidEvidenceSelection(format!(
            "at most {MAX_EVIDENCE_PER_REPORT} pieces can be attached, got {}",
            kinds.len()
        )));
    }

    let mut selected: Vec<Evidence> = Vec::with_capacity(kinds.len());
    for kind in kinds {
        if selected.iter().any(|e| e.kind == *kind) {
            return Err(ActionError::InvalidEvidenceSelection(format!(
                "{kind} is attached twice"
            )));
        }
        let evidence = state.evidence(*kind).ok_or_else(|| {
            ActionError::InvalidEvidenceSelection(format!("{kind} has not been collected"))
        })?;
        selected.push(*evidence);
    }
    Ok(selected)
}

/// Files a report. `anonymous: None` uses the channel's default.
pub fn submit_report(
    state: &mut GameState,
    channel: ChannelKind,
    kinds: &[EvidenceKind],
    anonymous: Option<bool>,
) -> Result<ActionResult, ActionError> {
    ensure_can_act(state)?;
    let evidences = select_evidence(state, kinds)?;

    if state.pending_order(channel).is_some() {
        return Err(ActionError::ChannelBusy(channel));
    }

    let def = channel.def();
    if let Some(cap) = state.cost_cap {
        if state.total_cost + def.cost > cap {
            return Err(ActionError::BudgetExceeded {
                total: state.total_cost,
                cost: def.cost,
                cap,
            });
        }
    }

    let anonymous = match anonymous {
        Some(true) if !def.anonymous => return Err(ActionError::AnonymityNotSupported(channel)),
        Some(flag) => flag,
        None => def.anonymous,
    };

    let total_power: u32 = evidences.iter().map(Evidence::power).sum();
    let total_risk: u32 = evidences.iter().map(Evidence::risk).sum();
    let persuasiveness = report_persuasiveness(total_power, def, state.success_modifier());

    let requested = StateChanges {
        bureau_fear: (REPORT_FEAR_FACTOR
            * persuasiveness
            * state.school_profile.bureau.fear_factor())
        .round() as i32,
        school_pressure: (REPORT_PRESSURE_FACTOR
            * persuasiveness
            * state.school_profile.principal.pressure_factor())
        .round() as i32
            - REPORT_PRESSURE_BACKLASH,
        exposure_risk: (REPORT_RISK_FACTOR * total_risk as f64 * anonymity_factor(def, anonymous))
            .round() as i32,
        work_orders: 1,
        cost: def.cost,
    };
    let applied = state.apply_changes(&requested);

    let id = state.next_work_order_id;
    state.next_work_order_id += 1;
    let attached = evidences.len();
    state.submitted_work_orders.push(WorkOrder::new(
        id,
        channel,
        evidences,
        state.day,
        anonymous,
        persuasiveness,
    ));
    state.action_taken_today = true;
    state.is_waiting = false;

    debug!(
        day = state.day,
        order = id,
        channel = channel.key(),
        anonymous,
        persuasiveness,
        "report submitted"
    );

    let identity = if anonymous {
        "anonymously"
    } else {
        "under your real name"
    };
    let description = format!(
        "Report #{id} filed with the {} {identity}, {attached} piece(s) of evidence attached.",
        def.name
    );
    let feedback = format!("An official reply is due within {} days.", def.reply_days);
    Ok(ActionResult::succeeded(description, applied).with_feedback(feedback))
}

/// Lets a day pass. Things cool down a little.
pub fn wait_one_day(state: &mut GameState) -> Result<ActionResult, ActionError> {
    ensure_can_act(state)?;

    let applied = state.apply_changes(&StateChanges {
        school_pressure: WAIT_PRESSURE_DRIFT,
        bureau_fear: WAIT_FEAR_DRIFT,
        exposure_risk: WAIT_RISK_DRIFT,
        ..StateChanges::default()
    });
    state.action_taken_today = true;
    state.is_waiting = true;

    debug!(day = state.day, "waiting");

    let result = ActionResult::succeeded("You keep your head down for a day.", applied);
    Ok(match state.pending_count() {
        0 => result,
        n => result.with_feedback(format!("{n} report(s) still awaiting a reply.")),
    })
}
