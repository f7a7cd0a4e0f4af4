//! Termination checks and the end-of-game verdict.

use super::types::{EndingKind, GameEndResult};
use crate::achievements::evaluate_ending;
use crate::catalog::ChannelKind;
use crate::core::config::EngineConfig;
use crate::core::constants::*;
use crate::core::game_state::{GamePhase, GameState};
use tracing::info;

/// Classifies the session if it has reached an end. Checked in order:
/// exposure, success thresholds, class over or day limit, exhaustion.
pub fn check_termination(state: &GameState, config: &EngineConfig) -> Option<EndingKind> {
    if state.identity_exposed() {
        return Some(if state.identified_reports_filed() {
            EndingKind::Backfire
        } else {
            EndingKind::Failure
        });
    }

    if state.thresholds_met(config.success_threshold) && state.class_has_started() {
        let kind = if state.class_detail.recurrence_prone()
            && state.bureau_fear < config.redirect_fear_guard
        {
            EndingKind::Redirect
        } else if state.exposure_risk >= PYRRHIC_RISK_THRESHOLD
            || state.total_cost > PYRRHIC_COST_THRESHOLD
        {
            EndingKind::Pyrrhic
        } else {
            EndingKind::Victory
        };
        return Some(kind);
    }

    if state.class_is_over() || state.day > state.max_day {
        return Some(EndingKind::Stalemate);
    }

    if out_of_options(state, config) {
        return Some(EndingKind::Failure);
    }
    None
}

/// Nothing left to collect, nowhere new to report, nothing pending, and the
/// thresholds are still unmet.
pub fn out_of_options(state: &GameState, config: &EngineConfig) -> bool {
    if state.thresholds_met(config.success_threshold) || state.pending_count() > 0 {
        return false;
    }
    if !state.uncollected_evidence().is_empty() {
        return false;
    }
    !ChannelKind::ALL.into_iter().any(|channel| {
        state.channel_use_count(channel) == 0 && state.can_afford(channel.def().cost)
    })
}

/// Weighted score out of 100: half bureau fear, three tenths evidence
/// strength, two tenths concessions won.
pub fn final_success_rate(state: &GameState) -> f64 {
    let fear = state.bureau_fear as f64 / COUNTER_MAX as f64;
    let replies = (state.substantive_replies() as f64 / FULL_CREDIT_REPLIES as f64).min(1.0);
    let rate = 100.0 * (0.5 * fear + 0.3 * state.evidence_power_ratio() + 0.2 * replies);
    (rate * 10.0).round() / 10.0
}

pub fn summary(kind: EndingKind, state: &GameState) -> String {
    let class = state.class_detail.name.name();
    let reports = state.submitted_work_orders.len();
    match kind {
        EndingKind::Victory => format!(
            "After {} days and {reports} report(s), \"{class}\" was cancelled and the fees were refunded. Nobody found out it was you.",
            state.day
        ),
        EndingKind::Pyrrhic => format!(
            "\"{class}\" was stopped on day {}, but the fight cost {:.1} in fees and left you exposed. Some teachers now look at you differently.",
            state.day, state.total_cost
        ),
        EndingKind::Stalemate if state.class_is_over() => format!(
            "\"{class}\" ran its full {} days before anyone above the school acted. It will be back next term.",
            state.class_detail.duration
        ),
        EndingKind::Stalemate => format!(
            "{} days passed. \"{class}\" paused for a while, but the school never really changed and it may be back next term.",
            state.day
        ),
        EndingKind::Failure if state.identity_exposed() => format!(
            "On day {} the school worked out who had been collecting evidence. The reports stalled and \"{class}\" carried on.",
            state.day
        ),
        EndingKind::Failure => format!(
            "Every piece of evidence was used and every channel tried, yet \"{class}\" carried on. {reports} report(s) went nowhere."
        ),
        EndingKind::Backfire => format!(
            "A report filed under your real name reached the school. By day {} you had been called in, and \"{class}\" went on as if nothing had happened.",
            state.day
        ),
        EndingKind::Redirect => format!(
            "The bureau ordered \"{class}\" to stop on day {}. A week later it reappeared, {}.",
            state.day,
            state.class_detail.form.name()
        ),
    }
}

/// Closing remark. With AI commentary enabled this is a short analysis of
/// how the session went.
pub fn comment(kind: EndingKind, state: &GameState) -> String {
    if !state.enable_ai {
        return match kind {
            EndingKind::Victory | EndingKind::Pyrrhic => "The class has stopped.",
            EndingKind::Redirect => "The class has moved, not stopped.",
            EndingKind::Stalemate => "Nothing was resolved.",
            EndingKind::Failure | EndingKind::Backfire => "The class goes on.",
        }
        .to_string();
    }

    let anonymous = state
        .submitted_work_orders
        .iter()
        .filter(|o| o.anonymous)
        .count();
    let named = state.submitted_work_orders.len() - anonymous;
    let strongest = state
        .collected_evidences
        .iter()
        .max_by_key(|e| e.power())
        .map_or("nothing", |e| e.name());

    let mut lines = vec![format!(
        "Analysis: {} anonymous and {named} named report(s), {} substantive repl(ies), strongest evidence: {}.",
        anonymous,
        state.substantive_replies(),
        strongest.to_lowercase()
    )];
    lines.push(match kind {
        EndingKind::Victory => "Solid evidence through the right channels kept the bureau nervous while your exposure stayed low.".to_string(),
        EndingKind::Pyrrhic => format!(
            "The outcome was right but exposure peaked at {}. Anonymous hotlines would have shielded you better.",
            state.peak_exposure_risk
        ),
        EndingKind::Redirect => "The bureau acted before it was truly afraid. Pushing fear higher makes relocation too risky for the school.".to_string(),
        EndingKind::Stalemate => "Reports stayed too weak or too slow. Bundle your strongest evidence and pick channels with short reply deadlines.".to_string(),
        EndingKind::Failure => "Collecting evidence carelessly drew attention. Spread risky collection out and wait for things to cool down.".to_string(),
        EndingKind::Backfire => "Filing under your real name was the turning point. Keep identified reports for when you already have the upper hand.".to_string(),
    });
    lines.join(" ")
}

/// Ends the session, settles end-of-game achievements and stores the result.
pub fn conclude(state: &mut GameState, kind: EndingKind) -> GameEndResult {
    state.game_phase = GamePhase::Ended;
    evaluate_ending(state, kind);

    let result = GameEndResult {
        success: kind.is_success(),
        kind,
        day: state.day,
        total_cost: state.total_cost,
        final_success_rate: final_success_rate(state),
        summary: summary(kind, state),
        comment: comment(kind, state),
        achievements: state.achievements.unlocked_view(),
    };
    state.end_result = Some(result.clone());

    info!(
        day = state.day,
        ending = %kind,
        success_rate = result.final_success_rate,
        achievements = result.achievements.len(),
        "game ended"
    );
    result
}
