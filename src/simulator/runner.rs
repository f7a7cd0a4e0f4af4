//! Main simulation runner driving real `GameSession`s with a scripted player.
//!
//! The player follows the advice heuristics: lie low when exposure is high,
//! build up evidence until it carries weight, then file with the best ranked
//! channel. Statistics are read off the final state of each session.

use super::config::SimConfig;
use super::report::SimReport;
use crate::achievements::AchievementId;
use crate::advice::{rank_channels, rank_evidence};
use crate::catalog::{ChannelKind, EvidenceKind};
use crate::core::constants::MAX_EVIDENCE_PER_REPORT;
use crate::core::game_state::{Difficulty, GameState};
use crate::core::session::GameSession;
use crate::ending::EndingKind;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::cmp::Reverse;
use tracing::info;

/// Exposure at which the scripted player stops acting and waits.
const LIE_LOW_EXPOSURE: i32 = 70;
/// Evidence held before the first report goes out.
const MIN_EVIDENCE_BEFORE_REPORT: usize = 3;
/// Combined power held before the first report goes out.
const MIN_POWER_BEFORE_REPORT: u32 = 20;

/// Outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub difficulty: Difficulty,
    /// None when the action cap was hit first.
    pub ending: Option<EndingKind>,
    pub final_day: u32,
    pub total_cost: f64,
    pub final_success_rate: f64,
    pub reports_filed: usize,
    pub evidence_collected: usize,
    pub peak_exposure: i32,
    pub actions_taken: u32,
    pub rejected_actions: u32,
    pub achievements: Vec<AchievementId>,
}

impl RunStats {
    pub fn succeeded(&self) -> bool {
        self.ending.is_some_and(|kind| kind.is_success())
    }

    pub fn timed_out(&self) -> bool {
        self.ending.is_none()
    }
}

/// The move the scripted player makes on a given day.
#[derive(Debug, Clone, PartialEq)]
pub enum SimMove {
    Collect(EvidenceKind),
    Submit(ChannelKind, Vec<EvidenceKind>),
    Wait,
}

/// Picks today's move from the current state.
pub fn choose_move(state: &GameState) -> SimMove {
    if state.exposure_risk >= LIE_LOW_EXPOSURE {
        return SimMove::Wait;
    }

    let best_evidence = rank_evidence(state).into_iter().next();
    let thin = state.collected_evidences.len() < MIN_EVIDENCE_BEFORE_REPORT
        || state.evidence_power_total() < MIN_POWER_BEFORE_REPORT;
    if thin {
        if let Some(kind) = best_evidence {
            return SimMove::Collect(kind);
        }
    }

    if !state.collected_evidences.is_empty() {
        if let Some(channel) = rank_channels(state).into_iter().next() {
            let mut held: Vec<_> = state.collected_evidences.iter().collect();
            held.sort_by_key(|e| Reverse(e.power()));
            let attach = held
                .into_iter()
                .take(MAX_EVIDENCE_PER_REPORT)
                .map(|e| e.kind)
                .collect();
            return SimMove::Submit(channel, attach);
        }
    }

    match best_evidence {
        Some(kind) => SimMove::Collect(kind),
        None => SimMove::Wait,
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let difficulties = config.difficulties();
    let mut all_runs = Vec::with_capacity(config.num_runs as usize * difficulties.len());

    for difficulty in difficulties {
        for run_idx in 0..config.num_runs {
            // Create RNG for this run
            let rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
                None => ChaCha8Rng::from_entropy(),
            };

            let run = simulate_single_run(config, difficulty, rng);

            if config.verbosity >= 2 {
                println!(
                    "[{}] Run {}/{} - {}, day {}, cost {:.1}, reports {}, evidence {}",
                    difficulty,
                    run_idx + 1,
                    config.num_runs,
                    run.ending.map_or("timed out", |kind| kind.title()),
                    run.final_day,
                    run.total_cost,
                    run.reports_filed,
                    run.evidence_collected
                );
            }
            all_runs.push(run);
        }
    }

    info!(runs = all_runs.len(), "simulation finished");
    SimReport::from_runs(all_runs)
}

/// Plays one game to its end (or the action cap).
pub fn simulate_single_run(
    config: &SimConfig,
    difficulty: Difficulty,
    rng: ChaCha8Rng,
) -> RunStats {
    let mut session = GameSession::new(difficulty, config.enable_ai, config.engine.clone(), rng);
    let mut actions_taken = 0;
    let mut rejected_actions = 0;

    while !session.is_over() && actions_taken < config.max_actions_per_run {
        let result = match choose_move(session.state()) {
            SimMove::Collect(kind) => session.collect_evidence(kind),
            SimMove::Submit(channel, kinds) => session.submit_report(channel, &kinds, None),
            SimMove::Wait => session.wait_one_day(),
        };
        actions_taken += 1;

        // A rejected move leaves the day unchanged; waiting keeps the game moving.
        if !result.success {
            rejected_actions += 1;
            session.wait_one_day();
        }
    }

    let state = session.state();
    let mut achievements: Vec<AchievementId> =
        state.achievements.unlocked.keys().copied().collect();
    achievements.sort_by_key(|id| *id as u8);

    RunStats {
        difficulty,
        ending: session.end_result().map(|end| end.kind),
        final_day: state.day,
        total_cost: state.total_cost,
        final_success_rate: session
            .end_result()
            .map_or(0.0, |end| end.final_success_rate),
        reports_filed: state.submitted_work_orders.len(),
        evidence_collected: state.collected_evidences.len(),
        peak_exposure: state.peak_exposure_risk,
        actions_taken,
        rejected_actions,
        achievements,
    }
}
