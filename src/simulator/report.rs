//! Simulation report generation.

use super::runner::RunStats;
use crate::achievements::{AchievementId, ALL_ACHIEVEMENTS};
use crate::core::game_state::Difficulty;
use crate::ending::EndingKind;
use std::collections::HashMap;

const ENDING_ORDER: [EndingKind; 6] = [
    EndingKind::Victory,
    EndingKind::Pyrrhic,
    EndingKind::Redirect,
    EndingKind::Stalemate,
    EndingKind::Failure,
    EndingKind::Backfire,
];

/// Aggregates for the runs of one difficulty.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DifficultySummary {
    pub difficulty: Difficulty,
    pub runs: u32,
    pub wins: u32,
    pub avg_final_day: f64,
    pub avg_total_cost: f64,
    pub avg_reports_filed: f64,
}

impl DifficultySummary {
    pub fn win_rate(&self) -> f64 {
        self.wins as f64 / self.runs.max(1) as f64
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_won: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_final_day: f64,
    pub avg_total_cost: f64,
    pub avg_success_rate: f64,
    pub avg_reports_filed: f64,
    pub avg_evidence_collected: f64,
    pub avg_peak_exposure: f64,
    pub avg_rejected_actions: f64,

    // Distribution data
    pub ending_distribution: HashMap<EndingKind, u32>,
    pub achievement_unlocks: HashMap<AchievementId, u32>,
    pub per_difficulty: Vec<DifficultySummary>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

fn average<'a>(runs: impl Iterator<Item = &'a RunStats>, f: impl Fn(&RunStats) -> f64) -> f64 {
    let (sum, count) = runs.fold((0.0, 0u32), |(sum, count), run| (sum + f(run), count + 1));
    sum / count.max(1) as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_won = runs.iter().filter(|r| r.succeeded()).count() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out()).count() as u32;

        let avg_final_day = average(runs.iter(), |r| r.final_day as f64);
        let avg_total_cost = average(runs.iter(), |r| r.total_cost);
        let avg_success_rate = average(runs.iter(), |r| r.final_success_rate);
        let avg_reports_filed = average(runs.iter(), |r| r.reports_filed as f64);
        let avg_evidence_collected = average(runs.iter(), |r| r.evidence_collected as f64);
        let avg_peak_exposure = average(runs.iter(), |r| r.peak_exposure as f64);
        let avg_rejected_actions = average(runs.iter(), |r| r.rejected_actions as f64);

        let mut ending_distribution = HashMap::new();
        for kind in runs.iter().filter_map(|r| r.ending) {
            *ending_distribution.entry(kind).or_insert(0) += 1;
        }

        let mut achievement_unlocks = HashMap::new();
        for id in runs.iter().flat_map(|r| r.achievements.iter()) {
            *achievement_unlocks.entry(*id).or_insert(0) += 1;
        }

        let per_difficulty = Difficulty::ALL
            .into_iter()
            .filter_map(|difficulty| {
                let of = || runs.iter().filter(move |r| r.difficulty == difficulty);
                let count = of().count() as u32;
                (count > 0).then(|| DifficultySummary {
                    difficulty,
                    runs: count,
                    wins: of().filter(|r| r.succeeded()).count() as u32,
                    avg_final_day: average(of(), |r| r.final_day as f64),
                    avg_total_cost: average(of(), |r| r.total_cost),
                    avg_reports_filed: average(of(), |r| r.reports_filed as f64),
                })
            })
            .collect();

        Self {
            num_runs,
            runs_won,
            runs_timed_out,
            avg_final_day,
            avg_total_cost,
            avg_success_rate,
            avg_reports_filed,
            avg_evidence_collected,
            avg_peak_exposure,
            avg_rejected_actions,
            ending_distribution,
            achievement_unlocks,
            per_difficulty,
            run_stats: runs,
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.runs_won as f64 / self.num_runs.max(1) as f64
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("               (Using Real Game Sessions)\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} won, {} timed out\n\n",
            self.num_runs, self.runs_won, self.runs_timed_out
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Day:       {:.1}\n", self.avg_final_day));
        report.push_str(&format!("  Avg Total Cost:      {:.1}\n", self.avg_total_cost));
        report.push_str(&format!("  Avg Success Rate:    {:.1}\n", self.avg_success_rate));
        report.push_str(&format!("  Avg Reports Filed:   {:.1}\n", self.avg_reports_filed));
        report.push_str(&format!(
            "  Avg Evidence Held:   {:.1}\n",
            self.avg_evidence_collected
        ));
        report.push_str(&format!("  Avg Peak Exposure:   {:.1}\n", self.avg_peak_exposure));
        report.push_str(&format!(
            "  Avg Rejected Moves:  {:.2}\n\n",
            self.avg_rejected_actions
        ));

        report.push_str("── ENDINGS ──────────────────────────────────────────────────────\n");
        for kind in ENDING_ORDER {
            let count = self.ending_distribution.get(&kind).copied().unwrap_or(0);
            let pct = (count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<16} {:>5.1}% {}\n", kind.title(), pct, bar));
        }
        report.push('\n');

        report.push_str("── DIFFICULTIES ─────────────────────────────────────────────────\n");
        for summary in &self.per_difficulty {
            report.push_str(&format!(
                "  {:<7} win {:>5.1}%  day {:>5.1}  cost {:>5.1}  reports {:>4.1}\n",
                summary.difficulty.key(),
                summary.win_rate() * 100.0,
                summary.avg_final_day,
                summary.avg_total_cost,
                summary.avg_reports_filed
            ));
        }
        report.push('\n');

        report.push_str("── ACHIEVEMENTS ─────────────────────────────────────────────────\n");
        for def in ALL_ACHIEVEMENTS.iter() {
            let count = self.achievement_unlocks.get(&def.id).copied().unwrap_or(0);
            let pct = (count as f64 / self.num_runs.max(1) as f64) * 100.0;
            report.push_str(&format!("  {:<24} {:>5.1}%\n", def.name, pct));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let win_rate = self.win_rate() * 100.0;
        let rating = if win_rate > 85.0 {
            "TOO EASY - Nearly every report lands"
        } else if win_rate > 50.0 {
            "GOOD - Winnable with care"
        } else if win_rate > 20.0 {
            "HARD - Most attempts fall short"
        } else {
            "TOO HARD - The scripted player rarely wins"
        };
        report.push_str(&format!("  Win Rate: {:.1}%\n", win_rate));
        report.push_str(&format!("  Rating:   {}\n", rating));

        let backfires = self
            .ending_distribution
            .get(&EndingKind::Backfire)
            .copied()
            .unwrap_or(0);
        if backfires as f64 > self.num_runs as f64 * 0.2 {
            report.push_str("  ⚠️  Many backfires - identified reports too risky?\n");
        }
        let stalemates = self
            .ending_distribution
            .get(&EndingKind::Stalemate)
            .copied()
            .unwrap_or(0);
        if stalemates as f64 > self.num_runs as f64 * 0.3 {
            report.push_str("  ⚠️  Many stalemates - replies too slow or too weak?\n");
        }
        if self.runs_timed_out > 0 {
            report.push_str("  ⚠️  Some runs hit the action cap without ending\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Implement Serialize for JSON output
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 14)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("runs_won", &self.runs_won)?;
        state.serialize_field("runs_timed_out", &self.runs_timed_out)?;
        state.serialize_field("avg_final_day", &self.avg_final_day)?;
        state.serialize_field("avg_total_cost", &self.avg_total_cost)?;
        state.serialize_field("avg_success_rate", &self.avg_success_rate)?;
        state.serialize_field("avg_reports_filed", &self.avg_reports_filed)?;
        state.serialize_field("avg_evidence_collected", &self.avg_evidence_collected)?;
        state.serialize_field("avg_peak_exposure", &self.avg_peak_exposure)?;
        state.serialize_field("avg_rejected_actions", &self.avg_rejected_actions)?;
        state.serialize_field("ending_distribution", &self.ending_distribution)?;
        state.serialize_field("achievement_unlocks", &self.achievement_unlocks)?;
        state.serialize_field("per_difficulty", &self.per_difficulty)?;
        state.serialize_field("win_rate", &(self.win_rate() * 100.0))?;
        state.end()
    }
}
