//! Read-only advice for the player. Nothing here mutates state or draws
//! randomness.

use crate::catalog::{ChannelKind, EvidenceKind};
use crate::core::constants::*;
use crate::core::game_state::GameState;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Exposure,
    Pressure,
    Fear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Low,
    Medium,
    High,
    Critical,
}

pub fn status_level(value: i32) -> StatusLevel {
    if value < STATUS_MEDIUM_FROM {
        StatusLevel::Low
    } else if value < STATUS_HIGH_FROM {
        StatusLevel::Medium
    } else if value < STATUS_CRITICAL_FROM {
        StatusLevel::High
    } else {
        StatusLevel::Critical
    }
}

pub fn status_text(value: i32, kind: StatusKind) -> &'static str {
    match (kind, status_level(value)) {
        (StatusKind::Exposure, StatusLevel::Low) => "Safe",
        (StatusKind::Exposure, StatusLevel::Medium) => "Noticed",
        (StatusKind::Exposure, StatusLevel::High) => "Suspected",
        (StatusKind::Exposure, StatusLevel::Critical) => "About to be exposed",
        (StatusKind::Pressure, StatusLevel::Low) => "Unbothered",
        (StatusKind::Pressure, StatusLevel::Medium) => "Uneasy",
        (StatusKind::Pressure, StatusLevel::High) => "Under pressure",
        (StatusKind::Pressure, StatusLevel::Critical) => "Cornered",
        (StatusKind::Fear, StatusLevel::Low) => "Indifferent",
        (StatusKind::Fear, StatusLevel::Medium) => "Paying attention",
        (StatusKind::Fear, StatusLevel::High) => "Worried",
        (StatusKind::Fear, StatusLevel::Critical) => "Alarmed",
    }
}

/// Uncollected evidence, best first. The higher the exposure, the more a
/// piece's risk counts against it.
pub fn rank_evidence(state: &GameState) -> Vec<EvidenceKind> {
    let risk_weight = 2 + state.exposure_risk / 5;
    let mut kinds = state.uncollected_evidence();
    kinds.sort_by_key(|kind| {
        let def = kind.def();
        Reverse(def.power as i32 * 10 - def.risk as i32 * risk_weight)
    });
    kinds
}

/// Channels a report could go to right now (not busy, affordable), best first.
pub fn rank_channels(state: &GameState) -> Vec<ChannelKind> {
    let exposed = state.exposure_risk >= STATUS_HIGH_FROM;
    let score = |channel: &ChannelKind| {
        let def = channel.def();
        let mut score = def.effectiveness * 100.0 - def.reply_days as f64;
        if exposed && def.anonymous {
            score += 60.0;
        }
        if state.cost_cap.is_some() {
            score -= def.cost * 5.0;
        }
        score
    };

    let mut channels: Vec<ChannelKind> = ChannelKind::ALL
        .into_iter()
        .filter(|c| state.pending_order(*c).is_none() && state.can_afford(c.def().cost))
        .collect();
    channels.sort_by(|a, b| score(b).total_cmp(&score(a)));
    channels
}

pub fn strategy_advice(state: &GameState) -> Vec<String> {
    let mut advice = Vec::new();

    match status_level(state.exposure_risk) {
        StatusLevel::Critical => advice.push(
            "Exposure is critical. Lie low for a few days before doing anything risky.".to_string(),
        ),
        StatusLevel::High => advice.push(
            "Exposure is high. Prefer anonymous channels and low-risk evidence.".to_string(),
        ),
        _ => {}
    }

    if state.collected_evidences.is_empty() {
        advice.push("Start by collecting evidence. Reports without it go nowhere.".to_string());
    } else if state.evidence_power_total() < 15 {
        advice.push(
            "Your evidence is thin. A recording or a fee receipt would strengthen any report."
                .to_string(),
        );
    }

    let pending = state.pending_count();
    if pending > 0 {
        advice.push(format!(
            "{pending} report(s) are waiting for a reply. Keep building your case meanwhile."
        ));
    }

    if state.bureau_fear >= 60 && state.bureau_fear < SUCCESS_THRESHOLD {
        advice.push("The bureau is nervous. One more strong report could tip it over.".to_string());
    }

    match state.class_detail.days_until_start(state.day) {
        Some(days) => advice.push(format!(
            "The class starts in {days} day(s), on day {}. A win only counts once it is running.",
            state.class_detail.start_day()
        )),
        None => {
            let left = state.class_detail.end_day().saturating_sub(state.day);
            if left <= CLASS_ENDING_WARNING_DAYS {
                advice.push(format!(
                    "The class finishes in {left} day(s). If it runs its course unchallenged, nothing changes."
                ));
            }
        }
    }

    if state.class_detail.recurrence_prone() && state.bureau_fear < REDIRECT_FEAR_GUARD {
        advice.push(format!(
            "This class is {} and can easily move. Get bureau fear to {REDIRECT_FEAR_GUARD} so it stays shut.",
            state.class_detail.form.name()
        ));
    }

    if let Some(left) = state.remaining_budget() {
        if left < 10.0 {
            advice.push(format!("Only {left:.1} left in your budget. Stick to free channels."));
        }
    }

    let days_left = state.max_day.saturating_sub(state.day);
    if days_left <= 5 {
        advice.push(format!("Only {days_left} day(s) left before the term moves on."));
    }

    if advice.is_empty() {
        advice.push("Steady progress. Keep pairing strong evidence with the right channel.".to_string());
    }
    advice
}

pub fn evidence_advice(state: &GameState) -> Vec<String> {
    let ranked = rank_evidence(state);
    if ranked.is_empty() {
        return vec!["You already hold every piece of evidence. Put it to use.".to_string()];
    }

    let mut advice = Vec::new();
    if status_level(state.exposure_risk) >= StatusLevel::High {
        advice.push("You are being watched. Favor evidence that is easy to get quietly.".to_string());
    }
    for kind in ranked.into_iter().take(3) {
        let def = kind.def();
        advice.push(format!(
            "{}: power {}, risk {}, difficulty {}. {}.",
            def.name, def.power, def.risk, def.difficulty, def.description
        ));
    }
    advice
}

pub fn channel_advice(state: &GameState) -> Vec<String> {
    let ranked = rank_channels(state);
    if ranked.is_empty() {
        return vec!["Every channel is busy or out of budget. Wait for replies.".to_string()];
    }

    let mut advice = Vec::new();
    if status_level(state.exposure_risk) >= StatusLevel::High {
        advice.push("Exposure is high: the anonymous hotlines keep you safest.".to_string());
    }
    if let Some(cap) = state.cost_cap {
        if state.total_cost >= cap * 0.7 {
            advice.push(format!(
                "Budget: {:.1} of {cap:.1} spent.",
                state.total_cost
            ));
        }
    }
    for channel in ranked.into_iter().take(3) {
        let def = channel.def();
        let identity = if def.anonymous {
            "anonymous"
        } else {
            "real name required"
        };
        advice.push(format!(
            "{}: {identity}, cost {:.1}, reply within {} days.",
            def.name, def.cost, def.reply_days
        ));
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use crate::core::game_state::{Difficulty, Evidence};
    use crate::replies::WorkOrder;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state(difficulty: Difficulty) -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut state = GameState::new(difficulty, false, &EngineConfig::default(), &mut rng);
        state.start();
        state
    }

    #[test]
    fn test_status_buckets() {
        assert_eq!(status_level(0), StatusLevel::Low);
        assert_eq!(status_level(24), StatusLevel::Low);
        assert_eq!(status_level(25), StatusLevel::Medium);
        assert_eq!(status_level(50), StatusLevel::High);
        assert_eq!(status_level(75), StatusLevel::Critical);
        assert_eq!(status_text(100, StatusKind::Exposure), "About to be exposed");
        assert_eq!(status_text(10, StatusKind::Fear), "Indifferent");
    }

    #[test]
    fn test_evidence_ranking_shifts_with_exposure() {
        let mut s = state(Difficulty::Easy);
        s.exposure_risk = 0;
        assert_eq!(rank_evidence(&s).first(), Some(&EvidenceKind::Recording));

        s.exposure_risk = 90;
        let ranked = rank_evidence(&s);
        assert_eq!(ranked.first(), Some(&EvidenceKind::Chat));
        assert_eq!(ranked.last(), Some(&EvidenceKind::Petition));
    }

    #[test]
    fn test_ranking_skips_collected_and_busy() {
        let mut s = state(Difficulty::Easy);
        s.collected_evidences.push(Evidence {
            kind: EvidenceKind::Recording,
            acquired_day: 1,
            clean: true,
        });
        assert!(!rank_evidence(&s).contains(&EvidenceKind::Recording));

        s.submitted_work_orders
            .push(WorkOrder::new(1, ChannelKind::StateCouncil, Vec::new(), 1, false, 1.0));
        assert!(!rank_channels(&s).contains(&ChannelKind::StateCouncil));
        assert_eq!(rank_channels(&s).len(), ChannelKind::ALL.len() - 1);
    }

    #[test]
    fn test_high_exposure_prefers_anonymous_channels() {
        let mut s = state(Difficulty::Medium);
        s.exposure_risk = 80;
        let first = rank_channels(&s)[0];
        assert!(first.def().anonymous, "{first:?}");
        assert!(channel_advice(&s)[0].contains("anonymous"));
    }

    #[test]
    fn test_hard_budget_filters_expensive_channels() {
        let mut s = state(Difficulty::Hard);
        s.total_cost = 47.5;
        let ranked = rank_channels(&s);
        assert!(!ranked.contains(&ChannelKind::OnsitePetition));
        assert!(!ranked.contains(&ChannelKind::MailPetition));
        assert!(ranked.contains(&ChannelKind::Web12345));
        assert!(strategy_advice(&s).iter().any(|line| line.contains("budget")));
        assert!(channel_advice(&s).iter().any(|line| line.starts_with("Budget")));
    }

    #[test]
    fn test_advice_does_not_mutate() {
        let mut s = state(Difficulty::Medium);
        s.exposure_risk = 60;
        let before = serde_json::to_string(&s).unwrap();
        let strategy = strategy_advice(&s);
        let evidence = evidence_advice(&s);
        let channels = channel_advice(&s);
        assert_eq!(serde_json::to_string(&s).unwrap(), before);
        assert!(!strategy.is_empty() && !evidence.is_empty() && !channels.is_empty());
    }

    #[test]
    fn test_class_timing_advice() {
        let mut s = state(Difficulty::Easy);
        s.class_detail.start_in = 8;
        s.class_detail.duration = 20;
        assert!(strategy_advice(&s)
            .iter()
            .any(|line| line.starts_with("The class starts in 7 day(s), on day 8")));

        s.day = 8;
        assert!(!strategy_advice(&s).iter().any(|line| line.contains("The class")));

        s.day = 25;
        assert!(strategy_advice(&s)
            .iter()
            .any(|line| line.starts_with("The class finishes in 3 day(s)")));
    }

    #[test]
    fn test_fresh_game_suggests_collecting() {
        let s = state(Difficulty::Easy);
        assert!(strategy_advice(&s)
            .iter()
            .any(|line| line.starts_with("Start by collecting evidence")));
    }
}
