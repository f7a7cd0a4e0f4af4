//! Integration test: state invariants under random play
//!
//! Plays many sessions with random (often invalid) moves and checks after
//! every move that the state stays consistent: bounded counters, one day per
//! completed action, rejected moves change nothing, one pending report per
//! channel, cost accounting, reply deadlines and monotonic achievements.

use hotline::achievements::AchievementId;
use hotline::catalog::{ChannelKind, EvidenceKind};
use hotline::core::constants::{HARD_MODE_COST_CAP, REPLY_JITTER_DAYS};
use hotline::{ActionResult, Difficulty, EngineConfig, GameSession, GameState};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn random_move(session: &mut GameSession, rng: &mut StdRng) -> ActionResult {
    match rng.gen_range(0..3) {
        0 => {
            let kind = *EvidenceKind::ALL.choose(rng).unwrap();
            session.collect_evidence(kind)
        }
        1 => {
            let channel = *ChannelKind::ALL.choose(rng).unwrap();
            let mut pool: Vec<EvidenceKind> = EvidenceKind::ALL.to_vec();
            pool.shuffle(rng);
            let count = rng.gen_range(0..=4);
            let kinds: Vec<EvidenceKind> = pool.into_iter().take(count).collect();
            let anonymous = [None, Some(true), Some(false)][rng.gen_range(0..3)];
            session.submit_report(channel, &kinds, anonymous)
        }
        _ => session.wait_one_day(),
    }
}

fn unlocked(state: &GameState) -> HashSet<AchievementId> {
    state.achievements.unlocked.keys().copied().collect()
}

fn check_state(state: &GameState) {
    for value in [state.school_pressure, state.bureau_fear, state.exposure_risk] {
        assert!((0..=100).contains(&value), "counter out of range: {value}");
    }
    assert!(state.peak_exposure_risk >= state.exposure_risk);

    let mut seen = HashSet::new();
    for evidence in &state.collected_evidences {
        assert!(seen.insert(evidence.kind), "duplicate {:?}", evidence.kind);
        assert!(evidence.acquired_day <= state.day);
    }

    let mut pending = HashSet::new();
    let mut paid = 0.0;
    for order in &state.submitted_work_orders {
        paid += order.channel.def().cost;
        assert!(!order.evidences.is_empty() && order.evidences.len() <= 3);
        let deadline = order.reply_deadline(REPLY_JITTER_DAYS);
        match &order.reply {
            None => {
                assert!(pending.insert(order.channel), "two pending on {:?}", order.channel);
                assert!(state.day < deadline, "order {} overdue", order.id);
            }
            Some(reply) => {
                assert!(!order.is_pending());
                assert!(reply.day >= order.day + order.channel.def().reply_days);
                assert!(reply.day <= deadline);
            }
        }
    }
    assert!((state.total_cost - paid).abs() < 1e-9);
    if state.difficulty == Difficulty::Hard {
        assert!(state.total_cost <= HARD_MODE_COST_CAP);
    }

    assert_eq!(state.is_over(), state.end_result.is_some());
    assert!(state.day <= state.max_day + 1);
}

#[test]
fn test_random_play_keeps_invariants() {
    for difficulty in Difficulty::ALL {
        for seed in 0..40u64 {
            let mut session = GameSession::new(
                difficulty,
                seed % 2 == 0,
                EngineConfig::default(),
                ChaCha8Rng::seed_from_u64(seed),
            );
            let mut moves = StdRng::seed_from_u64(seed ^ 0xA5A5);

            for _ in 0..300 {
                if session.is_over() {
                    break;
                }
                let before = session.state().clone();
                let before_unlocked = unlocked(&before);

                let result = random_move(&mut session, &mut moves);
                let after = session.state();

                if result.success {
                    assert_eq!(after.day, before.day + 1);
                    assert!(result.error.is_none());
                } else {
                    assert!(result.error.is_some());
                    assert_eq!(after.day, before.day);
                    assert_eq!(after.collected_evidences, before.collected_evidences);
                    assert_eq!(after.submitted_work_orders, before.submitted_work_orders);
                    assert_eq!(after.total_cost, before.total_cost);
                    assert_eq!(after.exposure_risk, before.exposure_risk);
                }
                assert_eq!(after.last_action_result.as_ref(), Some(&result));
                assert!(unlocked(after).is_superset(&before_unlocked));
                check_state(after);
            }

            assert!(
                session.is_over(),
                "{difficulty} seed {seed} still running on day {}",
                session.state().day
            );
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut session = GameSession::seeded(Difficulty::Medium, false, seed);
        let mut moves = StdRng::seed_from_u64(seed);
        while !session.is_over() {
            random_move(&mut session, &mut moves);
        }
        let state = session.state();
        (
            state.session_id,
            state.day,
            state.exposure_risk,
            state.collected_evidences.clone(),
            state.submitted_work_orders.clone(),
            state.game_events.clone(),
            state.end_result.clone(),
        )
    };
    assert_eq!(play(11), play(11));
    assert_ne!(play(11), play(12));
}
