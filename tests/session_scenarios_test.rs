//! Integration test: end-to-end sessions
//!
//! Drives `GameSession` through the canonical play sequences: filing a first
//! report, hitting the hard-mode budget cap, a busy channel, a reply that
//! must arrive by its deadline, and exposure forcing the game to end.

use hotline::actions::{self, StateChanges};
use hotline::catalog::{ChannelKind, EvidenceKind};
use hotline::core::{Evidence, GamePhase};
use hotline::replies::WorkOrderStatus;
use hotline::{ActionError, Difficulty, EndingKind, EngineConfig, GameSession, GameState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn quiet_session(difficulty: Difficulty, seed: u64) -> GameSession {
    GameSession::new(
        difficulty,
        false,
        EngineConfig::default().without_events(),
        ChaCha8Rng::seed_from_u64(seed),
    )
}

#[test]
fn test_first_report_to_free_hotline() {
    let mut session = quiet_session(Difficulty::Easy, 1);

    let collected = session.collect_evidence_key("recording");
    assert!(collected.success, "{collected:?}");
    assert_eq!(session.state().day, 2);

    let filed = session.submit_report_keys("web_12345", &["recording"], Some(true));
    assert!(filed.success, "{filed:?}");
    assert_eq!(filed.changes.cost, 0.0);

    let state = session.state();
    assert_eq!(state.day, 3);
    assert_eq!(state.total_cost, 0.0);
    assert_eq!(state.work_orders, 1);
    assert_eq!(state.submitted_work_orders.len(), 1);

    let order = &state.submitted_work_orders[0];
    assert_eq!(order.channel, ChannelKind::Web12345);
    assert_eq!(order.status, WorkOrderStatus::Pending);
    assert!(order.anonymous);
    assert_eq!(order.evidences.len(), 1);
    assert_eq!(order.evidences[0].kind, EvidenceKind::Recording);
    assert!(!session.is_over());
}

#[test]
fn test_hard_mode_budget_cap_rejects_without_changes() {
    let config = EngineConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut state = GameState::new(Difficulty::Hard, false, &config, &mut rng);
    state.start();
    state.collected_evidences.push(Evidence {
        kind: EvidenceKind::Petition,
        acquired_day: 1,
        clean: true,
    });
    state.total_cost = 48.0;

    let before = serde_json::to_string(&state).unwrap();
    let err = actions::submit_report(
        &mut state,
        ChannelKind::OnsitePetition,
        &[EvidenceKind::Petition],
        Some(false),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ActionError::BudgetExceeded {
            total: 48.0,
            cost: 5.0,
            cap: 50.0,
        }
    );
    assert_eq!(serde_json::to_string(&state).unwrap(), before);

    // A free channel still goes through under the cap.
    let ok = actions::submit_report(
        &mut state,
        ChannelKind::BureauWebsite,
        &[EvidenceKind::Petition],
        None,
    )
    .unwrap();
    assert!(ok.success);
    assert_eq!(state.total_cost, 48.0);
}

#[test]
fn test_busy_channel_rejects_second_report() {
    let mut session = quiet_session(Difficulty::Medium, 3);
    assert!(session.collect_evidence(EvidenceKind::Chat).success);
    assert!(session.collect_evidence(EvidenceKind::Screenshot).success);

    let first = session.submit_report(ChannelKind::City12345, &[EvidenceKind::Chat], Some(true));
    assert!(first.success);
    let day = session.state().day;
    let before = session.state().submitted_work_orders.clone();

    let second = session.submit_report(
        ChannelKind::City12345,
        &[EvidenceKind::Screenshot],
        Some(true),
    );
    assert!(!second.success);
    assert_eq!(second.error, Some(ActionError::ChannelBusy(ChannelKind::City12345)));
    assert_eq!(session.state().day, day);
    assert_eq!(session.state().submitted_work_orders, before);
    assert_eq!(session.state().last_action_result.as_ref(), Some(&second));

    // Another channel is still open.
    let other = session.submit_report(
        ChannelKind::Province12345,
        &[EvidenceKind::Screenshot],
        None,
    );
    assert!(other.success, "{other:?}");
}

#[test]
fn test_reply_arrives_by_deadline() {
    for seed in 0..20 {
        let mut session = quiet_session(Difficulty::Easy, seed);
        assert!(session.collect_evidence(EvidenceKind::Schedule).success);
        assert!(session
            .submit_report(ChannelKind::Web12345, &[EvidenceKind::Schedule], None)
            .success);
        let filed_on = session.state().submitted_work_orders[0].day;

        for _ in 0..18 {
            session.wait_one_day();
        }

        let order = &session.state().submitted_work_orders[0];
        assert_eq!(order.status, WorkOrderStatus::Replied, "seed {seed}");
        let reply = order.reply.as_ref().unwrap();
        assert!(reply.day > filed_on);
        assert!(reply.day <= filed_on + 15 + 3, "seed {seed}: day {}", reply.day);
        assert!(!reply.content.is_empty());
    }
}

#[test]
fn test_exposure_at_max_ends_in_failure() {
    let mut session = quiet_session(Difficulty::Hard, 5);
    let riskiest_first = [
        EvidenceKind::Photo,
        EvidenceKind::Petition,
        EvidenceKind::Recording,
        EvidenceKind::Receipt,
        EvidenceKind::Parent,
        EvidenceKind::App,
        EvidenceKind::Chat,
        EvidenceKind::Schedule,
        EvidenceKind::Screenshot,
    ];

    for kind in riskiest_first {
        if session.is_over() {
            break;
        }
        assert!(session.collect_evidence(kind).success);
    }

    assert!(session.is_over());
    let state = session.state();
    assert_eq!(state.game_phase, GamePhase::Ended);
    assert_eq!(state.exposure_risk, 100);

    let end = session.end_result().unwrap();
    assert!(!end.success);
    assert_eq!(end.kind, EndingKind::Failure);
    assert!(!end.summary.is_empty());

    let final_day = session.state().day;
    let after = session.wait_one_day();
    assert_eq!(after.error, Some(ActionError::GameEnded));
    assert_eq!(session.state().day, final_day);
}

#[test]
fn test_exposure_at_max_ends_even_when_an_event_cools_it() {
    let config = EngineConfig {
        event_base_chance: 1.0,
        ..EngineConfig::default()
    };
    let mut cooled = 0;
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new(Difficulty::Medium, false, &config, &mut rng);
        state.start();
        state.apply_changes(&StateChanges {
            exposure_risk: 100,
            ..StateChanges::default()
        });

        let report = hotline::core::advance_day(&mut state, &config, &mut rng);
        assert!(report.new_event.is_some());
        if state.exposure_risk < 100 {
            cooled += 1;
        }
        assert_eq!(report.ending.map(|e| e.kind), Some(EndingKind::Failure), "seed {seed}");
        assert_eq!(state.game_phase, GamePhase::Ended);
    }
    assert!(cooled > 0);
}

#[test]
fn test_identified_report_turns_exposure_into_backfire() {
    let config = EngineConfig::default().without_events();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut state = GameState::new(Difficulty::Medium, false, &config, &mut rng);
    state.start();
    state.collected_evidences.push(Evidence {
        kind: EvidenceKind::Photo,
        acquired_day: 1,
        clean: false,
    });
    actions::submit_report(
        &mut state,
        ChannelKind::CityBureau,
        &[EvidenceKind::Photo],
        None,
    )
    .unwrap();
    state.apply_changes(&StateChanges {
        exposure_risk: 100,
        ..StateChanges::default()
    });

    let report = hotline::core::advance_day(&mut state, &config, &mut rng);
    assert_eq!(report.ending.map(|e| e.kind), Some(EndingKind::Backfire));
    assert!(state.is_over());
}

#[test]
fn test_ai_commentary_differs_from_plain() {
    let mut plain = quiet_session(Difficulty::Hard, 7);
    let mut ai = GameSession::new(
        Difficulty::Hard,
        true,
        EngineConfig::default().without_events(),
        ChaCha8Rng::seed_from_u64(7),
    );
    for session in [&mut plain, &mut ai] {
        for kind in [
            EvidenceKind::Photo,
            EvidenceKind::Petition,
            EvidenceKind::Recording,
            EvidenceKind::Receipt,
            EvidenceKind::Parent,
            EvidenceKind::App,
            EvidenceKind::Chat,
            EvidenceKind::Schedule,
            EvidenceKind::Screenshot,
        ] {
            if session.is_over() {
                break;
            }
            session.collect_evidence(kind);
        }
    }

    let plain_end = plain.end_result().unwrap();
    let ai_end = ai.end_result().unwrap();
    assert_eq!(plain_end.kind, ai_end.kind);
    assert_ne!(plain_end.comment, ai_end.comment);
}
