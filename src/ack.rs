//! Read tracking for replies and events.
//!
//! Owned by the presentation layer so that "show this once" flags never leak
//! into simulation state.

use crate::core::game_state::GameState;
use crate::events::GameEvent;
use crate::replies::WorkOrder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgements {
    seen_replies: BTreeSet<u32>,
    seen_events: usize,
}

impl Acknowledgements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replied orders whose reply has not been shown yet, oldest first.
    pub fn unseen_replies<'a>(&self, state: &'a GameState) -> Vec<&'a WorkOrder> {
        state
            .submitted_work_orders
            .iter()
            .filter(|o| o.reply.is_some() && !self.seen_replies.contains(&o.id))
            .collect()
    }

    /// The most recently delivered reply not yet shown.
    pub fn latest_unseen_reply<'a>(&self, state: &'a GameState) -> Option<&'a WorkOrder> {
        self.unseen_replies(state)
            .into_iter()
            .max_by_key(|o| (o.reply.as_ref().map_or(0, |r| r.day), o.id))
    }

    /// Returns false if the reply had already been seen.
    pub fn mark_reply_seen(&mut self, order_id: u32) -> bool {
        self.seen_replies.insert(order_id)
    }

    pub fn is_reply_seen(&self, order_id: u32) -> bool {
        self.seen_replies.contains(&order_id)
    }

    /// Events fired since the last call to [`Acknowledgements::mark_events_seen`].
    pub fn unseen_events<'a>(&self, state: &'a GameState) -> &'a [GameEvent] {
        state
            .game_events
            .get(self.seen_events..)
            .unwrap_or_default()
    }

    pub fn mark_events_seen(&mut self, state: &GameState) {
        self.seen_events = state.game_events.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ChannelKind, EventKind, ReplyTemplate};
    use crate::core::config::EngineConfig;
    use crate::core::game_state::Difficulty;
    use crate::events::fire_event;
    use crate::replies::BureauReply;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state() -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut state = GameState::new(Difficulty::Easy, false, &EngineConfig::default(), &mut rng);
        state.start();
        state
    }

    fn replied(id: u32, day: u32) -> WorkOrder {
        let mut order = WorkOrder::new(id, ChannelKind::City12345, Vec::new(), 1, true, 1.0);
        order.record_reply(BureauReply {
            template: ReplyTemplate::Vague,
            content: String::new(),
            day,
        });
        order
    }

    #[test]
    fn test_replies_shown_once() {
        let mut s = state();
        s.submitted_work_orders.push(replied(1, 16));
        s.submitted_work_orders.push(replied(2, 18));
        s.submitted_work_orders
            .push(WorkOrder::new(3, ChannelKind::Web12345, Vec::new(), 2, true, 1.0));

        let mut ack = Acknowledgements::new();
        assert_eq!(ack.unseen_replies(&s).len(), 2);
        assert_eq!(ack.latest_unseen_reply(&s).map(|o| o.id), Some(2));

        assert!(ack.mark_reply_seen(2));
        assert!(!ack.mark_reply_seen(2));
        assert_eq!(ack.latest_unseen_reply(&s).map(|o| o.id), Some(1));
        ack.mark_reply_seen(1);
        assert!(ack.unseen_replies(&s).is_empty());
    }

    #[test]
    fn test_events_acknowledged_in_batches() {
        let mut s = state();
        let mut ack = Acknowledgements::new();
        fire_event(&mut s, EventKind::LocalNews);
        assert_eq!(ack.unseen_events(&s).len(), 1);
        ack.mark_events_seen(&s);
        assert!(ack.unseen_events(&s).is_empty());

        fire_event(&mut s, EventKind::QuietPeriod);
        assert_eq!(ack.unseen_events(&s)[0].kind, EventKind::QuietPeriod);
    }
}
