//! Reply timing, template choice and rendering.

use super::types::{BureauReply, WorkOrder};
use crate::actions::StateChanges;
use crate::catalog::{ChannelKind, ChannelTier, ReplyTemplate};
use crate::core::config::EngineConfig;
use crate::core::constants::{REPLY_POWER_SCALE_BASE, REPLY_POWER_SCALE_DIVISOR};
use crate::core::game_state::GameState;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::debug;

/// A reply delivered during a day advance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedReply {
    pub order_id: u32,
    pub channel: ChannelKind,
    pub template: ReplyTemplate,
    pub changes: StateChanges,
}

/// Chance a pending reply arrives today. Zero before the official deadline,
/// certain once `jitter_days` past it, uniform over the days in between.
pub fn reply_probability(elapsed: u32, reply_days: u32, jitter_days: u32) -> f64 {
    if elapsed < reply_days {
        0.0
    } else if elapsed >= reply_days + jitter_days {
        1.0
    } else {
        1.0 / (reply_days + jitter_days + 1 - elapsed) as f64
    }
}

/// Weights over reply templates. Stonewalling dominates when the bureau is
/// relaxed and concessions dominate when it is scared.
pub fn template_weights(
    bureau_fear: i32,
    tier: ChannelTier,
    anonymous: bool,
) -> Vec<(ReplyTemplate, f64)> {
    let fear = bureau_fear.clamp(0, 100) as f64 / 100.0;
    let calm = 1.0 - fear;

    let mut weights = vec![
        (ReplyTemplate::DenyHard, 3.0 * calm),
        (ReplyTemplate::Disguise, 2.0 * calm),
        (ReplyTemplate::Vague, 2.0 * calm + if anonymous { 1.5 } else { 0.0 }),
        (ReplyTemplate::Deflect, 1.5 * calm),
        (ReplyTemplate::Delay, 1.5 * calm),
        (ReplyTemplate::Emotional, 1.0),
        (
            ReplyTemplate::Compromise,
            2.0 * fear * if tier == ChannelTier::Public { 2.0 } else { 1.0 },
        ),
    ];
    let tier_template = match tier {
        ChannelTier::Petition => Some(ReplyTemplate::PetitionAcceptance),
        ChannelTier::Phone => Some(ReplyTemplate::PhoneFeedback),
        ChannelTier::Web => Some(ReplyTemplate::WebReceipt),
        ChannelTier::Public => None,
    };
    if let Some(template) = tier_template {
        weights.push((template, 3.0 * fear));
    }
    weights
}

pub fn choose_template<R: Rng>(weights: &[(ReplyTemplate, f64)], rng: &mut R) -> ReplyTemplate {
    match WeightedIndex::new(weights.iter().map(|(_, w)| *w)) {
        Ok(dist) => weights
            .get(dist.sample(rng))
            .map_or(ReplyTemplate::Vague, |(template, _)| *template),
        Err(_) => ReplyTemplate::Vague,
    }
}

/// Fills the template's placeholders from the case.
pub fn render_reply(template: ReplyTemplate, state: &GameState, order: &WorkOrder) -> String {
    template
        .text()
        .replace("{school}", &format!("the {}", state.school_profile.school_type.name()))
        .replace("{class}", state.class_detail.name.name())
        .replace("{count}", &order.evidences.len().to_string())
        .replace("{channel}", order.channel.def().name)
        .replace("{day}", &state.day.to_string())
}

/// Deltas a reply applies. Gains in pressure and fear grow with the
/// evidence behind the report; setbacks do not.
pub fn reply_changes(template: ReplyTemplate, evidence_power: u32) -> StateChanges {
    let effects = template.effects();
    let scale = REPLY_POWER_SCALE_BASE + evidence_power as f64 / REPLY_POWER_SCALE_DIVISOR;
    let scaled = |delta: i32| {
        if delta > 0 {
            (delta as f64 * scale).round() as i32
        } else {
            delta
        }
    };
    StateChanges {
        school_pressure: scaled(effects.school_pressure),
        bureau_fear: scaled(effects.bureau_fear),
        exposure_risk: effects.exposure_risk,
        work_orders: 0,
        cost: 0.0,
    }
}

/// Delivers every reply due today, in submission order.
pub fn resolve_replies<R: Rng>(
    state: &mut GameState,
    config: &EngineConfig,
    rng: &mut R,
) -> Vec<ResolvedReply> {
    let mut resolved = Vec::new();

    for idx in 0..state.submitted_work_orders.len() {
        let order = &state.submitted_work_orders[idx];
        if !order.is_pending() {
            continue;
        }
        let def = order.channel.def();
        let elapsed = state.day.saturating_sub(order.day);
        let chance = reply_probability(elapsed, def.reply_days, config.reply_jitter_days);
        if chance <= 0.0 || (chance < 1.0 && !rng.gen_bool(chance)) {
            continue;
        }

        let weights = template_weights(state.bureau_fear, def.tier, order.anonymous);
        let template = choose_template(&weights, rng);
        let content = render_reply(template, state, order);
        let changes = reply_changes(template, order.evidence_power());
        let (order_id, channel) = (order.id, order.channel);

        let applied = state.apply_changes(&changes);
        let day = state.day;
        state.submitted_work_orders[idx].record_reply(BureauReply {
            template,
            content,
            day,
        });

        debug!(
            day,
            order = order_id,
            channel = channel.key(),
            reply = template.label(),
            "reply delivered"
        );
        resolved.push(ResolvedReply {
            order_id,
            channel,
            template,
            changes: applied,
        });
    }
    resolved
}
