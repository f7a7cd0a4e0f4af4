//! Runtime-tunable engine settings.
//!
//! Defaults come from [`crate::core::constants`]; a JSON document may
//! override any subset of fields.

use crate::core::constants::*;
use crate::core::game_state::Difficulty;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Starting values and limits for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub baseline_pressure: i32,
    pub baseline_fear: i32,
    pub baseline_risk: i32,
    /// Last day before the session ends in a stalemate.
    pub max_day: u32,
    /// Total spend allowed, if capped.
    pub cost_cap: Option<f64>,
    pub event_chance_bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub events_enabled: bool,
    pub event_base_chance: f64,
    /// Exposure divided by this is added to the daily event chance.
    pub event_risk_divisor: f64,
    /// Pressure or fear at or above this counts as success.
    pub success_threshold: i32,
    /// Below this fear a recurrence-prone class relocates instead of stopping.
    pub redirect_fear_guard: i32,
    /// Extra days past the official deadline a reply may take.
    pub reply_jitter_days: u32,
    pub easy: DifficultySettings,
    pub medium: DifficultySettings,
    pub hard: DifficultySettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            events_enabled: true,
            event_base_chance: EVENT_BASE_CHANCE,
            event_risk_divisor: EVENT_RISK_DIVISOR,
            success_threshold: SUCCESS_THRESHOLD,
            redirect_fear_guard: REDIRECT_FEAR_GUARD,
            reply_jitter_days: REPLY_JITTER_DAYS,
            easy: DifficultySettings {
                baseline_pressure: 10,
                baseline_fear: 20,
                baseline_risk: 0,
                max_day: EASY_MAX_DAY,
                cost_cap: None,
                event_chance_bonus: 0.0,
            },
            medium: DifficultySettings {
                baseline_pressure: 5,
                baseline_fear: 10,
                baseline_risk: 5,
                max_day: MEDIUM_MAX_DAY,
                cost_cap: None,
                event_chance_bonus: 0.0,
            },
            hard: DifficultySettings {
                baseline_pressure: 0,
                baseline_fear: 5,
                baseline_risk: 10,
                max_day: HARD_MAX_DAY,
                cost_cap: Some(HARD_MODE_COST_CAP),
                event_chance_bonus: HARD_EVENT_CHANCE_BONUS,
            },
        }
    }
}

impl EngineConfig {
    pub fn difficulty(&self, difficulty: Difficulty) -> &DifficultySettings {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Same config with random events switched off.
    pub fn without_events(mut self) -> Self {
        self.events_enabled = false;
        self
    }

    /// Parses and validates a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=COUNTER_MAX).contains(&self.success_threshold) {
            return Err(ConfigError::Invalid(format!(
                "success_threshold must be within 1..={}, got {}",
                COUNTER_MAX, self.success_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.event_base_chance) {
            return Err(ConfigError::Invalid(format!(
                "event_base_chance must be a probability, got {}",
                self.event_base_chance
            )));
        }
        if self.event_risk_divisor <= 0.0 {
            return Err(ConfigError::Invalid(
                "event_risk_divisor must be positive".to_string(),
            ));
        }
        if self.reply_jitter_days > REPLY_JITTER_DAYS {
            return Err(ConfigError::Invalid(format!(
                "reply_jitter_days cannot exceed {REPLY_JITTER_DAYS}, got {}",
                self.reply_jitter_days
            )));
        }
        match self.hard.cost_cap {
            Some(cap) if cap <= HARD_MODE_COST_CAP => {}
            Some(cap) => {
                return Err(ConfigError::Invalid(format!(
                    "hard.cost_cap cannot exceed {HARD_MODE_COST_CAP}, got {cap}"
                )))
            }
            None => {
                return Err(ConfigError::Invalid(
                    "hard.cost_cap is required".to_string(),
                ))
            }
        }
        for (name, settings) in [
            ("easy", &self.easy),
            ("medium", &self.medium),
            ("hard", &self.hard),
        ] {
            if settings.max_day == 0 {
                return Err(ConfigError::Invalid(format!("{name}.max_day must be positive")));
            }
            if settings.cost_cap.is_some_and(|cap| cap < 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name}.cost_cap cannot be negative"
                )));
            }
            for value in [
                settings.baseline_pressure,
                settings.baseline_fear,
                settings.baseline_risk,
            ] {
                if !(COUNTER_MIN..=COUNTER_MAX).contains(&value) {
                    return Err(ConfigError::Invalid(format!(
                        "{name} baselines must be within {COUNTER_MIN}..={COUNTER_MAX}"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_only_hard_is_capped() {
        let config = EngineConfig::default();
        assert_eq!(config.difficulty(Difficulty::Easy).cost_cap, None);
        assert_eq!(config.difficulty(Difficulty::Medium).cost_cap, None);
        assert_eq!(config.difficulty(Difficulty::Hard).cost_cap, Some(50.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "events_enabled": false, "success_threshold": 70 }"#)
            .unwrap();
        assert!(!config.events_enabled);
        assert_eq!(config.success_threshold, 70);
        assert_eq!(config.reply_jitter_days, REPLY_JITTER_DAYS);
        assert_eq!(config.hard.max_day, HARD_MAX_DAY);
    }

    #[test]
    fn test_hard_cap_cannot_be_lifted() {
        let hard = |cap: &str| {
            format!(
                r#"{{ "hard": {{ "baseline_pressure": 0, "baseline_fear": 5, "baseline_risk": 10,
                    "max_day": 35, "cost_cap": {cap}, "event_chance_bonus": 0.05 }} }}"#
            )
        };
        for cap in ["null", "500.0", "50.5"] {
            assert!(
                matches!(EngineConfig::from_json(&hard(cap)), Err(ConfigError::Invalid(_))),
                "cap {cap}"
            );
        }
        let tighter = EngineConfig::from_json(&hard("30.0")).unwrap();
        assert_eq!(tighter.hard.cost_cap, Some(30.0));
        assert!(EngineConfig::from_json(&hard("50.0")).is_ok());
    }

    #[test]
    fn test_reply_jitter_is_bounded() {
        assert!(matches!(
            EngineConfig::from_json(r#"{ "reply_jitter_days": 30 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "reply_jitter_days": 4294967295 }"#),
            Err(ConfigError::Invalid(_))
        ));
        let config = EngineConfig::from_json(r#"{ "reply_jitter_days": 1 }"#).unwrap();
        assert_eq!(config.reply_jitter_days, 1);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            EngineConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "success_threshold": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
