//! Engine configuration.
//!
//! The rules of Orthokon are fixed; configuration only controls how strictly
//! the engine polices who may move:
//! - `TurnOrder::Free`: any piece may be moved at any time. The engine then
//!   behaves like a shared board where the presentation layer decides turns.
//! - `TurnOrder::Alternating`: colors must alternate, starting with `first`.
//!
//! Configs are plain serde data so a hosting application can keep them in
//! JSON alongside its own settings.

use serde::{Deserialize, Serialize};

use super::Color;
use crate::error::ConfigError;

/// Turn-order policy enforced by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOrder {
    /// No turn enforcement.
    #[default]
    Free,
    /// Colors alternate; `first` makes the opening move.
    Alternating { first: Color },
}

/// Engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Turn-order policy (default: `Free`).
    pub turn_order: TurnOrder,
}

impl EngineConfig {
    /// Require alternating turns, `first` moving first.
    #[must_use]
    pub fn with_alternating_turns(mut self, first: Color) -> Self {
        self.turn_order = TurnOrder::Alternating { first };
        self
    }

    /// Allow any piece to move at any time.
    #[must_use]
    pub fn with_free_turns(mut self) -> Self {
        self.turn_order = TurnOrder::Free;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use orthokon::core::{Color, EngineConfig, TurnOrder};
    ///
    /// let config = EngineConfig::from_json(
    ///     r#"{"turn_order": {"alternating": {"first": "Yellow"}}}"#,
    /// ).unwrap();
    /// assert_eq!(config.turn_order, TurnOrder::Alternating { first: Color::Yellow });
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Color expected to move after `moves_played` moves, or `None` under `Free`.
    #[must_use]
    pub fn color_to_move(&self, moves_played: u32) -> Option<Color> {
        match self.turn_order {
            TurnOrder::Free => None,
            TurnOrder::Alternating { first } if moves_played % 2 == 0 => Some(first),
            TurnOrder::Alternating { first } => Some(first.opponent()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.turn_order, TurnOrder::Free);
        assert_eq!(config.color_to_move(0), None);
        assert_eq!(config.color_to_move(7), None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_alternating_turns(Color::Red);
        assert_eq!(config.turn_order, TurnOrder::Alternating { first: Color::Red });

        let config = config.with_free_turns();
        assert_eq!(config.turn_order, TurnOrder::Free);
    }

    #[test]
    fn test_alternation() {
        let config = EngineConfig::default().with_alternating_turns(Color::Yellow);
        assert_eq!(config.color_to_move(0), Some(Color::Yellow));
        assert_eq!(config.color_to_move(1), Some(Color::Red));
        assert_eq!(config.color_to_move(2), Some(Color::Yellow));
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::default().with_alternating_turns(Color::Red);
        let json = config.to_json().unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_defaults_and_errors() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
        assert_eq!(
            EngineConfig::from_json(r#"{"turn_order": "free"}"#).unwrap().turn_order,
            TurnOrder::Free
        );

        let err = EngineConfig::from_json(r#"{"turn_order": "sideways"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
