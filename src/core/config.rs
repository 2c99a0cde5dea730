//! Match configuration.
//!
//! The engine never hardcodes table sizes - hands, decks and the
//! baseline range all come from `MatchConfig`. The defaults are the
//! shipped rules.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Cards held in hand after every redraw.
pub const MAX_HAND: usize = 5;

/// Exact number of cards in a legal deck.
pub const DECK_SIZE: usize = 15;

/// Copies of one card a deck may hold.
pub const MAX_COPIES: usize = 3;

/// Custom (non built-in) decks a collection may hold at once.
pub const MAX_CUSTOM_DECKS: usize = 2;

/// Rules knobs for a match and for deck validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Hand size both sides draw up to.
    pub max_hand: usize,

    /// Required deck length.
    pub deck_size: usize,

    /// Copy limit per card id.
    pub max_copies: usize,

    /// Limit on user-built decks.
    pub max_custom_decks: usize,

    /// Smallest opening |harmony|.
    pub baseline_min: f64,

    /// Largest opening |harmony|.
    pub baseline_max: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_hand: MAX_HAND,
            deck_size: DECK_SIZE,
            max_copies: MAX_COPIES,
            max_custom_decks: MAX_CUSTOM_DECKS,
            baseline_min: 3.0,
            baseline_max: 10.0,
        }
    }
}

impl MatchConfig {
    /// Override the hand size.
    #[must_use]
    pub fn with_max_hand(mut self, max_hand: usize) -> Self {
        self.max_hand = max_hand;
        self
    }

    /// Override the baseline magnitude range.
    #[must_use]
    pub fn with_baseline_range(mut self, min: f64, max: f64) -> Self {
        self.baseline_min = min;
        self.baseline_max = max;
        self
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hand == 0 {
            return Err(ConfigError::Validation("max_hand must be > 0".into()));
        }
        if self.deck_size < self.max_hand {
            return Err(ConfigError::Validation(
                "deck_size must be >= max_hand".into(),
            ));
        }
        if self.max_copies == 0 {
            return Err(ConfigError::Validation("max_copies must be > 0".into()));
        }
        if !(self.baseline_min >= 0.0 && self.baseline_min <= self.baseline_max) {
            return Err(ConfigError::Validation(
                "baseline range must satisfy 0 <= min <= max".into(),
            ));
        }
        Ok(())
    }
}
