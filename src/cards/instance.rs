//! Cards on the board.
//!
//! A `PlacedCard` is the board's own copy of a card's display and
//! scoring fields. `base_value` is frozen at placement; `value` is
//! recomputed on every resolution pass.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId, CardType, Rarity};
use crate::core::Side;

/// A card occupying a board slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub card_id: CardId,
    pub name: String,
    pub card_type: CardType,
    pub rarity: Rarity,
    /// Who played it.
    pub owner: Side,
    /// The card's value when it was placed.
    pub base_value: f64,
    /// Current value after effects and synergy.
    pub value: f64,
}

impl PlacedCard {
    /// Snapshot `card` for placement by `owner`.
    #[must_use]
    pub fn new(card: &Card, owner: Side) -> Self {
        Self {
            card_id: card.id,
            name: card.name.clone(),
            card_type: card.card_type,
            rarity: card.rarity,
            owner,
            base_value: card.value,
            value: card.value,
        }
    }

    /// Drop any modifications back to the placement value.
    pub fn reset_value(&mut self) {
        self.value = self.base_value;
    }

    /// Whether synergy or effects have moved the value.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.value != self.base_value
    }
}
