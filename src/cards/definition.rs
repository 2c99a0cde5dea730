//! Card definitions - static card data.
//!
//! A `Card` is owned by the catalog and never changes. What happens to
//! a card once it is on the board lives in `PlacedCard`.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Wellness theme of a card. Same-type neighbors trigger synergy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardType {
    Energy,
    Calm,
    Rest,
    Nourish,
    Anchor,
}

impl CardType {
    /// Every type in catalog order.
    pub const ALL: [CardType; 5] = [
        CardType::Energy,
        CardType::Calm,
        CardType::Rest,
        CardType::Nourish,
        CardType::Anchor,
    ];
}

/// How often a card turns up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

/// Static card definition.
///
/// `value` is the signed harmony the card adds when placed; positive
/// cards push harmony up, negative ones pull it down.
///
/// ```
/// use harmony_drift::cards::{Card, CardId, CardType, Rarity};
/// use harmony_drift::effects::Effect;
///
/// let card = Card::new(CardId::new(99), "Test Breeze", CardType::Calm, -2.0)
///     .with_rarity(Rarity::Rare)
///     .with_effect(Effect::AdjacentModify { delta: -1.0 });
///
/// assert_eq!(card.value, -2.0);
/// assert!(card.has_effect());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub card_type: CardType,
    pub value: f64,
    pub rarity: Rarity,
    pub flavor: String,
    pub effect: Effect,
}

impl Card {
    /// Common card with no effect and no flavor text.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            value,
            rarity: Rarity::Common,
            flavor: String::new(),
            effect: Effect::None,
        }
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Whether placing this card does anything beyond adding its value.
    #[must_use]
    pub fn has_effect(&self) -> bool {
        !matches!(self.effect, Effect::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_builder_defaults() {
        let card = Card::new(CardId::new(1), "Plain", CardType::Rest, -1.0);
        assert_eq!(card.rarity, Rarity::Common);
        assert!(card.flavor.is_empty());
        assert!(!card.has_effect());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(1), "Test", CardType::Energy, 3.0)
            .with_effect(Effect::HarmonyShift { harmony_delta: -1.5 });

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
