//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition the game knows about.
//! It provides fast lookup by `CardId` and iteration in id order.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::catalog::standard_cards;
use super::definition::{Card, CardId, CardType, Rarity};

static STANDARD: Lazy<CardCatalog> = Lazy::new(|| {
    let mut catalog = CardCatalog::new();
    for card in standard_cards() {
        catalog.register(card);
    }
    catalog
});

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use harmony_drift::cards::{Card, CardCatalog, CardId, CardType};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new(CardId::new(1), "Morning Jolt", CardType::Energy, 3.0));
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Morning Jolt");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in card table, built once.
    #[must_use]
    pub fn standard() -> &'static CardCatalog {
        &STANDARD
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        let pos = self.order.partition_point(|id| *id < card.id);
        self.order.insert(pos, card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Only for ids that came from this catalog; an unknown id here is a
    /// caller bug.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        self.cards
            .get(&id)
            .unwrap_or_else(|| panic!("{id} not found in catalog"))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Cards of one type, in id order.
    pub fn by_type(&self, card_type: CardType) -> impl Iterator<Item = &Card> {
        self.iter().filter(move |c| c.card_type == card_type)
    }

    /// Cards of one rarity, in id order.
    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Card> {
        self.iter().filter(move |c| c.rarity == rarity)
    }
}
