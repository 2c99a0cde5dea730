//! Deck legality and summaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId, CardType};
use crate::core::MatchConfig;
use crate::error::{DeckError, DeckRejection};

/// Checks decks against a catalog and the configured limits.
#[derive(Clone, Debug)]
pub struct DeckValidator<'c> {
    catalog: &'c CardCatalog,
    deck_size: usize,
    max_copies: usize,
    max_custom_decks: usize,
}

impl<'c> DeckValidator<'c> {
    #[must_use]
    pub fn new(catalog: &'c CardCatalog, config: &MatchConfig) -> Self {
        Self {
            catalog,
            deck_size: config.deck_size,
            max_copies: config.max_copies,
            max_custom_decks: config.max_custom_decks,
        }
    }

    /// Validator over the standard catalog and default limits.
    #[must_use]
    pub fn standard() -> DeckValidator<'static> {
        DeckValidator::new(CardCatalog::standard(), &MatchConfig::default())
    }

    #[must_use]
    pub fn catalog(&self) -> &'c CardCatalog {
        self.catalog
    }

    #[must_use]
    pub fn max_custom_decks(&self) -> usize {
        self.max_custom_decks
    }

    /// Every rule `cards` breaks, or `Ok` for a legal deck.
    ///
    /// Reports the size first, then copy-limit and unknown-card problems
    /// in card id order.
    pub fn is_valid_deck(&self, cards: &[CardId]) -> Result<(), DeckRejection> {
        let mut errors = Vec::new();

        if cards.len() != self.deck_size {
            errors.push(DeckError::WrongSize {
                expected: self.deck_size,
                found: cards.len(),
            });
        }

        let mut counts: BTreeMap<CardId, usize> = BTreeMap::new();
        for card in cards {
            *counts.entry(*card).or_default() += 1;
        }

        for (card, count) in counts {
            if !self.catalog.contains(card) {
                errors.push(DeckError::UnknownCard(card));
            }
            if count > self.max_copies {
                errors.push(DeckError::TooManyCopies {
                    card,
                    count,
                    max: self.max_copies,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DeckRejection(errors))
        }
    }
}

/// At-a-glance breakdown for a deck builder screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckSummary {
    pub size: usize,
    pub type_counts: BTreeMap<CardType, usize>,
    /// Sum of card values; near zero is a balanced deck.
    pub total_value: f64,
    /// Ids the catalog does not know.
    pub unknown: Vec<CardId>,
}

/// Per-type counts and total value of `cards`.
#[must_use]
pub fn summarize(cards: &[CardId], catalog: &CardCatalog) -> DeckSummary {
    let mut type_counts = BTreeMap::new();
    let mut total_value = 0.0;
    let mut unknown = Vec::new();

    for id in cards {
        match catalog.get(*id) {
            Some(card) => {
                *type_counts.entry(card.card_type).or_insert(0) += 1;
                total_value += card.value;
            }
            None => unknown.push(*id),
        }
    }

    DeckSummary {
        size: cards.len(),
        type_counts,
        total_value,
        unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_balanced_deck, build_starter_deck};

    #[test]
    fn test_built_in_decks_are_valid() {
        let validator = DeckValidator::standard();
        let catalog = CardCatalog::standard();
        assert!(validator.is_valid_deck(&build_starter_deck(catalog)).is_ok());
        assert!(validator.is_valid_deck(&build_balanced_deck(catalog)).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let validator = DeckValidator::standard();
        let mut cards = vec![CardId::new(1); 4];
        cards.push(CardId::new(404));

        let errors = validator.is_valid_deck(&cards).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                DeckError::WrongSize { expected: 15, found: 5 },
                DeckError::TooManyCopies {
                    card: CardId::new(1),
                    count: 4,
                    max: 3
                },
                DeckError::UnknownCard(CardId::new(404)),
            ]
        );
    }

    #[test]
    fn test_summary() {
        let cards = [CardId::new(1), CardId::new(5), CardId::new(5), CardId::new(999)];
        let summary = summarize(&cards, CardCatalog::standard());

        assert_eq!(summary.size, 4);
        assert_eq!(summary.type_counts.get(&CardType::Calm), Some(&2));
        assert_eq!(summary.type_counts.get(&CardType::Energy), Some(&1));
        assert_eq!(summary.total_value, -3.0);
        assert_eq!(summary.unknown, vec![CardId::new(999)]);
    }
}
