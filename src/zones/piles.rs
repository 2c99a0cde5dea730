//! Deck, hand and discard for one side.
//!
//! Piles hold card ids only. The top of the deck is the front of the
//! vector; drawing from an empty deck first shuffles the discard back
//! in.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::GameRng;

/// One side's cards outside the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePiles {
    pub deck: Vector<CardId>,
    pub hand: Vector<CardId>,
    pub discard: Vector<CardId>,
}

impl SidePiles {
    /// Shuffle `cards` into a fresh deck with an empty hand and discard.
    #[must_use]
    pub fn shuffled(cards: &[CardId], rng: &mut GameRng) -> Self {
        let mut deck = cards.to_vec();
        rng.shuffle(&mut deck);
        Self {
            deck: deck.into_iter().collect(),
            hand: Vector::new(),
            discard: Vector::new(),
        }
    }

    /// Cards across all three piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Whether `card` is in hand.
    #[must_use]
    pub fn hand_contains(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// Move the whole discard into the deck and shuffle it.
    ///
    /// Returns the new deck size.
    pub fn reshuffle_discard(&mut self, rng: &mut GameRng) -> usize {
        let mut cards: Vec<CardId> = self.deck.iter().chain(self.discard.iter()).copied().collect();
        rng.shuffle(&mut cards);
        self.deck = cards.into_iter().collect();
        self.discard = Vector::new();
        self.deck.len()
    }

    /// Draw the top card into hand, reshuffling the discard if the deck
    /// is empty. `None` when both are empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<CardId> {
        if self.deck.is_empty() {
            if self.discard.is_empty() {
                return None;
            }
            self.reshuffle_discard(rng);
        }
        let card = self.deck.pop_front()?;
        self.hand.push_back(card);
        Some(card)
    }

    /// Draw until the hand holds `limit` cards or nothing is left.
    ///
    /// Returns the number drawn.
    pub fn draw_up_to(&mut self, limit: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;
        while self.hand.len() < limit && self.draw(rng).is_some() {
            drawn += 1;
        }
        drawn
    }

    /// Remove one copy of `card` from hand. `false` if none was held.
    pub fn take_from_hand(&mut self, card: CardId) -> bool {
        match self.hand.index_of(&card) {
            Some(index) => {
                self.hand.remove(index);
                true
            }
            None => false,
        }
    }

    /// Put a card on top of the discard.
    pub fn discard(&mut self, card: CardId) {
        self.discard.push_back(card);
    }
}
