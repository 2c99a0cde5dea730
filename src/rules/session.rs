//! Store-style facade over `MatchEngine`.
//!
//! A presentation layer wants one object that holds "the" match and
//! answers each input with either the move it made or nothing. The
//! session keeps the canonical state and the RNG, and replaces the state
//! only when a transition succeeds.

use tracing::warn;

use crate::board::SlotId;
use crate::cards::CardId;
use crate::core::{GameRng, HarmonyMatchState, Opponent};
use crate::decks::{DeckCollection, DeckValidator};
use crate::effects::MoveResolution;
use crate::error::DeckRejection;

use super::engine::MatchEngine;

/// One player's running match.
pub struct MatchSession<'c> {
    engine: MatchEngine<'c>,
    state: HarmonyMatchState,
    rng: GameRng,
    deck: Option<Vec<CardId>>,
}

impl<'c> MatchSession<'c> {
    /// Idle session. Pass a seeded `GameRng` for reproducible matches.
    #[must_use]
    pub fn new(engine: MatchEngine<'c>, rng: GameRng) -> Self {
        Self {
            engine,
            state: HarmonyMatchState::idle(),
            rng,
            deck: None,
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &HarmonyMatchState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine<'c> {
        &self.engine
    }

    fn validator(&self) -> DeckValidator<'c> {
        DeckValidator::new(self.engine.catalog(), self.engine.config())
    }

    /// Deck the player brings to the next match. `None` means starter.
    ///
    /// An illegal deck is refused and the previous choice stays.
    pub fn set_deck(&mut self, deck: Option<Vec<CardId>>) -> Result<(), DeckRejection> {
        if let Some(cards) = &deck {
            self.validator().is_valid_deck(cards)?;
        }
        self.deck = deck;
        Ok(())
    }

    /// Bring the collection's active deck to the next match.
    ///
    /// Falls back to the starter deck when the active deck is illegal.
    pub fn use_active_deck(&mut self, decks: &DeckCollection) {
        let cards = decks.active_deck_cards(self.engine.catalog());
        match self.validator().is_valid_deck(&cards) {
            Ok(()) => self.deck = Some(cards),
            Err(rejection) => {
                warn!(deck = %decks.active_deck_id(), %rejection, "active deck is illegal, using starter");
                self.deck = None;
            }
        }
    }

    /// Start a match, discarding whatever was running.
    pub fn start_match(&mut self, opponent: Opponent) {
        self.state = self
            .engine
            .start_match(opponent, self.deck.as_deref(), &mut self.rng);
    }

    /// Play a card for the player. `None` leaves the state unchanged.
    pub fn play_player_card(&mut self, card_id: CardId, slot_id: SlotId) -> Option<MoveResolution> {
        let played = self
            .engine
            .play_player_card(&self.state, card_id, slot_id, &mut self.rng)
            .ok()?;
        self.state = played.state;
        Some(played.resolution)
    }

    /// Run the NPC's turn.
    ///
    /// Returns the NPC's move, or `None` when it passed or it was not the
    /// NPC's turn. A pass still advances the phase.
    pub fn npc_take_turn(&mut self) -> Option<MoveResolution> {
        let turn = self.engine.npc_take_turn(&self.state, &mut self.rng).ok()?;
        self.state = turn.state;
        turn.resolution
    }

    /// Back to `Idle`.
    pub fn end_match(&mut self) {
        self.state = self.engine.end_match();
    }

    /// Same as `end_match`.
    pub fn reset(&mut self) {
        self.state = self.engine.reset();
    }

    #[must_use]
    pub fn preview_placement(&self, card_id: CardId, slot_id: SlotId) -> Option<MoveResolution> {
        self.engine.preview_placement(&self.state, card_id, slot_id)
    }

    #[must_use]
    pub fn placement_preview(&self, card_id: CardId) -> Vec<MoveResolution> {
        self.engine.placement_preview(&self.state, card_id)
    }
}
