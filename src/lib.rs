//! # harmony-drift
//!
//! Rules engine for Harmony Drift, a two-sided board-and-card duel.
//!
//! The player and an NPC take turns placing cards from a hand onto a
//! thirteen-slot board. Every card shifts the shared harmony value, card
//! effects alter neighbours, and same-type neighbours double each other.
//! A side earns contribution for each move that pulls harmony toward
//! zero. The match ends when the board is full.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: `HarmonyMatchState` is a plain value. Engine
//!    transitions take it by reference and return a new one, so previews
//!    and rejected moves never touch the committed state.
//!
//! 2. **Deterministic**: All randomness flows through a caller-supplied
//!    `GameRng`. A seed replays a match exactly.
//!
//! 3. **Data-Driven Cards**: Card behaviour is an `Effect` value on the
//!    catalog entry, resolved by one dispatcher.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Boards and piles use `im-rs`, so a
//!   simulation is an O(1) clone that never aliases placed cards.
//!
//! - **Static Tables**: Board adjacency and the standard catalog are built
//!   once and shared.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, match state
//! - `board`: Slot topology and board contents
//! - `cards`: Card definitions, catalog, placed instances
//! - `zones`: Deck, hand and discard piles
//! - `effects`: Effect variants and placement resolution
//! - `strategy`: NPC move scoring
//! - `rules`: Match engine and session facade
//! - `decks`: Deck validation, collection and persistence

pub mod board;
pub mod cards;
pub mod core;
pub mod decks;
pub mod effects;
pub mod error;
pub mod rules;
pub mod strategy;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    GameRng, HarmonyMatchState, MatchConfig, MatchPhase, MatchResult, Opponent, Side, SideMap,
    Winner,
};

pub use crate::board::{Board, SlotId};

pub use crate::cards::{Card, CardCatalog, CardId, CardType, PlacedCard, Rarity};

pub use crate::zones::SidePiles;

pub use crate::effects::{Effect, EffectResolver, MoveResolution};

pub use crate::strategy::{CandidateMove, HarmonyGreedy, OpponentPolicy};

pub use crate::rules::{MatchEngine, MatchSession};

pub use crate::decks::{DeckCollection, DeckId, DeckStore, DeckValidator};

pub use crate::error::{ConfigError, DeckError, DeckRejection, MoveRejection, StoreError, TopologyError};
