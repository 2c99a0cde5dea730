use std::path::PathBuf;

use crate::board::SlotId;
use crate::cards::CardId;
use crate::core::MatchPhase;
use crate::decks::DeckId;

/// Lookups against the static board graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("unknown slot: {0}")]
    UnknownSlot(SlotId),
}

/// A match operation whose preconditions were not met.
///
/// These are expected, user-driven outcomes. State is never touched
/// when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("operation not allowed during {0:?}")]
    WrongPhase(MatchPhase),

    #[error("{0} is not in hand")]
    CardNotInHand(CardId),

    #[error("slot {0} is already occupied")]
    SlotOccupied(SlotId),

    #[error("unknown card: {0}")]
    UnknownCard(CardId),

    #[error("unknown slot: {0}")]
    UnknownSlot(SlotId),
}

/// One reason a deck or a collection change was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("deck must contain exactly {expected} cards, found {found}")]
    WrongSize { expected: usize, found: usize },

    #[error("{card} appears {count} times (max {max})")]
    TooManyCopies { card: CardId, count: usize, max: usize },

    #[error("unknown card: {0}")]
    UnknownCard(CardId),

    #[error("deck name must not be empty")]
    EmptyName,

    #[error("at most {0} custom decks may exist")]
    CollectionFull(usize),

    #[error("deck {0} is built in and cannot be changed")]
    BuiltIn(DeckId),

    #[error("deck {0} not found")]
    NotFound(DeckId),
}

/// Every problem found with a deck operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("deck rejected: {}", join_errors(.0))]
pub struct DeckRejection(pub Vec<DeckError>);

impl DeckRejection {
    /// Rejection with a single reason.
    #[must_use]
    pub fn single(error: DeckError) -> Self {
        Self(vec![error])
    }

    /// The individual reasons.
    #[must_use]
    pub fn errors(&self) -> &[DeckError] {
        &self.0
    }
}

fn join_errors(errors: &[DeckError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Persisting the deck collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access deck store at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode deck collection: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Invalid `MatchConfig` values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
