//! Deck building and the persisted deck collection.
//!
//! ## Key Types
//!
//! - `DeckValidator`: Size, copy-limit and catalog checks
//! - `DeckCollection`: Custom decks plus the active selection
//! - `DeckStore`: Whole-object persistence of the collection

mod collection;
mod store;
mod validation;

pub use collection::{CustomDeck, DeckCollection, DeckId, DeckView};
pub use store::{load_or_default, DeckStore, FileDeckStore, MemoryDeckStore, NAMESPACE};
pub use validation::{summarize, DeckSummary, DeckValidator};
