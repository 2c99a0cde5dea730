//! Card system: definitions, catalog, and board instances.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardType`, `Rarity`: Card classification
//! - `Card`: Immutable catalog entry with its placement effect
//! - `PlacedCard`: A card's per-match copy on the board
//! - `CardCatalog`: Definition lookup, plus the shipped standard table

mod catalog;
pub mod definition;
pub mod instance;
pub mod registry;

pub use catalog::{build_balanced_deck, build_starter_deck};
pub use definition::{Card, CardId, CardType, Rarity};
pub use instance::PlacedCard;
pub use registry::CardCatalog;
