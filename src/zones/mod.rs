//! Card piles outside the board.
//!
//! Each side owns a deck, a hand and a discard (`SidePiles`). Piles are
//! `im::Vector`s so snapshotting a match state stays cheap.

mod piles;

pub use piles::SidePiles;
