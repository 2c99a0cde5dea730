//! Core engine types: sides, match state, RNG, configuration.
//!
//! These are the building blocks every other module leans on. The match
//! state lives here so the effect resolver can read it without depending
//! on the rules layer that drives it.

pub mod config;
pub mod rng;
pub mod side;
pub mod state;

pub use config::{MatchConfig, DECK_SIZE, MAX_COPIES, MAX_CUSTOM_DECKS, MAX_HAND};
pub use rng::GameRng;
pub use side::{Opponent, Side, SideMap};
pub use state::{HarmonyMatchState, MatchPhase, MatchResult, Winner};
