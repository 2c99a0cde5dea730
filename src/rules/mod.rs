//! Match rules.
//!
//! - `MatchEngine`: pure transitions over `HarmonyMatchState`
//! - `MatchSession`: holds the canonical state for a UI and applies
//!   transitions atomically

mod engine;
mod session;

pub use engine::{MatchEngine, NpcTurn, Played};
pub use session::MatchSession;
