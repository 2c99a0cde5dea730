//! NPC decision making.
//!
//! The NPC scores every legal `(card, slot)` pair by simulating it with
//! `EffectResolver` and never touches the committed state.

mod policy;

pub use policy::{enumerate_moves, score_moves, CandidateMove, HarmonyGreedy, OpponentPolicy};
