//! Effect system for card placement.
//!
//! - `Effect`: the nine placement effects, one targeting rule each
//! - `EffectResolver`: runs an effect, then the board-wide type synergy
//!   pass, and scores the move as a `MoveResolution`
//!
//! ## Resolution order
//!
//! 1. Clone the board and place the card at its base value.
//! 2. Apply the card's effect to the clone.
//! 3. Reset every card to its base value and double any card with a
//!    same-type neighbor.
//! 4. Score: harmony from card values, contribution from the change in
//!    `|harmony|`, then any `HarmonyShift` on top.

mod effect;
mod resolver;

pub use effect::{Condition, Effect, PatternOffsets};
pub use resolver::{round4, EffectResolver, MoveResolution};
