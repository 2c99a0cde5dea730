//! Placement effect definitions.
//!
//! Each variant names its own targeting rule: the placed card itself,
//! its neighbors, a whole type, a radius, a fixed pattern, or the whole
//! board. `HarmonyShift` touches no card at all.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardType;

/// What a `ConditionalModify` counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    /// Occupied neighbors of the placed card.
    AdjacentCount,
}

/// Relative `(row, col)` offsets for `Effect::Pattern`.
pub type PatternOffsets = SmallVec<[(i8, i8); 4]>;

/// What happens when a card is placed.
///
/// Serialized with a `kind` tag (`"adjacentModify"`, `"harmonyShift"`,
/// ...) and camelCase fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Effect {
    /// Nothing beyond the card's own value.
    #[default]
    None,

    /// Add `delta` to every occupied neighbor.
    AdjacentModify { delta: f64 },

    /// Add `delta` to every occupied card of `target_type`, anywhere.
    TypeModify { target_type: CardType, delta: f64 },

    /// Multiply every occupied card, the placed one included.
    GlobalScale { factor: f64 },

    /// Add `delta` to the occupied slots at each offset. Off-board
    /// offsets are skipped.
    Pattern { offsets: PatternOffsets, delta: f64 },

    /// Multiply every occupied neighbor.
    AdjacentScale { factor: f64 },

    /// Add `delta` to every other occupied slot within `radius`.
    RadiusModify { radius: u8, delta: f64 },

    /// Add `delta` per counted item to the placed card itself.
    ConditionalModify { condition: Condition, delta: f64 },

    /// Move total harmony directly, leaving card values alone.
    HarmonyShift { harmony_delta: f64 },
}

impl Effect {
    /// Build a pattern effect from a slice of offsets.
    #[must_use]
    pub fn pattern(offsets: &[(i8, i8)], delta: f64) -> Self {
        Self::Pattern {
            offsets: SmallVec::from_slice(offsets),
            delta,
        }
    }

    /// The serialized `kind` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Effect::None => "none",
            Effect::AdjacentModify { .. } => "adjacentModify",
            Effect::TypeModify { .. } => "typeModify",
            Effect::GlobalScale { .. } => "globalScale",
            Effect::Pattern { .. } => "pattern",
            Effect::AdjacentScale { .. } => "adjacentScale",
            Effect::RadiusModify { .. } => "radiusModify",
            Effect::ConditionalModify { .. } => "conditionalModify",
            Effect::HarmonyShift { .. } => "harmonyShift",
        }
    }

    /// Harmony moved directly by this effect, outside card values.
    #[must_use]
    pub fn harmony_shift(&self) -> f64 {
        match self {
            Effect::HarmonyShift { harmony_delta } => *harmony_delta,
            _ => 0.0,
        }
    }
}
