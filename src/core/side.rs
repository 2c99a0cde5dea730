//! The two seats at the table and per-side storage.
//!
//! ## Side
//!
//! A match is always the local player against one NPC opponent.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for piles and
//! contribution totals.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Who placed a card or owns a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player,
    Npc,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Npc];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Npc,
            Side::Npc => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Npc => write!(f, "npc"),
        }
    }
}

/// Per-side data with O(1) access.
///
/// ```
/// use harmony_drift::core::{Side, SideMap};
///
/// let mut score: SideMap<f64> = SideMap::default();
/// score[Side::Npc] += 1.5;
/// assert_eq!(score[Side::Player], 0.0);
/// assert_eq!(score[Side::Npc], 1.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub player: T,
    pub npc: T,
}

impl<T> SideMap<T> {
    /// Build both entries from a factory.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            npc: factory(Side::Npc),
        }
    }

    /// Iterate `(side, value)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Npc, &self.npc)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Npc => &self.npc,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Npc => &mut self.npc,
        }
    }
}

/// NPC personas the player can challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Opponent {
    Luma,
    Sable,
}

impl Opponent {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Opponent::Luma => "Luma",
            Opponent::Sable => "Sable",
        }
    }

    /// One-line introduction shown before the match.
    #[must_use]
    pub const fn tagline(self) -> &'static str {
        match self {
            Opponent::Luma => "A bright morning spirit who loves a steady rhythm.",
            Opponent::Sable => "A quiet night drifter who settles every storm.",
        }
    }

    /// Parse the wire name (`"luma"` / `"sable"`).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "luma" => Some(Opponent::Luma),
            "sable" => Some(Opponent::Sable),
            _ => None,
        }
    }
}
