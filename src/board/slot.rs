//! Slot identifiers and the row/column grid.
//!
//! The board is a diamond of three rows: `A` and `C` hold four slots,
//! `B` holds five. Slot ids are dense indices in row-major order, so
//! `A1..A4` are 0-3, `B1..B5` are 4-8 and `C1..C4` are 9-12.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Total number of slots on the board.
pub const SLOT_COUNT: usize = 13;

/// Board row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Row {
    A,
    B,
    C,
}

impl Row {
    /// Rows top to bottom.
    pub const ALL: [Row; 3] = [Row::A, Row::B, Row::C];

    /// Zero-based row index used for offsets and distances.
    #[must_use]
    pub const fn index(self) -> i8 {
        match self {
            Row::A => 0,
            Row::B => 1,
            Row::C => 2,
        }
    }

    /// Row at a zero-based index, if on the board.
    #[must_use]
    pub const fn from_index(index: i8) -> Option<Self> {
        match index {
            0 => Some(Row::A),
            1 => Some(Row::B),
            2 => Some(Row::C),
            _ => None,
        }
    }

    /// Number of columns in this row. Columns are numbered from 1.
    #[must_use]
    pub const fn columns(self) -> u8 {
        match self {
            Row::A | Row::C => 4,
            Row::B => 5,
        }
    }

    /// Id of the first slot in this row.
    const fn first_id(self) -> u8 {
        match self {
            Row::A => 0,
            Row::B => 4,
            Row::C => 9,
        }
    }

    fn letter(self) -> char {
        match self {
            Row::A => 'A',
            Row::B => 'B',
            Row::C => 'C',
        }
    }
}

/// Identifier for one board slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u8);

impl SlotId {
    /// Create a slot id from its raw index.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Id of the slot at `row`, `col` (1-based), if that column exists.
    #[must_use]
    pub const fn at(row: Row, col: u8) -> Option<Self> {
        if col == 0 || col > row.columns() {
            return None;
        }
        Some(Self(row.first_id() + col - 1))
    }

    /// Row and 1-based column, or `None` for an out-of-range id.
    #[must_use]
    pub const fn position(self) -> Option<(Row, u8)> {
        match self.0 {
            0..=3 => Some((Row::A, self.0 + 1)),
            4..=8 => Some((Row::B, self.0 - 3)),
            9..=12 => Some((Row::C, self.0 - 8)),
            _ => None,
        }
    }

    /// Parse a label such as `"B3"`.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let row = match chars.next()? {
            'A' | 'a' => Row::A,
            'B' | 'b' => Row::B,
            'C' | 'c' => Row::C,
            _ => return None,
        };
        let col: u8 = chars.as_str().parse().ok()?;
        Self::at(row, col)
    }

    /// Iterate every slot id in order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (0..SLOT_COUNT as u8).map(SlotId)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some((row, col)) => write!(f, "{}{}", row.letter(), col),
            None => write!(f, "Slot({})", self.0),
        }
    }
}

/// A board position and its precomputed neighbors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    pub row: Row,
    pub col: u8,
    /// Adjacent slots, ascending by id. At most six on this grid.
    pub neighbors: SmallVec<[SlotId; 6]>,
}
