//! Static board graph.
//!
//! Adjacency is computed once, on first use, and never again. Row `A`
//! and row `C` column `c` sit between row-`B` columns `c` and `c + 1`,
//! which gives the hex-like diamond:
//!
//! ```text
//!    A1  A2  A3  A4
//!  B1  B2  B3  B4  B5
//!    C1  C2  C3  C4
//! ```

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use super::slot::{Row, Slot, SlotId, SLOT_COUNT};
use crate::error::TopologyError;

static SLOTS: Lazy<Vec<Slot>> = Lazy::new(build_slots);

fn touches(a: (Row, u8), b: (Row, u8)) -> bool {
    let (row_a, col_a) = a;
    let (row_b, col_b) = b;
    match (row_a.index() - row_b.index()).abs() {
        0 => col_a.abs_diff(col_b) == 1,
        1 => {
            // One side is always row B.
            let (short, long) = if row_a == Row::B { (col_b, col_a) } else { (col_a, col_b) };
            long == short || long == short + 1
        }
        _ => false,
    }
}

fn build_slots() -> Vec<Slot> {
    let positions: Vec<(SlotId, (Row, u8))> = SlotId::all()
        .filter_map(|id| id.position().map(|pos| (id, pos)))
        .collect();

    positions
        .iter()
        .map(|&(id, pos)| Slot {
            id,
            row: pos.0,
            col: pos.1,
            neighbors: positions
                .iter()
                .filter(|&&(other, other_pos)| other != id && touches(pos, other_pos))
                .map(|&(other, _)| other)
                .collect::<SmallVec<_>>(),
        })
        .collect()
}

/// All slots in id order.
#[must_use]
pub fn slots() -> &'static [Slot] {
    &SLOTS
}

/// Look up a slot.
pub fn slot(id: SlotId) -> Result<&'static Slot, TopologyError> {
    SLOTS
        .get(id.0 as usize)
        .ok_or(TopologyError::UnknownSlot(id))
}

/// Look up a slot by its label, e.g. `"B3"`.
#[must_use]
pub fn slot_by_label(label: &str) -> Option<&'static Slot> {
    SlotId::parse(label).and_then(|id| slot(id).ok())
}

/// Whether `id` names a board slot.
#[must_use]
pub fn contains(id: SlotId) -> bool {
    (id.0 as usize) < SLOT_COUNT
}

/// Adjacent slots of `id`, ascending.
pub fn neighbors_of(id: SlotId) -> Result<&'static [SlotId], TopologyError> {
    slot(id).map(|s| s.neighbors.as_slice())
}

/// Resolve a relative grid position.
///
/// Returns `None` when the target row is off the three-row grid, when the
/// column does not exist in that row, or when `source` itself is not a
/// slot. Patterns rely on this to silently skip off-board cells.
#[must_use]
pub fn offset_slot(source: SlotId, row_offset: i8, col_offset: i8) -> Option<SlotId> {
    let (row, col) = source.position()?;
    let target_row = Row::from_index(row.index().checked_add(row_offset)?)?;
    let target_col = i16::from(col) + i16::from(col_offset);
    let target_col = u8::try_from(target_col).ok()?;
    SlotId::at(target_row, target_col)
}

/// Chebyshev distance over row index and column number.
pub fn distance(a: SlotId, b: SlotId) -> Result<u8, TopologyError> {
    let sa = slot(a)?;
    let sb = slot(b)?;
    let rows = sa.row.index().abs_diff(sb.row.index());
    let cols = sa.col.abs_diff(sb.col);
    Ok(rows.max(cols))
}
