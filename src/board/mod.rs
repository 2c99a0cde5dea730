//! Board topology and contents.
//!
//! - `SlotId`, `Row`, `Slot`: the fixed thirteen-slot diamond
//! - `topology`: precomputed adjacency, offsets and distances
//! - `Board`: per-match occupancy map

mod grid;
mod slot;
pub mod topology;

pub use grid::Board;
pub use slot::{Row, Slot, SlotId, SLOT_COUNT};
pub use topology::{distance, neighbors_of, offset_slot, slot_by_label};
