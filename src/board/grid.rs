//! Board contents: which card, if any, sits in each slot.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::slot::SlotId;
use crate::cards::PlacedCard;

/// Mapping from every slot to its occupant.
///
/// Always holds an entry for all thirteen slots. Backed by `im::OrdMap`,
/// so `clone()` is O(1) and writes copy only the touched path: a cloned
/// board never shares a mutated `PlacedCard` with its source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: OrdMap<SlotId, Option<PlacedCard>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with every slot empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: SlotId::all().map(|id| (id, None)).collect(),
        }
    }

    /// Occupant of a slot. `None` for empty or unknown slots.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> Option<&PlacedCard> {
        self.cells.get(&slot).and_then(Option::as_ref)
    }

    /// Mutable occupant of a slot.
    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut PlacedCard> {
        self.cells.get_mut(&slot).and_then(Option::as_mut)
    }

    /// Whether the slot exists on this board.
    #[must_use]
    pub fn has_slot(&self, slot: SlotId) -> bool {
        self.cells.contains_key(&slot)
    }

    /// Whether a card sits in `slot`.
    #[must_use]
    pub fn is_occupied(&self, slot: SlotId) -> bool {
        self.get(slot).is_some()
    }

    /// Put a card in a slot, replacing any occupant.
    pub fn place(&mut self, slot: SlotId, card: PlacedCard) {
        self.cells.insert(slot, Some(card));
    }

    /// Every entry in slot order, empty ones included.
    pub fn entries(&self) -> impl Iterator<Item = (SlotId, Option<&PlacedCard>)> {
        self.cells.iter().map(|(id, cell)| (*id, cell.as_ref()))
    }

    /// Occupied slots in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotId, &PlacedCard)> {
        self.cells
            .iter()
            .filter_map(|(id, cell)| cell.as_ref().map(|card| (*id, card)))
    }

    /// Ids of occupied slots in slot order.
    #[must_use]
    pub fn occupied_slots(&self) -> Vec<SlotId> {
        self.occupied().map(|(id, _)| id).collect()
    }

    /// Empty slots in slot order.
    #[must_use]
    pub fn empty_slots(&self) -> Vec<SlotId> {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// True when no empty slot is left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.values().all(Option::is_some)
    }

    /// Sum of current card values.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.occupied().map(|(_, card)| card.value).sum()
    }

    /// Apply `f` to the value of every occupied slot in `targets`.
    pub(crate) fn update_values(&mut self, targets: &[SlotId], f: impl Fn(f64) -> f64) {
        for slot in targets {
            if let Some(card) = self.get_mut(*slot) {
                card.value = f(card.value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardId};
    use crate::core::Side;

    fn placed(id: u16) -> PlacedCard {
        let card = CardCatalog::standard().card(CardId::new(id));
        PlacedCard::new(card, Side::Player)
    }

    #[test]
    fn test_empty_board_has_every_slot() {
        let board = Board::empty();
        assert_eq!(board.entries().count(), 13);
        assert_eq!(board.empty_slots().len(), 13);
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.total_value(), 0.0);
    }

    #[test]
    fn test_place_and_query() {
        let mut board = Board::empty();
        board.place(SlotId::new(3), placed(1));

        assert!(board.is_occupied(SlotId::new(3)));
        assert!(!board.is_occupied(SlotId::new(4)));
        assert_eq!(board.occupied_slots(), vec![SlotId::new(3)]);
        assert_eq!(board.empty_slots().len(), 12);
        assert!(!board.has_slot(SlotId::new(13)));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Board::empty();
        original.place(SlotId::new(0), placed(1));

        let mut copy = original.clone();
        copy.update_values(&[SlotId::new(0)], |v| v * 10.0);

        let before = original.get(SlotId::new(0)).unwrap().value;
        let after = copy.get(SlotId::new(0)).unwrap().value;
        assert_eq!(after, before * 10.0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::empty();
        for id in SlotId::all() {
            board.place(id, placed(1));
        }
        assert!(board.is_full());
        assert!(board.empty_slots().is_empty());
    }
}
