//! Placement resolution - simulating a card drop on a board snapshot.
//!
//! `EffectResolver::simulate_placement` is pure: it clones the board,
//! runs the placed card's effect, re-runs type synergy over the whole
//! board and scores the result. Committing the outcome is the match
//! engine's job.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{distance, neighbors_of, offset_slot, Board, SlotId};
use crate::cards::{Card, CardCatalog, CardId, PlacedCard};
use crate::core::{HarmonyMatchState, Side};

use super::{Condition, Effect};

/// Round to four decimal places, the precision all harmony math uses.
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Outcome of placing one card, committed or not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveResolution {
    pub slot_id: SlotId,
    pub card: Card,
    pub owner: Side,
    /// `state.harmony` before the move.
    pub harmony_before: f64,
    /// Harmony after the move, any `HarmonyShift` included.
    pub harmony_after: f64,
    /// `|before| - |after cards|`; positive when the move pulled harmony
    /// toward zero. A `HarmonyShift` is not counted here.
    pub contribution_delta: f64,
    /// Slots whose value was doubled by type synergy.
    pub synergies: Vec<SlotId>,
    /// The board after the move. Never shares mutated cards with the
    /// input state.
    pub board: Board,
}

/// Resolves placements against a board snapshot.
pub struct EffectResolver;

impl EffectResolver {
    /// Simulate `owner` placing `card_id` in `slot_id`.
    ///
    /// Returns `None` when the card is not in the catalog or the slot is
    /// occupied or off the board. `state` is never modified.
    #[must_use]
    pub fn simulate_placement(
        catalog: &CardCatalog,
        state: &HarmonyMatchState,
        owner: Side,
        card_id: CardId,
        slot_id: SlotId,
    ) -> Option<MoveResolution> {
        let card = catalog.get(card_id)?;
        if !state.board.has_slot(slot_id) || state.board.is_occupied(slot_id) {
            return None;
        }

        let mut board = state.board.clone();
        board.place(slot_id, PlacedCard::new(card, owner));
        Self::apply_effect(&mut board, slot_id, &card.effect);
        let synergies = Self::apply_type_synergy(&mut board);

        let harmony_before = state.harmony;
        let harmony_after_cards = round4(state.baseline_harmony + board.total_value());
        let contribution_delta = round4(harmony_before.abs() - harmony_after_cards.abs());
        let harmony_after = round4(harmony_after_cards + card.effect.harmony_shift());

        Some(MoveResolution {
            slot_id,
            card: card.clone(),
            owner,
            harmony_before,
            harmony_after,
            contribution_delta,
            synergies,
            board,
        })
    }

    /// Apply a placement effect for the card sitting in `slot`.
    ///
    /// Only occupied targets change. `HarmonyShift` and `None` leave the
    /// board alone.
    pub fn apply_effect(board: &mut Board, slot: SlotId, effect: &Effect) {
        let neighbors = neighbors_of(slot).unwrap_or_default();

        match effect {
            Effect::None | Effect::HarmonyShift { .. } => {}

            Effect::AdjacentModify { delta } => {
                board.update_values(neighbors, |v| v + *delta);
            }

            Effect::TypeModify { target_type, delta } => {
                let targets: Vec<SlotId> = board
                    .occupied()
                    .filter(|(_, card)| card.card_type == *target_type)
                    .map(|(id, _)| id)
                    .collect();
                board.update_values(&targets, |v| v + *delta);
            }

            Effect::GlobalScale { factor } => {
                if *factor != 1.0 {
                    let targets = board.occupied_slots();
                    board.update_values(&targets, |v| v * *factor);
                }
            }

            Effect::Pattern { offsets, delta } => {
                let targets: SmallVec<[SlotId; 4]> = offsets
                    .iter()
                    .filter_map(|&(rows, cols)| offset_slot(slot, rows, cols))
                    .collect();
                board.update_values(&targets, |v| v + *delta);
            }

            Effect::AdjacentScale { factor } => {
                board.update_values(neighbors, |v| v * *factor);
            }

            Effect::RadiusModify { radius, delta } => {
                let targets: Vec<SlotId> = board
                    .occupied()
                    .map(|(id, _)| id)
                    .filter(|id| *id != slot)
                    .filter(|id| distance(slot, *id).is_ok_and(|d| d <= *radius))
                    .collect();
                board.update_values(&targets, |v| v + *delta);
            }

            Effect::ConditionalModify { condition, delta } => {
                let count = match condition {
                    Condition::AdjacentCount => {
                        neighbors.iter().filter(|n| board.is_occupied(**n)).count()
                    }
                };
                let bonus = *delta * count as f64;
                board.update_values(&[slot], |v| v + bonus);
            }
        }
    }

    /// Recompute same-type synergy over the whole board.
    ///
    /// Every occupied card drops back to its base value; any card with at
    /// least one same-type neighbor then sits at double its base value.
    /// Returns the doubled slots in slot order.
    pub fn apply_type_synergy(board: &mut Board) -> Vec<SlotId> {
        let occupied = board.occupied_slots();
        for slot in &occupied {
            if let Some(card) = board.get_mut(*slot) {
                card.reset_value();
            }
        }

        let mut doubled: FxHashSet<SlotId> = FxHashSet::default();
        for slot in &occupied {
            let Some(card_type) = board.get(*slot).map(|c| c.card_type) else {
                continue;
            };
            let same_type: SmallVec<[SlotId; 6]> = neighbors_of(*slot)
                .unwrap_or_default()
                .iter()
                .copied()
                .filter(|n| board.get(*n).is_some_and(|c| c.card_type == card_type))
                .collect();
            if !same_type.is_empty() {
                doubled.insert(*slot);
                doubled.extend(same_type);
            }
        }

        let mut doubled: Vec<SlotId> = doubled.into_iter().collect();
        doubled.sort_unstable();
        for slot in &doubled {
            if let Some(card) = board.get_mut(*slot) {
                card.value = card.base_value * 2.0;
            }
        }
        doubled
    }
}
