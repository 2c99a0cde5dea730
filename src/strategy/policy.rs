//! Opponent move selection.
//!
//! Policies are trait-based so hosts can swap in other behaviors:
//! - `OpponentPolicy`: pick a move for a side, or pass
//! - `HarmonyGreedy`: the shipped NPC, maximizing contribution

use crate::board::SlotId;
use crate::cards::{CardCatalog, CardId};
use crate::core::{HarmonyMatchState, Side};
use crate::effects::{EffectResolver, MoveResolution};

/// A legal move with its simulated outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateMove {
    pub card_id: CardId,
    pub slot_id: SlotId,
    pub resolution: MoveResolution,
}

impl CandidateMove {
    /// Primary score: how far the move pulls `|harmony|` toward zero.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.resolution.contribution_delta
    }

    /// Tie-break: `|harmony_after|`, lower is more stable.
    #[must_use]
    pub fn stability(&self) -> f64 {
        self.resolution.harmony_after.abs()
    }

    /// Strictly better than `other`: higher score, then lower stability.
    #[must_use]
    pub fn beats(&self, other: &CandidateMove) -> bool {
        self.score() > other.score()
            || (self.score() == other.score() && self.stability() < other.stability())
    }
}

/// Every `(card, slot)` a side may play: hand order, then slot order.
///
/// Repeated copies of a card in hand are enumerated once; they would
/// score identically.
#[must_use]
pub fn enumerate_moves(state: &HarmonyMatchState, side: Side) -> Vec<(CardId, SlotId)> {
    let empty = state.board.empty_slots();
    let mut seen: Vec<CardId> = Vec::new();
    let mut moves = Vec::new();

    for card in state.piles[side].hand.iter().copied() {
        if seen.contains(&card) {
            continue;
        }
        seen.push(card);
        moves.extend(empty.iter().map(|slot| (card, *slot)));
    }

    moves
}

/// Simulate every legal move for `side`, in enumeration order.
#[must_use]
pub fn score_moves(catalog: &CardCatalog, state: &HarmonyMatchState, side: Side) -> Vec<CandidateMove> {
    enumerate_moves(state, side)
        .into_iter()
        .filter_map(|(card_id, slot_id)| {
            EffectResolver::simulate_placement(catalog, state, side, card_id, slot_id).map(|resolution| {
                CandidateMove {
                    card_id,
                    slot_id,
                    resolution,
                }
            })
        })
        .collect()
}

/// Chooses a move for a side.
pub trait OpponentPolicy: Send + Sync {
    /// Pick a move, or `None` to pass. Must not modify `state`.
    fn choose_move(
        &self,
        catalog: &CardCatalog,
        state: &HarmonyMatchState,
        side: Side,
    ) -> Option<CandidateMove>;
}

/// Greedy contribution maximizer.
///
/// Picks the highest `contribution_delta`, breaking ties by the lowest
/// `|harmony_after|`. Remaining ties go to the first enumerated move.
#[derive(Clone, Debug, Default)]
pub struct HarmonyGreedy;

impl OpponentPolicy for HarmonyGreedy {
    fn choose_move(
        &self,
        catalog: &CardCatalog,
        state: &HarmonyMatchState,
        side: Side,
    ) -> Option<CandidateMove> {
        score_moves(catalog, state, side)
            .into_iter()
            .fold(None, |best: Option<CandidateMove>, candidate| match best {
                Some(current) if !candidate.beats(&current) => Some(current),
                _ => Some(candidate),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PlacedCard;
    use im::Vector;

    fn state_with_npc_hand(raw: &[u16], baseline: f64) -> HarmonyMatchState {
        let mut state = HarmonyMatchState::idle();
        state.baseline_harmony = baseline;
        state.harmony = baseline;
        state.piles[Side::Npc].hand = raw.iter().map(|r| CardId::new(*r)).collect::<Vector<_>>();
        state
    }

    #[test]
    fn test_enumeration_order_and_dedup() {
        let state = state_with_npc_hand(&[5, 1, 5], 4.0);
        let moves = enumerate_moves(&state, Side::Npc);

        assert_eq!(moves.len(), 2 * 13);
        assert_eq!(moves[0], (CardId::new(5), SlotId::new(0)));
        assert_eq!(moves[12], (CardId::new(5), SlotId::new(12)));
        assert_eq!(moves[13], (CardId::new(1), SlotId::new(0)));
    }

    #[test]
    fn test_empty_hand_has_no_moves() {
        let state = state_with_npc_hand(&[], 4.0);
        assert!(enumerate_moves(&state, Side::Npc).is_empty());
        assert!(HarmonyGreedy
            .choose_move(CardCatalog::standard(), &state, Side::Npc)
            .is_none());
    }

    #[test]
    fn test_greedy_pulls_toward_zero() {
        // Harmony is +4: Deep Breath (-3) beats Morning Jolt (+3).
        let state = state_with_npc_hand(&[1, 5], 4.0);
        let chosen = HarmonyGreedy
            .choose_move(CardCatalog::standard(), &state, Side::Npc)
            .unwrap();

        assert_eq!(chosen.card_id, CardId::new(5));
        assert_eq!(chosen.score(), 3.0);
        // On an empty board every slot ties; the first wins.
        assert_eq!(chosen.slot_id, SlotId::new(0));
    }

    #[test]
    fn test_greedy_avoids_overshooting_synergy() {
        let catalog = CardCatalog::standard();
        let mut state = state_with_npc_hand(&[5], 8.0);
        let mut board = state.board.clone();
        board.place(SlotId::new(6), PlacedCard::new(catalog.card(CardId::new(5)), Side::Player));
        state.board = board;
        state.harmony = 5.0; // 8 - 3

        let chosen = HarmonyGreedy.choose_move(catalog, &state, Side::Npc).unwrap();

        // Next to the other Deep Breath both double: 8 - 6 - 6 = -4, |5|-|-4| = 1.
        // Elsewhere: 8 - 3 - 3 = 2, |5|-|2| = 3. The isolated slot wins.
        assert_eq!(chosen.score(), 3.0);
        assert!(!crate::board::neighbors_of(SlotId::new(6))
            .unwrap()
            .contains(&chosen.slot_id));
    }

    #[test]
    fn test_stability_breaks_score_ties() {
        let state = state_with_npc_hand(&[1], 0.0);
        let a = score_moves(CardCatalog::standard(), &state, Side::Npc).remove(0);
        let mut b = a.clone();
        b.resolution.harmony_after = 1.0;
        let mut c = a.clone();
        c.resolution.harmony_after = 5.0;

        assert!(b.beats(&c));
        assert!(!c.beats(&b));
        assert!(!b.beats(&b.clone()));
    }
}
