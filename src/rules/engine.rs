//! Match state machine.
//!
//! `MatchEngine` owns the rules (catalog, config, NPC policy) but no
//! match: every transition takes a state by reference and hands back a
//! new one. A rejected transition returns `Err` and the caller keeps the
//! state it already had.
//!
//! ```text
//! Idle -> PlayerTurn <-> NpcTurn -> Completed
//! ```

use tracing::{debug, info};

use crate::board::{topology, SlotId};
use crate::cards::{build_starter_deck, CardCatalog, CardId};
use crate::core::{
    GameRng, HarmonyMatchState, MatchConfig, MatchPhase, MatchResult, Opponent, Side, SideMap,
};
use crate::effects::{round4, EffectResolver, MoveResolution};
use crate::error::{ConfigError, MoveRejection};
use crate::strategy::{enumerate_moves, HarmonyGreedy, OpponentPolicy};
use crate::zones::SidePiles;

/// A committed play: the new state and the move that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Played {
    pub state: HarmonyMatchState,
    pub resolution: MoveResolution,
}

/// Outcome of an NPC turn. `resolution` is `None` when the NPC passed.
#[derive(Clone, Debug, PartialEq)]
pub struct NpcTurn {
    pub state: HarmonyMatchState,
    pub resolution: Option<MoveResolution>,
}

/// Rules for running matches.
pub struct MatchEngine<'c> {
    catalog: &'c CardCatalog,
    config: MatchConfig,
    policy: Box<dyn OpponentPolicy + 'c>,
}

impl MatchEngine<'static> {
    /// Engine over the standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        MatchEngine::new(CardCatalog::standard())
    }
}

impl<'c> MatchEngine<'c> {
    /// Engine with default config and the greedy NPC.
    #[must_use]
    pub fn new(catalog: &'c CardCatalog) -> Self {
        Self {
            catalog,
            config: MatchConfig::default(),
            policy: Box::new(HarmonyGreedy),
        }
    }

    /// Swap in `config` after checking it.
    pub fn with_config(mut self, config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    #[must_use]
    pub fn with_policy(mut self, policy: impl OpponentPolicy + 'c) -> Self {
        self.policy = Box::new(policy);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &'c CardCatalog {
        self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Roll `±[baseline_min, baseline_max]`, rounded to one decimal.
    fn roll_baseline(&self, rng: &mut GameRng) -> f64 {
        let magnitude = rng.gen_range_f64(self.config.baseline_min..=self.config.baseline_max);
        let magnitude = (magnitude * 10.0).round() / 10.0;
        if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Deal a new match against `opponent`.
    ///
    /// The player shuffles `player_deck`, or the starter deck when none is
    /// given; the NPC always shuffles a fresh starter deck. Both draw to
    /// `max_hand` and the player moves first.
    ///
    /// The deal forks `rng` once and splits the fork into a `"baseline"`
    /// and a `"shuffle"` stream, so the opening baseline does not depend
    /// on which decks are dealt.
    pub fn start_match(
        &self,
        opponent: Opponent,
        player_deck: Option<&[CardId]>,
        rng: &mut GameRng,
    ) -> HarmonyMatchState {
        let starter = build_starter_deck(self.catalog);
        let player_cards = match player_deck {
            Some(cards) if !cards.is_empty() => cards,
            _ => starter.as_slice(),
        };

        let deal = rng.fork();
        let baseline = self.roll_baseline(&mut deal.for_context("baseline"));
        let mut shuffle = deal.for_context("shuffle");
        let mut piles = SideMap {
            player: SidePiles::shuffled(player_cards, &mut shuffle),
            npc: SidePiles::shuffled(&starter, &mut shuffle),
        };
        for side in Side::ALL {
            piles[side].draw_up_to(self.config.max_hand, &mut shuffle);
        }

        info!(opponent = opponent.name(), baseline, "match started");

        HarmonyMatchState {
            phase: MatchPhase::PlayerTurn,
            opponent: Some(opponent),
            baseline_harmony: baseline,
            harmony: baseline,
            piles,
            ..HarmonyMatchState::idle()
        }
    }

    /// Check a play by `side` without simulating it.
    fn check_play(
        &self,
        state: &HarmonyMatchState,
        side: Side,
        card_id: CardId,
        slot_id: SlotId,
    ) -> Result<(), MoveRejection> {
        if state.phase.acting_side() != Some(side) {
            return Err(MoveRejection::WrongPhase(state.phase));
        }
        if !topology::contains(slot_id) {
            return Err(MoveRejection::UnknownSlot(slot_id));
        }
        if !self.catalog.contains(card_id) {
            return Err(MoveRejection::UnknownCard(card_id));
        }
        if !state.piles[side].hand_contains(card_id) {
            return Err(MoveRejection::CardNotInHand(card_id));
        }
        if state.board.is_occupied(slot_id) {
            return Err(MoveRejection::SlotOccupied(slot_id));
        }
        Ok(())
    }

    /// Play `card_id` from the player's hand into `slot_id`.
    pub fn play_player_card(
        &self,
        state: &HarmonyMatchState,
        card_id: CardId,
        slot_id: SlotId,
        rng: &mut GameRng,
    ) -> Result<Played, MoveRejection> {
        if let Err(rejection) = self.check_play(state, Side::Player, card_id, slot_id) {
            debug!(%card_id, %slot_id, %rejection, "player move rejected");
            return Err(rejection);
        }

        let resolution = EffectResolver::simulate_placement(self.catalog, state, Side::Player, card_id, slot_id)
            .ok_or(MoveRejection::SlotOccupied(slot_id))?;
        let next = self.commit(state, &resolution, rng);

        Ok(Played {
            state: next,
            resolution,
        })
    }

    /// Let the NPC pick and play a move, or pass if it has none.
    pub fn npc_take_turn(
        &self,
        state: &HarmonyMatchState,
        rng: &mut GameRng,
    ) -> Result<NpcTurn, MoveRejection> {
        if state.phase != MatchPhase::NpcTurn {
            debug!(phase = ?state.phase, "npc turn rejected");
            return Err(MoveRejection::WrongPhase(state.phase));
        }

        match self.policy.choose_move(self.catalog, state, Side::Npc) {
            Some(candidate) => {
                self.check_play(state, Side::Npc, candidate.card_id, candidate.slot_id)?;
                let next = self.commit(state, &candidate.resolution, rng);
                Ok(NpcTurn {
                    state: next,
                    resolution: Some(candidate.resolution),
                })
            }
            None => {
                debug!(hand = state.piles[Side::Npc].hand.len(), "npc passes");
                let mut next = state.clone();
                next.turn_count += 1;
                self.advance(&mut next, Side::Npc);
                Ok(NpcTurn {
                    state: next,
                    resolution: None,
                })
            }
        }
    }

    /// Apply a resolution for its owner and move to the next phase.
    ///
    /// A redraw that empties the deck reshuffles the discard from `rng`.
    fn commit(&self, state: &HarmonyMatchState, resolution: &MoveResolution, rng: &mut GameRng) -> HarmonyMatchState {
        let side = resolution.owner;
        let card_id = resolution.card.id;
        let mut next = state.clone();

        let piles = &mut next.piles[side];
        piles.take_from_hand(card_id);
        piles.discard(card_id);
        piles.draw_up_to(self.config.max_hand, rng);

        next.board = resolution.board.clone();
        next.baseline_harmony = round4(next.baseline_harmony + resolution.card.effect.harmony_shift());
        next.harmony = resolution.harmony_after;
        next.contributions[side] = round4(next.contributions[side] + resolution.contribution_delta);
        next.turn_count += 1;
        next.last_move = Some(resolution.clone());

        debug!(
            %side,
            card = %card_id,
            slot = %resolution.slot_id,
            harmony = next.harmony,
            delta = resolution.contribution_delta,
            "move committed"
        );

        self.advance(&mut next, side);
        next
    }

    /// Hand the turn over, or finish the match on a full board.
    fn advance(&self, state: &mut HarmonyMatchState, acted: Side) {
        if state.board.is_full() {
            state.phase = MatchPhase::Completed;
            let result = MatchResult::from_state(state);
            info!(
                winner = ?result.winner,
                player = result.player_contribution,
                npc = result.npc_contribution,
                "match completed"
            );
            state.result = Some(result);
        } else {
            state.phase = match acted {
                Side::Player => MatchPhase::NpcTurn,
                Side::Npc => MatchPhase::PlayerTurn,
            };
        }
    }

    /// Abandon the match and return to `Idle`.
    #[must_use]
    pub fn end_match(&self) -> HarmonyMatchState {
        debug!("match ended");
        HarmonyMatchState::idle()
    }

    /// Same as `end_match`.
    #[must_use]
    pub fn reset(&self) -> HarmonyMatchState {
        self.end_match()
    }

    /// Simulate the player dropping `card_id` in `slot_id`.
    #[must_use]
    pub fn preview_placement(
        &self,
        state: &HarmonyMatchState,
        card_id: CardId,
        slot_id: SlotId,
    ) -> Option<MoveResolution> {
        EffectResolver::simulate_placement(self.catalog, state, Side::Player, card_id, slot_id)
    }

    /// Simulate `card_id` in every empty slot, in slot order.
    #[must_use]
    pub fn placement_preview(&self, state: &HarmonyMatchState, card_id: CardId) -> Vec<MoveResolution> {
        state
            .board
            .empty_slots()
            .into_iter()
            .filter_map(|slot_id| self.preview_placement(state, card_id, slot_id))
            .collect()
    }

    /// Every `(card, slot)` the side to act could play right now.
    #[must_use]
    pub fn legal_moves(&self, state: &HarmonyMatchState) -> Vec<(CardId, SlotId)> {
        match state.phase.acting_side() {
            Some(side) => enumerate_moves(state, side),
            None => Vec::new(),
        }
    }
}
