//! Match state.
//!
//! `HarmonyMatchState` is the single canonical record of a match. It is
//! only ever replaced wholesale by the transitions in
//! `rules::MatchEngine`; nothing edits it in place.
//!
//! ## Harmony bookkeeping
//!
//! After every committed move `baseline_harmony + board.total_value()`
//! equals `harmony` to four decimals. A `HarmonyShift` move folds its
//! delta into `baseline_harmony` to keep that true.

use serde::{Deserialize, Serialize};

use super::side::{Opponent, Side, SideMap};
use crate::board::Board;
use crate::cards::CardId;
use crate::effects::{round4, MoveResolution};
use crate::zones::SidePiles;

/// Where the match is in its turn cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchPhase {
    /// No match running. Also the reset target.
    #[default]
    Idle,
    PlayerTurn,
    NpcTurn,
    /// Board full; `result` is set. Terminal.
    Completed,
}

impl MatchPhase {
    /// The side expected to act, if any.
    #[must_use]
    pub const fn acting_side(self) -> Option<Side> {
        match self {
            MatchPhase::PlayerTurn => Some(Side::Player),
            MatchPhase::NpcTurn => Some(Side::Npc),
            MatchPhase::Idle | MatchPhase::Completed => None,
        }
    }
}

/// Who came out ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Winner {
    Player,
    Npc,
    Draw,
}

/// Final tally of a completed match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Winner,
    pub player_contribution: f64,
    pub npc_contribution: f64,
    pub final_harmony: f64,
    pub turns: u32,
}

impl MatchResult {
    /// Score a finished state: strictly higher contribution wins.
    #[must_use]
    pub fn from_state(state: &HarmonyMatchState) -> Self {
        let player = round4(state.contributions[Side::Player]);
        let npc = round4(state.contributions[Side::Npc]);
        let winner = if player > npc {
            Winner::Player
        } else if npc > player {
            Winner::Npc
        } else {
            Winner::Draw
        };
        Self {
            winner,
            player_contribution: player,
            npc_contribution: npc,
            final_harmony: state.harmony,
            turns: state.turn_count,
        }
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarmonyMatchState {
    pub phase: MatchPhase,
    pub opponent: Option<Opponent>,
    /// Completed turns, plays and NPC passes alike.
    pub turn_count: u32,
    pub baseline_harmony: f64,
    pub harmony: f64,
    pub contributions: SideMap<f64>,
    pub board: Board,
    pub piles: SideMap<SidePiles>,
    pub last_move: Option<MoveResolution>,
    pub result: Option<MatchResult>,
}

impl Default for HarmonyMatchState {
    fn default() -> Self {
        Self::idle()
    }
}

impl HarmonyMatchState {
    /// No match: empty board, zero contributions.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            phase: MatchPhase::Idle,
            opponent: None,
            turn_count: 0,
            baseline_harmony: 0.0,
            harmony: 0.0,
            contributions: SideMap::default(),
            board: Board::empty(),
            piles: SideMap::default(),
            last_move: None,
            result: None,
        }
    }

    #[must_use]
    pub fn player_contribution(&self) -> f64 {
        self.contributions[Side::Player]
    }

    #[must_use]
    pub fn npc_contribution(&self) -> f64 {
        self.contributions[Side::Npc]
    }

    /// A side's hand, top-drawn last.
    #[must_use]
    pub fn hand(&self, side: Side) -> Vec<CardId> {
        self.piles[side].hand.iter().copied().collect()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == MatchPhase::Completed
    }

    /// `baseline + Σ values`, the harmony the board alone accounts for.
    #[must_use]
    pub fn board_harmony(&self) -> f64 {
        round4(self.baseline_harmony + self.board.total_value())
    }
}
