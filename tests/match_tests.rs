//! Match state machine tests.
//!
//! These drive `MatchEngine` and `MatchSession` through whole turns:
//! - Dealing and the opening phase
//! - Committing player and NPC moves
//! - Completion on a full board

use harmony_drift::board::SlotId;
use harmony_drift::cards::{CardCatalog, CardId, PlacedCard};
use harmony_drift::core::{
    GameRng, HarmonyMatchState, MatchConfig, MatchPhase, Opponent, Side, Winner,
};
use harmony_drift::effects::{round4, EffectResolver};
use harmony_drift::error::MoveRejection;
use harmony_drift::rules::{MatchEngine, MatchSession};
use harmony_drift::zones::SidePiles;

fn slot(label: &str) -> SlotId {
    SlotId::parse(label).unwrap()
}

/// A player-turn state with a fixed baseline and hand, and `filled`
/// slots already holding NPC-owned copies of `filler` with synergy
/// applied.
fn staged_state(baseline: f64, hand: &[u16], filled: &[SlotId], filler: u16) -> HarmonyMatchState {
    let catalog = CardCatalog::standard();
    let mut state = HarmonyMatchState::idle();
    state.phase = MatchPhase::PlayerTurn;
    state.opponent = Some(Opponent::Luma);
    state.baseline_harmony = baseline;

    for id in filled {
        state
            .board
            .place(*id, PlacedCard::new(catalog.card(CardId::new(filler)), Side::Npc));
    }
    EffectResolver::apply_type_synergy(&mut state.board);
    state.harmony = state.board_harmony();

    let mut piles = SidePiles::default();
    for id in hand {
        piles.hand.push_back(CardId::new(*id));
    }
    state.piles[Side::Player] = piles;
    state
}

#[test]
fn test_start_match_scenario() {
    let engine = MatchEngine::standard();
    for seed in 0..50 {
        let mut rng = GameRng::new(seed);
        let state = engine.start_match(Opponent::Sable, None, &mut rng);

        assert_eq!(state.phase, MatchPhase::PlayerTurn);
        assert_eq!(state.piles[Side::Player].hand.len(), 5);
        assert_eq!(state.piles[Side::Npc].hand.len(), 5);
        let magnitude = state.baseline_harmony.abs();
        assert!((3.0..=10.0).contains(&magnitude), "baseline {magnitude}");
        assert_eq!(round4(magnitude * 10.0).fract(), 0.0);
        assert_eq!(state.board.occupied_count(), 0);
        assert_eq!(state.turn_count, 0);
    }
}

#[test]
fn test_same_seed_same_match() {
    let engine = MatchEngine::standard();
    let a = engine.start_match(Opponent::Luma, None, &mut GameRng::new(99));
    let b = engine.start_match(Opponent::Luma, None, &mut GameRng::new(99));
    assert_eq!(a, b);
}

#[test]
fn test_plain_card_on_empty_board() {
    let engine = MatchEngine::standard();
    let mut rng = GameRng::new(3);
    // Morning Jolt: Energy 3, no effect.
    let mut state = staged_state(-6.5, &[1], &[], 1);
    state.piles[Side::Player].deck.push_back(CardId::new(12));

    let played = engine
        .play_player_card(&state, CardId::new(1), slot("B3"), &mut rng)
        .unwrap();

    assert_eq!(played.state.harmony, -3.5);
    assert_eq!(played.resolution.contribution_delta, 3.0);
    assert_eq!(played.state.contributions[Side::Player], 3.0);
    assert_eq!(played.state.phase, MatchPhase::NpcTurn);
    // The redraw empties the one-card deck, so the played card is
    // reshuffled straight back into hand.
    assert_eq!(played.state.hand(Side::Player), vec![CardId::new(12), CardId::new(1)]);
    assert!(played.state.piles[Side::Player].deck.is_empty());
    assert!(played.state.piles[Side::Player].discard.is_empty());
}

#[test]
fn test_played_card_stays_in_discard_while_deck_lasts() {
    let engine = MatchEngine::standard();
    let mut rng = GameRng::new(3);
    let mut state = staged_state(-6.5, &[1], &[], 1);
    for id in [12, 13, 14, 15, 16, 17] {
        state.piles[Side::Player].deck.push_back(CardId::new(id));
    }

    let played = engine
        .play_player_card(&state, CardId::new(1), slot("B3"), &mut rng)
        .unwrap();
    let piles = &played.state.piles[Side::Player];
    assert_eq!(piles.hand.len(), 5);
    assert!(!piles.hand_contains(CardId::new(1)));
    assert_eq!(piles.deck, im::vector![CardId::new(17)]);
    assert_eq!(piles.discard, im::vector![CardId::new(1)]);
}

#[test]
fn test_removes_one_copy_from_hand() {
    let engine = MatchEngine::standard()
        .with_config(MatchConfig::default().with_max_hand(2))
        .unwrap();
    let mut rng = GameRng::new(3);
    let state = staged_state(4.0, &[5, 5, 12], &[], 1);

    let played = engine
        .play_player_card(&state, CardId::new(5), slot("A1"), &mut rng)
        .unwrap();
    let hand = played.state.hand(Side::Player);
    assert_eq!(hand, vec![CardId::new(5), CardId::new(12)]);
}

#[test]
fn test_occupied_slot_rejected_without_change() {
    let engine = MatchEngine::standard();
    let mut rng = GameRng::new(3);
    let state = staged_state(5.0, &[1, 5], &[slot("B1")], 12);

    assert_eq!(
        engine.play_player_card(&state, CardId::new(5), slot("B1"), &mut rng),
        Err(MoveRejection::SlotOccupied(slot("B1")))
    );
    assert_eq!(state.board.occupied_count(), 1);
    assert_eq!(state.hand(Side::Player).len(), 2);
}

#[test]
fn test_last_slot_completes_match() {
    let engine = MatchEngine::standard();
    let mut rng = GameRng::new(8);
    let filled: Vec<SlotId> = SlotId::all().filter(|id| *id != slot("C4")).collect();
    // Doubled Warm Broth everywhere else; Long Sleep (-4) has no Rest
    // neighbour.
    let mut state = staged_state(30.0, &[10], &filled, 12);
    state.contributions[Side::Npc] = 1.0;

    let played = engine
        .play_player_card(&state, CardId::new(10), slot("C4"), &mut rng)
        .unwrap();

    assert_eq!(played.state.phase, MatchPhase::Completed);
    assert!(played.state.board.is_full());
    let result = played.state.result.as_ref().unwrap();
    assert_eq!(result.player_contribution, played.state.contributions[Side::Player]);
    assert_eq!(result.npc_contribution, 1.0);
    assert_eq!(result.player_contribution, 4.0);
    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.final_harmony, played.state.harmony);

    // Nothing is playable once completed.
    assert!(matches!(
        engine.npc_take_turn(&played.state, &mut rng),
        Err(MoveRejection::WrongPhase(MatchPhase::Completed))
    ));
}

#[test]
fn test_equal_contributions_draw() {
    let engine = MatchEngine::standard();
    let mut rng = GameRng::new(8);
    let filled: Vec<SlotId> = SlotId::all().filter(|id| *id != slot("A1")).collect();
    let mut state = staged_state(0.0, &[12], &filled, 5);
    // Warm Broth among doubled Deep Breath cards gains no synergy.
    let before = state.harmony.abs();
    let after = (state.harmony + 2.0).abs();
    state.contributions[Side::Npc] = round4(before - after);

    let played = engine
        .play_player_card(&state, CardId::new(12), slot("A1"), &mut rng)
        .unwrap();
    assert_eq!(played.state.result.unwrap().winner, Winner::Draw);
}

#[test]
fn test_full_match_runs_to_completion() {
    let engine = MatchEngine::standard();
    let mut rng = GameRng::new(2024);
    let mut state = engine.start_match(Opponent::Luma, None, &mut rng);

    let mut turns = 0;
    while !state.is_completed() {
        state = match state.phase {
            MatchPhase::PlayerTurn => {
                let (card, target) = engine.legal_moves(&state)[0];
                engine.play_player_card(&state, card, target, &mut rng).unwrap().state
            }
            MatchPhase::NpcTurn => engine.npc_take_turn(&state, &mut rng).unwrap().state,
            phase => panic!("unexpected phase {phase:?}"),
        };
        assert!(state.piles[Side::Player].hand.len() <= 5);
        assert!(state.piles[Side::Npc].hand.len() <= 5);
        assert!((state.board_harmony() - state.harmony).abs() < 1e-3);
        turns += 1;
        assert!(turns <= 26, "match did not finish");
    }

    let result = state.result.as_ref().unwrap();
    assert_eq!(result.turns, state.turn_count);
    assert_eq!(state.board.occupied_count(), 13);
}

#[test]
fn test_npc_plays_best_move() {
    let engine = MatchEngine::standard();
    let mut rng = GameRng::new(11);
    let mut state = staged_state(6.0, &[], &[], 1);
    state.phase = MatchPhase::NpcTurn;
    // Deep Breath (-3) beats Warm Broth (+2) from a positive baseline.
    state.piles[Side::Npc].hand.push_back(CardId::new(12));
    state.piles[Side::Npc].hand.push_back(CardId::new(5));

    let turn = engine.npc_take_turn(&state, &mut rng).unwrap();
    let resolution = turn.resolution.unwrap();
    assert_eq!(resolution.card.id, CardId::new(5));
    assert_eq!(resolution.slot_id, slot("A1"));
    assert_eq!(turn.state.contributions[Side::Npc], 3.0);
    assert_eq!(turn.state.phase, MatchPhase::PlayerTurn);
}

#[test]
fn test_small_hand_config() {
    let engine = MatchEngine::standard()
        .with_config(MatchConfig::default().with_max_hand(3))
        .unwrap();
    let state = engine.start_match(Opponent::Luma, None, &mut GameRng::new(1));
    assert_eq!(state.piles[Side::Player].hand.len(), 3);
    assert_eq!(state.piles[Side::Npc].hand.len(), 3);
}

#[test]
fn test_session_previews_do_not_mutate() {
    let mut session = MatchSession::new(MatchEngine::standard(), GameRng::new(77));
    session.start_match(Opponent::Luma);
    let before = session.state().clone();
    let card = before.piles[Side::Player].hand[0];

    let first = session.placement_preview(card);
    let second = session.placement_preview(card);
    assert_eq!(first.len(), 13);
    assert_eq!(first, second);
    assert!(session.preview_placement(card, slot("B2")).is_some());
    assert_eq!(session.state(), &before);

    session.end_match();
    assert_eq!(session.state(), &HarmonyMatchState::idle());
}
