//! The shipped card table and deck-construction helpers.
//!
//! Both deck builders are pure functions of a catalog. They always
//! return exactly `DECK_SIZE` ids and never more than `MAX_COPIES` of one
//! card, so the result passes deck validation.

use super::definition::{Card, CardId, CardType, Rarity};
use super::registry::CardCatalog;
use crate::core::config::DECK_SIZE;
use crate::effects::{Condition, Effect};

/// Definitions registered in `CardCatalog::standard()`.
pub(crate) fn standard_cards() -> Vec<Card> {
    use CardType::{Anchor, Calm, Energy, Nourish, Rest};

    vec![
        // Energy pushes harmony up.
        Card::new(CardId::new(1), "Morning Jolt", Energy, 3.0)
            .with_flavor("Up before the alarm, ready to go."),
        Card::new(CardId::new(2), "Sunrise Sprint", Energy, 4.0)
            .with_flavor("The first light always wins the race.")
            .with_effect(Effect::AdjacentModify { delta: 1.0 }),
        Card::new(CardId::new(3), "Spark Surge", Energy, 2.0)
            .with_rarity(Rarity::Uncommon)
            .with_flavor("Everything hums a little louder.")
            .with_effect(Effect::GlobalScale { factor: 1.1 }),
        Card::new(CardId::new(4), "Rally Cry", Energy, 2.0)
            .with_rarity(Rarity::Rare)
            .with_flavor("One voice, then all of them.")
            .with_effect(Effect::TypeModify { target_type: Energy, delta: 1.0 }),
        // Calm pulls harmony down.
        Card::new(CardId::new(5), "Deep Breath", Calm, -3.0)
            .with_flavor("In for four, out for six."),
        Card::new(CardId::new(6), "Still Water", Calm, -2.0)
            .with_flavor("Ripples fade if you let them.")
            .with_effect(Effect::AdjacentScale { factor: 0.5 }),
        Card::new(CardId::new(7), "Quiet Mind", Calm, -4.0)
            .with_rarity(Rarity::Uncommon)
            .with_flavor("Even the loud thoughts whisper here.")
            .with_effect(Effect::RadiusModify { radius: 2, delta: -0.5 }),
        Card::new(CardId::new(8), "Lantern Walk", Calm, -2.0)
            .with_rarity(Rarity::Rare)
            .with_flavor("Soft light, two steps either way.")
            .with_effect(Effect::pattern(&[(0, -2), (0, 2)], -1.0)),
        // Rest pulls harmony down, slowly.
        Card::new(CardId::new(9), "Power Nap", Rest, -2.0)
            .with_flavor("Twenty minutes, not a second more.")
            .with_effect(Effect::ConditionalModify {
                condition: Condition::AdjacentCount,
                delta: -0.5,
            }),
        Card::new(CardId::new(10), "Long Sleep", Rest, -4.0)
            .with_rarity(Rarity::Uncommon)
            .with_flavor("The kind you wake from new."),
        Card::new(CardId::new(11), "Dream Drift", Rest, -1.0)
            .with_rarity(Rarity::Rare)
            .with_flavor("The tide goes out while you sleep.")
            .with_effect(Effect::HarmonyShift { harmony_delta: -2.0 }),
        // Nourish pushes harmony up.
        Card::new(CardId::new(12), "Warm Broth", Nourish, 2.0)
            .with_flavor("Steam on a cold window."),
        Card::new(CardId::new(13), "Green Bowl", Nourish, 1.0)
            .with_flavor("Better shared.")
            .with_effect(Effect::ConditionalModify {
                condition: Condition::AdjacentCount,
                delta: 0.5,
            }),
        Card::new(CardId::new(14), "Shared Table", Nourish, 3.0)
            .with_rarity(Rarity::Uncommon)
            .with_flavor("Pull up a chair.")
            .with_effect(Effect::TypeModify { target_type: Nourish, delta: 1.0 }),
        Card::new(CardId::new(15), "Harvest Ring", Nourish, 2.0)
            .with_rarity(Rarity::Rare)
            .with_flavor("Plenty, all the way around.")
            .with_effect(Effect::pattern(&[(-1, 0), (-1, 1), (1, 0), (1, 1)], 0.5)),
        // Anchors steady whatever surrounds them.
        Card::new(CardId::new(16), "Grounding Stone", Anchor, 1.0)
            .with_flavor("Heavy in the palm, light in the chest.")
            .with_effect(Effect::GlobalScale { factor: 0.9 }),
        Card::new(CardId::new(17), "Steady Pulse", Anchor, -1.0)
            .with_flavor("Sixty beats, every minute.")
            .with_effect(Effect::AdjacentModify { delta: -1.0 }),
        Card::new(CardId::new(18), "Balance Point", Anchor, 0.5)
            .with_rarity(Rarity::Uncommon)
            .with_flavor("Right where the scale settles.")
            .with_effect(Effect::HarmonyShift { harmony_delta: 1.5 }),
        Card::new(CardId::new(19), "Keel", Anchor, -0.5)
            .with_rarity(Rarity::Rare)
            .with_flavor("Below the waterline, holding course.")
            .with_effect(Effect::RadiusModify { radius: 1, delta: 0.5 }),
    ]
}

const STARTER_LIST: [u16; DECK_SIZE] = [1, 1, 2, 3, 5, 5, 6, 9, 9, 10, 12, 12, 13, 16, 17];

/// The deck every new player owns and every NPC plays.
///
/// Ids missing from `catalog` are skipped, so a trimmed catalog yields a
/// short (and therefore invalid) deck rather than a panic.
#[must_use]
pub fn build_starter_deck(catalog: &CardCatalog) -> Vec<CardId> {
    STARTER_LIST
        .iter()
        .map(|raw| CardId::new(*raw))
        .filter(|id| catalog.contains(*id))
        .collect()
}

/// Three of each type: the first three cards of every type in id order.
///
/// Falls back to repeating a type's cards (up to three copies each) when
/// a type has fewer than three definitions.
#[must_use]
pub fn build_balanced_deck(catalog: &CardCatalog) -> Vec<CardId> {
    let per_type = DECK_SIZE / CardType::ALL.len();
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for card_type in CardType::ALL {
        let ids: Vec<CardId> = catalog.by_type(card_type).map(|c| c.id).collect();
        if ids.is_empty() {
            continue;
        }
        deck.extend(ids.iter().cycle().take(per_type.min(ids.len() * 3)).copied());
    }

    deck
}
