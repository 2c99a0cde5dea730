//! The player's decks.
//!
//! Two built-in decks always exist and cannot be edited. Custom decks are
//! validated on every create and update, so a stored custom deck is
//! always legal for the validator that accepted it. Every mutating call
//! either applies fully or returns a `DeckRejection` and leaves the
//! collection untouched.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cards::{build_balanced_deck, build_starter_deck, CardCatalog, CardId};
use crate::error::{DeckError, DeckRejection};

use super::validation::DeckValidator;

const STARTER_ID: &str = "starter";
const BALANCED_ID: &str = "balanced";

/// Stable identifier of a deck.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(String);

impl DeckId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn starter() -> Self {
        Self::new(STARTER_ID)
    }

    #[must_use]
    pub fn balanced() -> Self {
        Self::new(BALANCED_ID)
    }

    /// Fresh id for a custom deck.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("custom-{}", Uuid::new_v4()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_built_in(&self) -> bool {
        self.0 == STARTER_ID || self.0 == BALANCED_ID
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user-built deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDeck {
    pub id: DeckId,
    pub name: String,
    pub cards: Vec<CardId>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

/// A deck resolved to its cards, built in or custom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckView {
    pub id: DeckId,
    pub name: String,
    pub cards: Vec<CardId>,
    pub built_in: bool,
}

/// Custom decks plus the active selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCollection {
    decks: Vec<CustomDeck>,
    active_deck_id: DeckId,
}

impl Default for DeckCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckCollection {
    /// No custom decks, starter active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decks: Vec::new(),
            active_deck_id: DeckId::starter(),
        }
    }

    /// Custom decks in creation order.
    #[must_use]
    pub fn custom_decks(&self) -> &[CustomDeck] {
        &self.decks
    }

    #[must_use]
    pub fn custom_deck(&self, id: &DeckId) -> Option<&CustomDeck> {
        self.decks.iter().find(|deck| &deck.id == id)
    }

    #[must_use]
    pub fn active_deck_id(&self) -> &DeckId {
        &self.active_deck_id
    }

    /// Whether `id` names a built-in or an existing custom deck.
    #[must_use]
    pub fn contains(&self, id: &DeckId) -> bool {
        id.is_built_in() || self.custom_deck(id).is_some()
    }

    /// Resolve any deck by id.
    #[must_use]
    pub fn deck(&self, id: &DeckId, catalog: &CardCatalog) -> Option<DeckView> {
        match id.as_str() {
            STARTER_ID => Some(starter_view(catalog)),
            BALANCED_ID => Some(DeckView {
                id: id.clone(),
                name: "Balanced".to_string(),
                cards: build_balanced_deck(catalog),
                built_in: true,
            }),
            _ => self.custom_deck(id).map(|deck| DeckView {
                id: deck.id.clone(),
                name: deck.name.clone(),
                cards: deck.cards.clone(),
                built_in: false,
            }),
        }
    }

    /// The active deck. A dangling active id resolves to the starter.
    #[must_use]
    pub fn get_active_deck(&self, catalog: &CardCatalog) -> DeckView {
        self.deck(&self.active_deck_id, catalog)
            .unwrap_or_else(|| starter_view(catalog))
    }

    #[must_use]
    pub fn active_deck_cards(&self, catalog: &CardCatalog) -> Vec<CardId> {
        self.get_active_deck(catalog).cards
    }

    pub fn set_active_deck(&mut self, id: &DeckId) -> Result<(), DeckRejection> {
        if !self.contains(id) {
            return Err(DeckRejection::single(DeckError::NotFound(id.clone())));
        }
        self.active_deck_id = id.clone();
        debug!(deck = %id, "active deck changed");
        Ok(())
    }

    /// Add a custom deck and return its id.
    pub fn create_deck(
        &mut self,
        validator: &DeckValidator<'_>,
        name: &str,
        cards: Vec<CardId>,
    ) -> Result<DeckId, DeckRejection> {
        let mut errors = Vec::new();
        if self.decks.len() >= validator.max_custom_decks() {
            errors.push(DeckError::CollectionFull(validator.max_custom_decks()));
        }
        check_name(name, &mut errors);
        check_cards(validator, &cards, &mut errors);
        if !errors.is_empty() {
            return Err(DeckRejection(errors));
        }

        let now = Utc::now();
        let id = DeckId::generate();
        self.decks.push(CustomDeck {
            id: id.clone(),
            name: name.trim().to_string(),
            cards,
            created: now,
            last_modified: now,
        });
        debug!(deck = %id, "custom deck created");
        Ok(id)
    }

    /// Replace a custom deck's name and cards.
    pub fn update_deck(
        &mut self,
        validator: &DeckValidator<'_>,
        id: &DeckId,
        name: &str,
        cards: Vec<CardId>,
    ) -> Result<(), DeckRejection> {
        let index = self.custom_index(id)?;

        let mut errors = Vec::new();
        check_name(name, &mut errors);
        check_cards(validator, &cards, &mut errors);
        if !errors.is_empty() {
            return Err(DeckRejection(errors));
        }

        let deck = &mut self.decks[index];
        deck.name = name.trim().to_string();
        deck.cards = cards;
        deck.last_modified = Utc::now();
        debug!(deck = %id, "custom deck updated");
        Ok(())
    }

    /// Remove a custom deck. Deleting the active deck activates the starter.
    pub fn delete_deck(&mut self, id: &DeckId) -> Result<(), DeckRejection> {
        let index = self.custom_index(id)?;
        self.decks.remove(index);
        if &self.active_deck_id == id {
            self.active_deck_id = DeckId::starter();
        }
        debug!(deck = %id, "custom deck deleted");
        Ok(())
    }

    /// Drop custom decks `validator` would refuse to store.
    ///
    /// A deck is dropped when its id is built in or repeats an earlier
    /// deck, its name is blank, its cards fail validation, or it lies past
    /// the custom deck limit. An active id left dangling falls back to
    /// the starter. Returns the dropped ids in their stored order.
    pub fn repair(&mut self, validator: &DeckValidator<'_>) -> Vec<DeckId> {
        let mut kept: Vec<CustomDeck> = Vec::with_capacity(self.decks.len());
        let mut dropped = Vec::new();

        for deck in std::mem::take(&mut self.decks) {
            let legal = !deck.id.is_built_in()
                && !kept.iter().any(|k| k.id == deck.id)
                && !deck.name.trim().is_empty()
                && kept.len() < validator.max_custom_decks()
                && validator.is_valid_deck(&deck.cards).is_ok();
            if legal {
                kept.push(deck);
            } else {
                warn!(deck = %deck.id, "dropping invalid custom deck");
                dropped.push(deck.id);
            }
        }
        self.decks = kept;

        if !self.contains(&self.active_deck_id) {
            warn!(deck = %self.active_deck_id, "active deck missing, using starter");
            self.active_deck_id = DeckId::starter();
        }
        dropped
    }

    fn custom_index(&self, id: &DeckId) -> Result<usize, DeckRejection> {
        if id.is_built_in() {
            return Err(DeckRejection::single(DeckError::BuiltIn(id.clone())));
        }
        self.decks
            .iter()
            .position(|deck| &deck.id == id)
            .ok_or_else(|| DeckRejection::single(DeckError::NotFound(id.clone())))
    }
}

fn starter_view(catalog: &CardCatalog) -> DeckView {
    DeckView {
        id: DeckId::starter(),
        name: "Starter".to_string(),
        cards: build_starter_deck(catalog),
        built_in: true,
    }
}

fn check_name(name: &str, errors: &mut Vec<DeckError>) {
    if name.trim().is_empty() {
        errors.push(DeckError::EmptyName);
    }
}

fn check_cards(validator: &DeckValidator<'_>, cards: &[CardId], errors: &mut Vec<DeckError>) {
    if let Err(rejection) = validator.is_valid_deck(cards) {
        errors.extend(rejection.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legal_deck() -> Vec<CardId> {
        build_balanced_deck(CardCatalog::standard())
    }

    #[test]
    fn test_new_collection() {
        let decks = DeckCollection::new();
        assert!(decks.custom_decks().is_empty());
        assert_eq!(decks.active_deck_id(), &DeckId::starter());

        let active = decks.get_active_deck(CardCatalog::standard());
        assert!(active.built_in);
        assert_eq!(active.cards.len(), 15);
    }

    #[test]
    fn test_create_and_activate() {
        let validator = DeckValidator::standard();
        let mut decks = DeckCollection::new();

        let id = decks.create_deck(&validator, "  Mine ", legal_deck()).unwrap();
        assert!(!id.is_built_in());
        assert_eq!(decks.custom_deck(&id).unwrap().name, "Mine");

        decks.set_active_deck(&id).unwrap();
        assert_eq!(decks.active_deck_cards(CardCatalog::standard()), legal_deck());
    }

    #[test]
    fn test_collection_limit() {
        let validator = DeckValidator::standard();
        let mut decks = DeckCollection::new();
        decks.create_deck(&validator, "One", legal_deck()).unwrap();
        decks.create_deck(&validator, "Two", legal_deck()).unwrap();

        let err = decks.create_deck(&validator, "Three", legal_deck()).unwrap_err();
        assert_eq!(err.errors(), &[DeckError::CollectionFull(2)]);
        assert_eq!(decks.custom_decks().len(), 2);
    }

    #[test]
    fn test_invalid_create_leaves_collection() {
        let validator = DeckValidator::standard();
        let mut decks = DeckCollection::new();
        let before = decks.clone();

        let err = decks.create_deck(&validator, "", vec![CardId::new(1)]).unwrap_err();
        assert!(err.errors().contains(&DeckError::EmptyName));
        assert!(err
            .errors()
            .contains(&DeckError::WrongSize { expected: 15, found: 1 }));
        assert_eq!(decks, before);
    }

    #[test]
    fn test_built_in_decks_are_read_only() {
        let validator = DeckValidator::standard();
        let mut decks = DeckCollection::new();

        let err = decks
            .update_deck(&validator, &DeckId::starter(), "Mine", legal_deck())
            .unwrap_err();
        assert_eq!(err.errors(), &[DeckError::BuiltIn(DeckId::starter())]);

        let err = decks.delete_deck(&DeckId::balanced()).unwrap_err();
        assert_eq!(err.errors(), &[DeckError::BuiltIn(DeckId::balanced())]);
    }

    #[test]
    fn test_delete_active_falls_back_to_starter() {
        let validator = DeckValidator::standard();
        let mut decks = DeckCollection::new();
        let id = decks.create_deck(&validator, "Mine", legal_deck()).unwrap();
        decks.set_active_deck(&id).unwrap();

        decks.delete_deck(&id).unwrap();
        assert_eq!(decks.active_deck_id(), &DeckId::starter());
        assert!(decks.delete_deck(&id).is_err());
    }

    fn stored(id: &str, cards: Vec<CardId>) -> CustomDeck {
        let now = Utc::now();
        CustomDeck {
            id: DeckId::new(id),
            name: id.to_string(),
            cards,
            created: now,
            last_modified: now,
        }
    }

    #[test]
    fn test_repair_keeps_legal_collection() {
        let validator = DeckValidator::standard();
        let mut decks = DeckCollection::new();
        let id = decks.create_deck(&validator, "Mine", legal_deck()).unwrap();
        decks.set_active_deck(&id).unwrap();
        let before = decks.clone();

        assert!(decks.repair(&validator).is_empty());
        assert_eq!(decks, before);
    }

    #[test]
    fn test_repair_drops_reserved_and_duplicate_ids() {
        let mut decks = DeckCollection {
            decks: vec![
                stored("starter", legal_deck()),
                stored("custom-a", legal_deck()),
                stored("custom-a", legal_deck()),
            ],
            active_deck_id: DeckId::new("custom-a"),
        };

        let dropped = decks.repair(&DeckValidator::standard());
        assert_eq!(dropped, vec![DeckId::starter(), DeckId::new("custom-a")]);
        assert_eq!(decks.custom_decks().len(), 1);
        assert_eq!(decks.active_deck_id(), &DeckId::new("custom-a"));
    }

    #[test]
    fn test_repair_enforces_limit_and_card_rules() {
        let mut decks = DeckCollection {
            decks: vec![
                stored("custom-bad", vec![CardId::new(999)]),
                stored("custom-a", legal_deck()),
                stored("custom-b", legal_deck()),
                stored("custom-c", legal_deck()),
            ],
            active_deck_id: DeckId::new("custom-bad"),
        };

        let dropped = decks.repair(&DeckValidator::standard());
        assert_eq!(dropped, vec![DeckId::new("custom-bad"), DeckId::new("custom-c")]);
        let kept: Vec<&str> = decks.custom_decks().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(kept, vec!["custom-a", "custom-b"]);
        assert_eq!(decks.active_deck_id(), &DeckId::starter());
    }

    #[test]
    fn test_repair_drops_blank_names() {
        let mut blank = stored("custom-a", legal_deck());
        blank.name = "  ".to_string();
        let mut decks = DeckCollection {
            decks: vec![blank],
            active_deck_id: DeckId::balanced(),
        };

        assert_eq!(decks.repair(&DeckValidator::standard()), vec![DeckId::new("custom-a")]);
        assert_eq!(decks.active_deck_id(), &DeckId::balanced());
    }

    #[test]
    fn test_set_active_unknown() {
        let mut decks = DeckCollection::new();
        let missing = DeckId::new("custom-missing");
        let err = decks.set_active_deck(&missing).unwrap_err();
        assert_eq!(err.errors(), &[DeckError::NotFound(missing)]);
        assert_eq!(decks.active_deck_id(), &DeckId::starter());
    }
}
