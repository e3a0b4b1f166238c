//! Card store service
//!
//! Owns the deck in insertion order and enforces that terms and definitions
//! are unique when cards are added interactively. Bulk loads bypass the
//! definition check and overwrite cards by term.

use std::path::Path;

use crate::error::{FlashcardError, FlashcardResult};
use crate::models::Card;
use crate::storage::{read_deck, write_deck_atomic};

/// The cards sharing the highest mistake count
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HardestCards {
    /// Terms in insertion order; empty when no card has any mistakes
    pub terms: Vec<String>,
    /// The shared mistake count
    pub mistakes: u32,
}

impl HardestCards {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// In-memory deck of cards, ordered by insertion
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by term
    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.term == term)
    }

    /// Get a card by its position in insertion order
    pub fn get_index(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Find the first card, in insertion order, whose definition is `definition`
    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.definition == definition)
    }

    /// Fail with `DuplicateTerm` if a card already uses this term
    pub fn check_term_available(&self, term: &str) -> FlashcardResult<()> {
        if self.position(term).is_some() {
            return Err(FlashcardError::DuplicateTerm(term.to_string()));
        }
        Ok(())
    }

    /// Fail with `DuplicateDefinition` if a card already uses this definition
    pub fn check_definition_available(&self, definition: &str) -> FlashcardResult<()> {
        if self.find_by_definition(definition).is_some() {
            return Err(FlashcardError::DuplicateDefinition(definition.to_string()));
        }
        Ok(())
    }

    /// Add a new card at the end of the deck
    ///
    /// The term check runs first, so a pair colliding on both reports
    /// `DuplicateTerm`. On error the store is unchanged.
    pub fn add(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> FlashcardResult<&Card> {
        let card = Card::new(term, definition);
        self.check_term_available(&card.term)?;
        self.check_definition_available(&card.definition)?;

        log::debug!("adding card {}", card);
        self.cards.push(card);
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Remove a card by term, keeping the order of the others
    pub fn remove(&mut self, term: &str) -> FlashcardResult<Card> {
        let index = self
            .position(term)
            .ok_or_else(|| FlashcardError::NotFound(term.to_string()))?;

        log::debug!("removing card {:?}", term);
        Ok(self.cards.remove(index))
    }

    /// Insert or overwrite cards by term, returning how many records were applied
    ///
    /// An overwritten card keeps its position. Uniqueness of definitions is
    /// not enforced here.
    pub fn load<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Card>,
    {
        let mut count = 0;
        for record in records {
            match self.position(&record.term) {
                Some(index) => self.cards[index] = record,
                None => self.cards.push(record),
            }
            count += 1;
        }
        count
    }

    /// Iterate over every card in insertion order
    ///
    /// The iterator is `Clone`, so it can be replayed from the start.
    pub fn dump(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Set every card's mistake count back to zero
    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.reset_mistakes();
        }
    }

    /// Find the card(s) with the most mistakes
    pub fn hardest(&self) -> HardestCards {
        let max = self.cards.iter().map(|c| c.mistakes).max().unwrap_or(0);
        if max == 0 {
            return HardestCards::default();
        }

        HardestCards {
            terms: self
                .cards
                .iter()
                .filter(|c| c.mistakes == max)
                .map(|c| c.term.clone())
                .collect(),
            mistakes: max,
        }
    }

    /// Record an incorrect answer against the card at `index`
    pub fn record_mistake(&mut self, index: usize) -> FlashcardResult<u32> {
        let card = self
            .cards
            .get_mut(index)
            .ok_or_else(|| FlashcardError::NotFound(format!("#{}", index)))?;
        card.record_mistake();
        Ok(card.mistakes)
    }

    /// Load every card from a deck file
    ///
    /// The file is parsed completely before any card is applied, so a
    /// malformed line leaves the store untouched.
    pub fn import_from<P: AsRef<Path>>(&mut self, path: P) -> FlashcardResult<usize> {
        let records = read_deck(path)?;
        Ok(self.load(records))
    }

    /// Write every card to a deck file, replacing it
    pub fn export_to<P: AsRef<Path>>(&self, path: P) -> FlashcardResult<usize> {
        write_deck_atomic(path, self.dump())
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.term == term)
    }
}
