//! Ordered card piles.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::CardId;

/// Handle to a pile owned by a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PileId(pub(crate) usize);

impl PileId {
    /// Returns the arena slot of the pile.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A named, ordered collection of cards. Index 0 is the bottom of the pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    name: String,
    cards: Vec<CardId>,
}

impl Pile {
    pub(crate) const fn new(name: String) -> Self {
        Self {
            name,
            cards: Vec::new(),
        }
    }

    /// Returns the pile name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Returns the position of `card` in the pile, or `None` if absent.
    #[must_use]
    pub fn index_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Returns whether the pile holds `card`.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the card on top, if any.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn push(&mut self, card: CardId) -> usize {
        self.cards.push(card);
        self.cards.len() - 1
    }

    /// Removes `count` cards starting at `index`.
    pub(crate) fn take(&mut self, index: usize, count: usize) -> Vec<CardId> {
        self.cards.drain(index..index + count).collect()
    }

    /// Inserts `run` so that its first card lands at `index`.
    pub(crate) fn insert(&mut self, index: usize, run: Vec<CardId>) {
        self.cards.splice(index..index, run);
    }

    pub(crate) fn replace_all(&mut self, cards: Vec<CardId>) -> Vec<CardId> {
        core::mem::replace(&mut self.cards, cards)
    }
}
