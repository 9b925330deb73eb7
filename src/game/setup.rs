use alloc::string::String;
use alloc::vec::Vec;

use rand::seq::SliceRandom;

use crate::card::{Card, CardId, Rank, Suit};
use crate::error::PileError;
use crate::pile::{Pile, PileId};
use crate::undo::UndoStep;

use super::Game;

impl Game {
    /// Adds an empty pile.
    ///
    /// # Errors
    ///
    /// Returns an error if a pile with the same name exists.
    pub fn add_pile(&mut self, name: impl Into<String>) -> Result<PileId, PileError> {
        let name = name.into();
        if self.pile_names.contains_key(&name) {
            return Err(PileError::DuplicateName);
        }

        let id = PileId(self.piles.len());
        self.pile_names.insert(name.clone(), id);
        self.piles.push(Pile::new(name));
        Ok(id)
    }

    /// Creates a face-down card on top of `pile`, or outside every pile.
    ///
    /// No notification fires for a new card. Adding to a pile changes its
    /// order outside the undo log, so the log is cleared in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not exist.
    pub fn add_card(
        &mut self,
        suit: Suit,
        rank: Rank,
        pile: Option<PileId>,
    ) -> Result<CardId, PileError> {
        let id = CardId(self.cards.len());
        let index = match pile {
            Some(pile) => self
                .piles
                .get_mut(pile.0)
                .ok_or(PileError::PileNotFound)?
                .push(id),
            None => 0,
        };

        self.cards.push(Card::placed(suit, rank, pile, index));
        self.observers.push(Vec::new());

        if pile.is_some() {
            self.clear_history();
        }
        Ok(id)
    }

    /// Starts a new deal.
    ///
    /// A game without cards first gets `options.decks` standard decks. Every
    /// card is then gathered, shuffled and stacked face-down in `stock`, and
    /// the undo log is cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not exist.
    pub fn deal(&mut self, stock: PileId) -> Result<(), PileError> {
        if self.pile(stock).is_none() {
            return Err(PileError::PileNotFound);
        }

        if self.cards.is_empty() {
            for _ in 0..self.options.decks {
                for suit in Suit::ALL {
                    for rank in Rank::ALL {
                        self.add_card(suit, rank, None)?;
                    }
                }
            }
        }

        let mut order: Vec<CardId> = (0..self.cards.len()).map(CardId).collect();
        order.shuffle(&mut self.rng);

        for pile in &mut self.piles {
            pile.replace_all(Vec::new());
        }
        self.piles[stock.0].replace_all(order.clone());

        for (index, card) in order.into_iter().enumerate() {
            self.place(card, Some(stock), index);
            if self.cards[card.0].is_face_up() {
                self.do_flip(card, false);
            }
        }

        self.clear_history();
        log::debug!("dealt {} card(s) into {stock:?}", self.cards.len());

        self.flush();
        Ok(())
    }

    fn clear_history(&mut self) {
        self.history.clear();
        if let Some(group) = &mut self.open_group {
            *group = UndoStep::new();
        }
    }
}
