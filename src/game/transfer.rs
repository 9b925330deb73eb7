use crate::card::CardId;
use crate::error::MoveError;
use crate::pile::{Pile, PileId};
use crate::undo::Operation;

use super::Game;

impl Game {
    /// Moves `from[from_index..]` onto the top of `to` as an undoable
    /// operation.
    ///
    /// The moved cards keep their order. Each moved card fires
    /// [`CardEvent::PileChanged`](crate::CardEvent::PileChanged).
    ///
    /// # Errors
    ///
    /// Returns an error if either pile does not exist, both are the same
    /// pile, `from_index` is past the end of the source, or there is nothing
    /// to move.
    pub fn move_cards(
        &mut self,
        from: PileId,
        from_index: usize,
        to: PileId,
    ) -> Result<(), MoveError> {
        let source_len = self.pile(from).ok_or(MoveError::PileNotFound)?.len();
        let to_index = self.pile(to).ok_or(MoveError::PileNotFound)?.len();

        if from == to {
            return Err(MoveError::SamePile);
        }
        if from_index > source_len {
            return Err(MoveError::IndexOutOfRange);
        }
        if from_index == source_len {
            return Err(MoveError::Empty);
        }

        let operation = Operation::Transfer {
            from,
            from_index,
            to,
            to_index,
            count: source_len - from_index,
        };
        log::debug!(
            "move {} card(s) from {from:?}[{from_index}] to {to:?}[{to_index}]",
            source_len - from_index
        );

        self.record(operation);
        self.apply(operation);
        self.flush();
        Ok(())
    }

    /// Moves the top card of its pile onto `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card does not exist, is not in a pile, is not
    /// the top card, or the move itself fails (see [`Game::move_cards`]).
    pub fn move_card(&mut self, card: CardId, to: PileId) -> Result<(), MoveError> {
        let state = self.card(card).ok_or(MoveError::CardNotFound)?;
        let from = state.pile().ok_or(MoveError::NotInPile)?;
        let index = state.pile_index();

        if self.pile(from).and_then(Pile::top) != Some(card) {
            return Err(MoveError::NotOnTop);
        }

        self.move_cards(from, index, to)
    }

    /// Moves `count` cards from `from[from_index..]` to `to[to_index..]`.
    ///
    /// Both pile sequences are rewritten before any card is touched, then
    /// moved cards are re-homed and the cards behind the gap and the insert
    /// point are re-indexed. Notifications are only queued here.
    pub(super) fn relocate(
        &mut self,
        from: PileId,
        from_index: usize,
        to: PileId,
        to_index: usize,
        count: usize,
    ) {
        let run = self.piles[from.0].take(from_index, count);
        self.piles[to.0].insert(to_index, run.clone());

        for (offset, card) in run.into_iter().enumerate() {
            self.place(card, Some(to), to_index + offset);
        }
        self.reindex(from, from_index);
        self.reindex(to, to_index + count);
    }

    /// Brings the recorded index of every card in `pile` from `start` on in
    /// line with the pile.
    fn reindex(&mut self, pile: PileId, start: usize) {
        for index in start..self.piles[pile.0].len() {
            let card = self.piles[pile.0].cards()[index];
            self.shift(card, index);
        }
    }
}
