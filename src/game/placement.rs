use crate::card::CardId;
use crate::error::PileError;
use crate::observer::CardEvent;
use crate::pile::PileId;

use super::Game;

impl Game {
    /// Reports that `card` now sits at `index` in `pile`.
    ///
    /// If the card already belongs to `pile` this only reports an index
    /// change (see [`Game::notify_pile_index_changed`]). Otherwise the card's
    /// pile and index are updated and a [`CardEvent::PileChanged`]
    /// notification fires. At most one notification fires per call.
    ///
    /// The pile must already hold the card at `index`; a pile-less card must
    /// use index 0. A mismatch is a logic error and panics in debug builds.
    ///
    /// # Errors
    ///
    /// Returns an error if the card or the pile does not exist.
    pub fn notify_pile_changed(
        &mut self,
        card: CardId,
        pile: Option<PileId>,
        index: usize,
    ) -> Result<(), PileError> {
        self.ensure_card(card)?;
        if let Some(pile) = pile {
            self.pile(pile).ok_or(PileError::PileNotFound)?;
        }

        self.place(card, pile, index);
        self.flush();
        Ok(())
    }

    /// Reports that `card` moved to `index` within its current pile.
    ///
    /// Does nothing if the index is unchanged. Otherwise the index is
    /// updated and a [`CardEvent::PileIndexChanged`] notification fires.
    ///
    /// # Errors
    ///
    /// Returns an error if the card does not exist.
    pub fn notify_pile_index_changed(
        &mut self,
        card: CardId,
        index: usize,
    ) -> Result<(), PileError> {
        self.ensure_card(card)?;
        self.shift(card, index);
        self.flush();
        Ok(())
    }

    /// Returns whether the card's recorded placement matches its pile.
    #[must_use]
    pub fn placement_holds(&self, card: CardId) -> bool {
        let Some(state) = self.card(card) else {
            return false;
        };

        match state.pile() {
            Some(pile) => {
                self.pile(pile).and_then(|p| p.index_of(card)) == Some(state.pile_index())
            }
            None => state.pile_index() == 0,
        }
    }

    pub(super) fn ensure_card(&self, card: CardId) -> Result<(), PileError> {
        self.card(card).map(|_| ()).ok_or(PileError::CardNotFound)
    }

    /// Updates the placement of `card` and queues the notification.
    pub(super) fn place(&mut self, card: CardId, pile: Option<PileId>, index: usize) {
        if self.cards[card.0].pile() == pile {
            self.shift(card, index);
            return;
        }

        let previous = self.cards[card.0].pile();
        self.cards[card.0].set_placement(pile, index);
        debug_assert!(
            self.placement_holds(card),
            "{card:?} recorded at {pile:?}[{index}] but the pile disagrees"
        );
        debug_assert!(
            previous
                .and_then(|p| self.pile(p))
                .is_none_or(|p| !p.contains(card)),
            "{card:?} left {previous:?} but the previous pile still lists it"
        );

        log::trace!("{card:?} pile changed to {pile:?}[{index}]");
        self.emit(card, CardEvent::PileChanged);
    }

    /// Updates the index of `card` within its pile and queues the notification.
    pub(super) fn shift(&mut self, card: CardId, index: usize) {
        if self.cards[card.0].pile_index() == index {
            return;
        }

        self.cards[card.0].set_pile_index(index);
        debug_assert!(
            self.placement_holds(card),
            "{card:?} recorded at index {index} but its pile disagrees"
        );

        log::trace!("{card:?} pile index changed to {index}");
        self.emit(card, CardEvent::PileIndexChanged);
    }
}
