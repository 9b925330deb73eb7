use crate::card::CardId;
use crate::error::PileError;
use crate::observer::CardEvent;
use crate::undo::Operation;

use super::Game;

impl Game {
    /// Turns `card` face-up or face-down as an undoable operation.
    ///
    /// Does nothing if the card already has the requested orientation: no
    /// operation is recorded and no notification fires. Otherwise a flip
    /// operation is recorded in the undo log and applied, firing
    /// [`CardEvent::FaceUpChanged`].
    ///
    /// # Errors
    ///
    /// Returns an error if the card does not exist.
    pub fn flip(&mut self, card: CardId, face_up: bool) -> Result<(), PileError> {
        let current = self
            .card(card)
            .ok_or(PileError::CardNotFound)?
            .is_face_up();
        if current == face_up {
            return Ok(());
        }

        let operation = Operation::Flip {
            card,
            from: current,
            to: face_up,
        };
        log::debug!("flip {card:?} face_up={face_up}");

        self.record(operation);
        self.apply(operation);
        self.flush();
        Ok(())
    }

    /// Sets the orientation without touching the undo log.
    ///
    /// Only operation replay and dealing call this; anything else would leave
    /// the log out of step with the cards.
    pub(super) fn do_flip(&mut self, card: CardId, face_up: bool) {
        self.cards[card.0].set_face_up(face_up);
        self.emit(card, CardEvent::FaceUpChanged);
    }
}
