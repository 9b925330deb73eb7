use crate::error::UndoError;
use crate::undo::{Operation, UndoStep};

use super::Game;

impl Game {
    /// Runs `f` and records every operation it performs as one undo step.
    ///
    /// Nested calls join the outermost group.
    ///
    /// # Example
    ///
    /// ```
    /// use cardlib::{Game, GameOptions, Rank, Suit};
    ///
    /// let mut game = Game::new(GameOptions::default(), 0);
    /// let a = game.add_card(Suit::Clubs, Rank::Two, None).unwrap();
    /// let b = game.add_card(Suit::Clubs, Rank::Three, None).unwrap();
    ///
    /// game.grouped(|g| {
    ///     g.flip(a, true).unwrap();
    ///     g.flip(b, true).unwrap();
    /// });
    /// assert_eq!(game.undo_log().len(), 1);
    ///
    /// game.undo().unwrap();
    /// assert!(!game.card(a).unwrap().is_face_up());
    /// assert!(!game.card(b).unwrap().is_face_up());
    /// ```
    pub fn grouped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let outermost = self.open_group.is_none();
        if outermost {
            self.open_group = Some(UndoStep::new());
        }

        let result = f(self);

        if outermost {
            if let Some(step) = self.open_group.take() {
                self.history.record(step);
            }
        }
        result
    }

    /// Reverts the most recent applied step.
    ///
    /// Operations are reverted in reverse order. Nothing new is recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if there is nothing to undo or a group is open.
    pub fn undo(&mut self) -> Result<(), UndoError> {
        if self.open_group.is_some() {
            return Err(UndoError::GroupOpen);
        }
        let step = self
            .history
            .undo()
            .cloned()
            .ok_or(UndoError::NothingToUndo)?;
        log::debug!("undo {} operation(s)", step.operations().len());

        for &operation in step.operations().iter().rev() {
            self.apply(operation.inverse());
        }
        self.flush();
        Ok(())
    }

    /// Re-applies the most recently undone step.
    ///
    /// # Errors
    ///
    /// Returns an error if there is nothing to redo or a group is open.
    pub fn redo(&mut self) -> Result<(), UndoError> {
        if self.open_group.is_some() {
            return Err(UndoError::GroupOpen);
        }
        let step = self
            .history
            .redo()
            .cloned()
            .ok_or(UndoError::NothingToRedo)?;
        log::debug!("redo {} operation(s)", step.operations().len());

        for &operation in step.operations() {
            self.apply(operation);
        }
        self.flush();
        Ok(())
    }

    /// Returns whether [`Game::undo`] would succeed.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.open_group.is_none() && self.history.can_undo()
    }

    /// Returns whether [`Game::redo`] would succeed.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.open_group.is_none() && self.history.can_redo()
    }

    pub(super) fn record(&mut self, operation: Operation) {
        match &mut self.open_group {
            Some(step) => step.push(operation),
            None => self.history.record(operation.into()),
        }
    }

    /// Executes the forward action of `operation` without recording it.
    pub(super) fn apply(&mut self, operation: Operation) {
        match operation {
            Operation::Flip { card, to, .. } => self.do_flip(card, to),
            Operation::Transfer {
                from,
                from_index,
                to,
                to_index,
                count,
            } => self.relocate(from, from_index, to, to_index, count),
        }
    }
}
