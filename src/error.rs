//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when creating or looking up piles and cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Pile not found.
    #[error("pile not found")]
    PileNotFound,
    /// Card not found.
    #[error("card not found")]
    CardNotFound,
    /// A pile with this name already exists.
    #[error("a pile with this name already exists")]
    DuplicateName,
}

/// Errors that can occur when moving cards between piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Pile not found.
    #[error("pile not found")]
    PileNotFound,
    /// Card not found.
    #[error("card not found")]
    CardNotFound,
    /// Source and destination are the same pile.
    #[error("source and destination are the same pile")]
    SamePile,
    /// The card is not in any pile.
    #[error("card is not in a pile")]
    NotInPile,
    /// The card is not the top card of its pile.
    #[error("card is not the top card of its pile")]
    NotOnTop,
    /// The start index is past the end of the pile.
    #[error("start index is past the end of the pile")]
    IndexOutOfRange,
    /// There are no cards to move.
    #[error("no cards to move")]
    Empty,
}

/// Errors that can occur when undoing or redoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
    /// The undo log has nothing before the cursor.
    #[error("nothing to undo")]
    NothingToUndo,
    /// The undo log has nothing after the cursor.
    #[error("nothing to redo")]
    NothingToRedo,
    /// An operation group is still open.
    #[error("an operation group is still open")]
    GroupOpen,
}
