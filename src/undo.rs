//! Undoable operations and the undo log.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::CardId;
use crate::pile::PileId;

/// A reversible state change.
///
/// Operations capture everything needed to apply them in both directions at
/// construction time and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Turn a card over.
    Flip {
        /// The card being turned.
        card: CardId,
        /// Orientation before the flip.
        from: bool,
        /// Orientation after the flip.
        to: bool,
    },
    /// Move a contiguous run of cards from one pile to another.
    Transfer {
        /// Source pile.
        from: PileId,
        /// Index of the first moved card in the source pile.
        from_index: usize,
        /// Destination pile.
        to: PileId,
        /// Index of the first moved card in the destination pile.
        to_index: usize,
        /// Number of cards in the run.
        count: usize,
    },
}

impl Operation {
    /// Returns the operation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Flip { card, from, to } => Self::Flip {
                card,
                from: to,
                to: from,
            },
            Self::Transfer {
                from,
                from_index,
                to,
                to_index,
                count,
            } => Self::Transfer {
                from: to,
                from_index: to_index,
                to: from,
                to_index: from_index,
                count,
            },
        }
    }
}

/// Operations that are undone and redone together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UndoStep {
    operations: Vec<Operation>,
}

impl UndoStep {
    pub(crate) const fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Returns the operations in the order they were applied.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns whether the step holds no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl From<Operation> for UndoStep {
    fn from(operation: Operation) -> Self {
        Self {
            operations: alloc::vec![operation],
        }
    }
}

/// Ordered history of undo steps with a cursor.
///
/// Steps before the cursor have been applied and can be undone; steps at or
/// after it have been undone and can be redone. Recording a new step
/// discards the redo tail.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    steps: VecDeque<UndoStep>,
    cursor: usize,
    limit: usize,
}

impl UndoLog {
    /// Creates an empty log keeping at most `limit` steps (0 = unlimited).
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            steps: VecDeque::new(),
            cursor: 0,
            limit,
        }
    }

    /// Appends a step, dropping the redo tail and the oldest step when over
    /// the limit. Empty steps are ignored.
    pub fn record(&mut self, step: UndoStep) {
        if step.is_empty() {
            return;
        }
        self.steps.truncate(self.cursor);
        self.steps.push_back(step);
        if self.limit > 0 && self.steps.len() > self.limit {
            self.steps.pop_front();
        }
        self.cursor = self.steps.len();
    }

    /// Moves the cursor back and returns the step to revert.
    pub fn undo(&mut self) -> Option<&UndoStep> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.steps.get(self.cursor)
    }

    /// Moves the cursor forward and returns the step to re-apply.
    pub fn redo(&mut self) -> Option<&UndoStep> {
        let step = self.steps.get(self.cursor)?;
        self.cursor += 1;
        Some(step)
    }

    /// Returns whether a step can be undone.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns whether a step can be redone.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.steps.len()
    }

    /// Returns the number of recorded steps, including undone ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the cursor position (number of applied steps).
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the recorded steps, oldest first.
    pub fn steps(&self) -> impl Iterator<Item = &UndoStep> {
        self.steps.iter()
    }

    /// Removes every step.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.cursor = 0;
    }
}
