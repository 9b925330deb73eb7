//! Game configuration options.

/// Configuration options for a card game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardlib::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_undo_limit(100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of 52-card decks created by the first deal.
    pub decks: u8,
    /// Maximum number of undo steps kept. 0 keeps every step.
    pub undo_limit: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            undo_limit: 0,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardlib::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the maximum number of undo steps kept.
    ///
    /// # Example
    ///
    /// ```
    /// use cardlib::GameOptions;
    ///
    /// let options = GameOptions::default().with_undo_limit(50);
    /// assert_eq!(options.undo_limit, 50);
    /// ```
    #[must_use]
    pub const fn with_undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = limit;
        self
    }
}
