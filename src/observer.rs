//! Card change notifications.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::card::CardId;
use crate::game::Game;
use crate::sync::Mutex;

/// Kind of change reported for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardEvent {
    /// The card moved to a different pile (or out of every pile).
    PileChanged,
    /// The card changed position within the same pile.
    PileIndexChanged,
    /// The card was turned over.
    FaceUpChanged,
}

/// Receives notifications after a card's state has changed.
///
/// Every method defaults to doing nothing. Observers get mutable access to
/// the game and may perform further mutations; the resulting notifications
/// are delivered after the current one returns.
pub trait CardObserver {
    /// Called after `card` moved to another pile.
    fn pile_changed(&mut self, _game: &mut Game, _card: CardId) {}

    /// Called after `card` moved within its pile.
    fn pile_index_changed(&mut self, _game: &mut Game, _card: CardId) {}

    /// Called after `card` was turned over.
    fn face_up_changed(&mut self, _game: &mut Game, _card: CardId) {}

    /// Dispatches `event` to the matching method.
    fn notify(&mut self, game: &mut Game, card: CardId, event: CardEvent) {
        match event {
            CardEvent::PileChanged => self.pile_changed(game, card),
            CardEvent::PileIndexChanged => self.pile_index_changed(game, card),
            CardEvent::FaceUpChanged => self.face_up_changed(game, card),
        }
    }
}

/// Observer that records every notification it receives.
///
/// Share it with [`Arc`] to keep a handle for reading the events back:
///
/// ```
/// use std::sync::Arc;
///
/// use cardlib::{CardEvent, EventLog, Game, GameOptions, Rank, Suit};
///
/// let mut game = Game::new(GameOptions::default(), 0);
/// let card = game.add_card(Suit::Hearts, Rank::Ten, None).unwrap();
/// let log = Arc::new(EventLog::new());
/// game.observe(card, Box::new(Arc::clone(&log))).unwrap();
///
/// game.flip(card, true);
/// assert_eq!(log.events(), vec![(card, CardEvent::FaceUpChanged)]);
/// ```
#[derive(Default)]
pub struct EventLog {
    events: Mutex<Vec<(CardId, CardEvent)>>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of the recorded events, oldest first.
    pub fn events(&self) -> Vec<(CardId, CardEvent)> {
        self.events.lock().clone()
    }

    /// Returns how many times `event` was recorded.
    pub fn count(&self, event: CardEvent) -> usize {
        self.events.lock().iter().filter(|(_, e)| *e == event).count()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Forgets every recorded event.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl CardObserver for Arc<EventLog> {
    fn notify(&mut self, _game: &mut Game, card: CardId, event: CardEvent) {
        self.events.lock().push((card, event));
    }
}
