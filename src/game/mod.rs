//! Game arena and state management.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, CardId};
use crate::error::PileError;
use crate::observer::{CardEvent, CardObserver};
use crate::options::GameOptions;
use crate::pile::{Pile, PileId};
use crate::undo::{UndoLog, UndoStep};

mod flip;
mod history;
mod placement;
mod setup;
mod transfer;

/// A card game session that owns piles, cards and the undo log.
///
/// Cards and piles live in arenas and are addressed through [`CardId`] and
/// [`PileId`] handles. A pile lists the cards it holds; each card records
/// the pile it is in and its index there. The game keeps both sides in step:
/// pile contents are always changed first, then the affected cards are
/// updated and their observers notified.
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Card arena, indexed by [`CardId`].
    cards: Vec<Card>,
    /// Pile arena, indexed by [`PileId`].
    piles: Vec<Pile>,
    /// Pile lookup by name.
    pile_names: HashMap<String, PileId>,
    /// Applied and undone steps.
    history: UndoLog,
    /// Step collecting operations inside [`Game::grouped`].
    open_group: Option<UndoStep>,
    /// Per-card observers, indexed by [`CardId`].
    observers: Vec<Vec<Box<dyn CardObserver>>>,
    /// Observers of every card.
    global_observers: Vec<Box<dyn CardObserver>>,
    /// Notifications waiting for delivery.
    pending: VecDeque<(CardId, CardEvent)>,
    /// Whether notifications are currently being delivered.
    dispatching: bool,
    /// Random number generator used for dealing.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates an empty game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardlib::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.card_count(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let history = UndoLog::new(options.undo_limit);

        Self {
            options,
            cards: Vec::new(),
            piles: Vec::new(),
            pile_names: HashMap::new(),
            history,
            open_group: None,
            observers: Vec::new(),
            global_observers: Vec::new(),
            pending: VecDeque::new(),
            dispatching: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the card with the given handle.
    #[must_use]
    pub fn card(&self, card: CardId) -> Option<&Card> {
        self.cards.get(card.0)
    }

    /// Returns the pile with the given handle.
    #[must_use]
    pub fn pile(&self, pile: PileId) -> Option<&Pile> {
        self.piles.get(pile.0)
    }

    /// Returns the handle of the pile named `name`.
    #[must_use]
    pub fn pile_id(&self, name: &str) -> Option<PileId> {
        self.pile_names.get(name).copied()
    }

    /// Iterates over all cards with their handles.
    pub fn cards(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards.iter().enumerate().map(|(i, card)| (CardId(i), card))
    }

    /// Iterates over all piles with their handles.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> {
        self.piles.iter().enumerate().map(|(i, pile)| (PileId(i), pile))
    }

    /// Returns the number of cards in the game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns the undo log.
    #[must_use]
    pub const fn undo_log(&self) -> &UndoLog {
        &self.history
    }

    /// Registers an observer for one card.
    ///
    /// # Errors
    ///
    /// Returns an error if the card does not exist.
    pub fn observe(
        &mut self,
        card: CardId,
        observer: Box<dyn CardObserver>,
    ) -> Result<(), PileError> {
        self.observers
            .get_mut(card.0)
            .ok_or(PileError::CardNotFound)?
            .push(observer);
        Ok(())
    }

    /// Registers an observer for every card, including cards added later.
    pub fn observe_all(&mut self, observer: Box<dyn CardObserver>) {
        self.global_observers.push(observer);
    }

    /// Queues a notification for delivery by [`Game::flush`].
    fn emit(&mut self, card: CardId, event: CardEvent) {
        self.pending.push_back((card, event));
    }

    /// Delivers queued notifications in order.
    ///
    /// Observers may mutate the game. Their notifications are queued behind
    /// the current ones and delivered by the same loop, so a nested call
    /// never dispatches on its own. If an observer panics, the remaining
    /// queue is dropped and later mutations deliver normally again.
    fn flush(&mut self) {
        if self.dispatching {
            return;
        }
        self.dispatching = true;

        let mut delivery = Delivery(self);
        while let Some((card, event)) = delivery.0.pending.pop_front() {
            delivery.0.dispatch(Some(card), card, event);
            delivery.0.dispatch(None, card, event);
        }
    }

    fn dispatch(&mut self, slot: Option<CardId>, card: CardId, event: CardEvent) {
        let observers = core::mem::take(self.observer_slot(slot));
        let mut taken = TakenObservers {
            game: self,
            slot,
            observers,
        };
        for observer in &mut taken.observers {
            observer.notify(taken.game, card, event);
        }
    }

    fn observer_slot(&mut self, slot: Option<CardId>) -> &mut Vec<Box<dyn CardObserver>> {
        match slot {
            Some(card) => &mut self.observers[card.0],
            None => &mut self.global_observers,
        }
    }
}

/// Ends a delivery loop, even when an observer unwinds.
struct Delivery<'a>(&'a mut Game);

impl Drop for Delivery<'_> {
    fn drop(&mut self) {
        self.0.pending.clear();
        self.0.dispatching = false;
    }
}

/// Observer list taken out of its slot for the duration of a dispatch.
struct TakenObservers<'a> {
    game: &'a mut Game,
    slot: Option<CardId>,
    observers: Vec<Box<dyn CardObserver>>,
}

impl Drop for TakenObservers<'_> {
    fn drop(&mut self) {
        // Keep observers registered while the list was taken.
        let observers = core::mem::take(&mut self.observers);
        let added = core::mem::replace(self.game.observer_slot(self.slot), observers);
        self.game.observer_slot(self.slot).extend(added);
    }
}
