//! Playing-card data model with optional `no_std` support.
//!
//! The crate provides a [`Game`] arena that owns [`Card`]s and [`Pile`]s,
//! keeps every card's placement consistent with the pile that holds it, and
//! records state changes (flips and pile transfers) in an [`UndoLog`] so they
//! can be undone and redone. Observers implementing [`CardObserver`] are told
//! about every change.
//!
//! # Example
//!
//! ```
//! use cardlib::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let stock = game.add_pile("stock").unwrap();
//! game.deal(stock).unwrap();
//!
//! let top = game.pile(stock).unwrap().top().unwrap();
//! game.flip(top, true).unwrap();
//! assert!(game.card(top).unwrap().is_face_up());
//!
//! game.undo().unwrap();
//! assert!(!game.card(top).unwrap().is_face_up());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod observer;
pub mod options;
pub mod pile;
pub mod undo;
mod sync;

// Re-export main types
pub use card::{CARD_BACK, Card, CardId, Colour, DECK_SIZE, Rank, Suit};
pub use error::{MoveError, PileError, UndoError};
pub use game::Game;
pub use observer::{CardEvent, CardObserver, EventLog};
pub use options::GameOptions;
pub use pile::{Pile, PileId};
pub use undo::{Operation, UndoLog, UndoStep};
