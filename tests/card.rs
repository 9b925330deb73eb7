//! Card identity, glyph and undo log tests.

use std::collections::HashSet;

use cardlib::{
    CARD_BACK, Card, Colour, Game, GameOptions, Operation, Rank, Suit, UndoLog, UndoStep,
};

#[test]
fn colour_follows_suit() {
    assert_eq!(Card::new(Suit::Hearts, Rank::Two).colour(), Colour::Red);
    assert_eq!(Card::new(Suit::Diamonds, Rank::Two).colour(), Colour::Red);
    assert_eq!(Card::new(Suit::Clubs, Rank::Two).colour(), Colour::Black);
    assert_eq!(Card::new(Suit::Spades, Rank::Two).colour(), Colour::Black);
}

#[test]
fn rank_values_round_trip() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::King.value(), 13);
    assert_eq!(Rank::from_value(12), Some(Rank::Queen));
    assert_eq!(Rank::from_value(0), None);
    assert_eq!(Rank::from_value(14), None);
}

#[test]
fn face_down_cards_show_the_back() {
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(Card::new(suit, rank).glyph(), Some(CARD_BACK));
        }
    }
}

#[test]
fn face_up_glyphs_are_distinct() {
    let mut game = Game::new(GameOptions::default(), 0);
    let mut glyphs = HashSet::new();

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = game.add_card(suit, rank, None).unwrap();
            game.flip(card, true).unwrap();
            let glyph = game.card(card).unwrap().glyph().unwrap();
            assert_ne!(glyph, CARD_BACK);
            assert!(glyphs.insert(glyph), "{suit:?} {rank:?} reuses {glyph}");
        }
    }
    assert_eq!(glyphs.len(), 52);
}

#[test]
fn glyphs_skip_the_knight() {
    let mut game = Game::new(GameOptions::default(), 0);
    let expected = [
        (Suit::Spades, Rank::Ace, '\u{1F0A1}'),
        (Suit::Spades, Rank::Jack, '\u{1F0AB}'),
        (Suit::Spades, Rank::Queen, '\u{1F0AD}'),
        (Suit::Hearts, Rank::King, '\u{1F0BE}'),
        (Suit::Diamonds, Rank::Ten, '\u{1F0CA}'),
        (Suit::Clubs, Rank::Queen, '\u{1F0DD}'),
    ];

    for (suit, rank, glyph) in expected {
        let card = game.add_card(suit, rank, None).unwrap();
        game.flip(card, true).unwrap();
        assert_eq!(game.card(card).unwrap().glyph(), Some(glyph));
    }
}

#[test]
fn undo_log_cursor_and_truncation() {
    let mut game = Game::new(GameOptions::default(), 0);
    let card = game.add_card(Suit::Clubs, Rank::Ace, None).unwrap();
    let up = Operation::Flip {
        card,
        from: false,
        to: true,
    };

    let mut log = UndoLog::new(0);
    log.record(UndoStep::default());
    assert!(log.is_empty());

    log.record(up.into());
    log.record(up.inverse().into());
    assert_eq!(log.position(), 2);

    assert_eq!(log.undo().unwrap().operations(), &[up.inverse()]);
    assert!(log.can_redo());

    log.record(up.into());
    assert_eq!(log.len(), 2);
    assert!(!log.can_redo());

    log.clear();
    assert!(!log.can_undo());
    assert!(log.undo().is_none());
}

#[test]
fn transfer_inverse_swaps_ends() {
    let mut game = Game::new(GameOptions::default(), 0);
    let a = game.add_pile("a").unwrap();
    let b = game.add_pile("b").unwrap();

    let forward = Operation::Transfer {
        from: a,
        from_index: 3,
        to: b,
        to_index: 1,
        count: 2,
    };
    let back = Operation::Transfer {
        from: b,
        from_index: 1,
        to: a,
        to_index: 3,
        count: 2,
    };

    assert_eq!(forward.inverse(), back);
    assert_eq!(back.inverse(), forward);
}
