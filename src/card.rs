//! Card identity, placement and glyph rendering.

use crate::pile::PileId;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the colour of the suit.
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Self::Diamonds | Self::Hearts => Colour::Red,
            Self::Clubs | Self::Spades => Colour::Black,
        }
    }

    const fn glyph_base(self) -> u32 {
        match self {
            Self::Spades => 0x1F0A0,
            Self::Hearts => 0x1F0B0,
            Self::Diamonds => 0x1F0C0,
            Self::Clubs => 0x1F0D0,
        }
    }
}

/// Card colour, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Diamonds and hearts.
    Red,
    /// Clubs and spades.
    Black,
}

/// Card rank. The discriminant is the ordinal value (Ace = 1, King = 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the ordinal value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given ordinal value, if any.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self::ALL[value as usize - 1])
        } else {
            None
        }
    }

    // The Unicode block has a Knight between Jack and Queen.
    const fn glyph_offset(self) -> u32 {
        match self {
            Self::Queen => 13,
            Self::King => 14,
            _ => self as u32,
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Glyph shown for a face-down card.
pub const CARD_BACK: char = '\u{1F0A0}';

/// Handle to a card owned by a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub(crate) usize);

impl CardId {
    /// Returns the arena slot of the card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A playing card.
///
/// Suit, rank and colour never change. The placement (owning pile, index in
/// that pile) and orientation are updated by the owning
/// [`Game`](crate::Game) only, which keeps the placement consistent with the
/// pile contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    colour: Colour,
    pile: Option<PileId>,
    pile_index: usize,
    face_up: bool,
}

impl Card {
    /// Creates a face-down card that is not in any pile.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self::placed(suit, rank, None, 0)
    }

    pub(crate) const fn placed(
        suit: Suit,
        rank: Rank,
        pile: Option<PileId>,
        pile_index: usize,
    ) -> Self {
        Self {
            suit,
            rank,
            colour: suit.colour(),
            pile,
            pile_index,
            face_up: false,
        }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the colour.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// Returns the pile holding the card, if any.
    #[must_use]
    pub const fn pile(&self) -> Option<PileId> {
        self.pile
    }

    /// Returns the position of the card within its pile (0 when pile-less).
    #[must_use]
    pub const fn pile_index(&self) -> usize {
        self.pile_index
    }

    /// Returns whether the card is face-up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub(crate) const fn set_placement(&mut self, pile: Option<PileId>, pile_index: usize) {
        self.pile = pile;
        self.pile_index = pile_index;
    }

    pub(crate) const fn set_pile_index(&mut self, pile_index: usize) {
        self.pile_index = pile_index;
    }

    pub(crate) const fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Returns the Unicode playing-card symbol for the current state.
    ///
    /// A face-down card always renders as [`CARD_BACK`]. A face-up card maps
    /// to the symbol for its suit and rank. `None` is returned for a
    /// combination without a symbol.
    ///
    /// # Example
    ///
    /// ```
    /// use cardlib::{CARD_BACK, Card, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Spades, Rank::Ace);
    /// assert_eq!(card.glyph(), Some(CARD_BACK));
    /// ```
    #[must_use]
    pub const fn glyph(&self) -> Option<char> {
        if !self.face_up {
            return Some(CARD_BACK);
        }
        char::from_u32(self.suit.glyph_base() + self.rank.glyph_offset())
    }
}
