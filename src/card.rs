//! Card types for Five Hundred.

/// Card suit.
///
/// [`Suit::None`] marks cards that have no suit: the Joker, and the unsuited
/// reference cards used when building orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// No suit.
    None,
}

impl Suit {
    /// Every suit, with [`Suit::None`] last.
    pub const ALL: [Self; 5] = [
        Self::Hearts,
        Self::Diamonds,
        Self::Clubs,
        Self::Spades,
        Self::None,
    ];

    /// The four real suits.
    pub const REAL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the color of the suit, or `None` for [`Suit::None`].
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Hearts | Self::Diamonds => Some(Color::Red),
            Self::Clubs | Self::Spades => Some(Color::Black),
            Self::None => None,
        }
    }

    /// Returns the other suit of the same color.
    ///
    /// [`Suit::None`] has no partner and maps to itself.
    ///
    /// ```
    /// use fhrs::Suit;
    ///
    /// assert_eq!(Suit::Spades.opposite(), Suit::Clubs);
    /// assert_eq!(Suit::None.opposite(), Suit::None);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Hearts => Self::Diamonds,
            Self::Diamonds => Self::Hearts,
            Self::Clubs => Self::Spades,
            Self::Spades => Self::Clubs,
            Self::None => Self::None,
        }
    }
}

/// Suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

/// Card rank.
///
/// Ranks carry no ordering of their own; see [`crate::ordering::ace_high`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// A numbered card (2 through 10).
    Numbered(u8),
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Joker.
    Joker,
}

impl Rank {
    /// Every rank in ascending ace-high order, with [`Rank::Joker`] last.
    pub const ALL: [Self; 14] = [
        Self::Numbered(2),
        Self::Numbered(3),
        Self::Numbered(4),
        Self::Numbered(5),
        Self::Numbered(6),
        Self::Numbered(7),
        Self::Numbered(8),
        Self::Numbered(9),
        Self::Numbered(10),
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Joker,
    ];
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// The Joker.
    pub const JOKER: Self = Self::new(Rank::Joker, Suit::None);

    /// Creates a new card.
    ///
    /// Note: This function does not validate the pair. A numbered rank
    /// outside 2..=10 or a suitless non-Joker card is accepted; such cards
    /// are useful as comparison references but never appear in a deck.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card with no suit, used as a rank reference.
    #[must_use]
    pub const fn unsuited(rank: Rank) -> Self {
        Self::new(rank, Suit::None)
    }

    /// Returns whether this card is the Joker.
    #[must_use]
    pub fn is_joker(&self) -> bool {
        *self == Self::JOKER
    }
}

/// Number of cards in the four-player deck.
pub const DECK_SIZE: usize = 43;
