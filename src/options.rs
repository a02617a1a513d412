//! Game variant options.

use crate::card::{Color, Rank};

/// Player count variants of Five Hundred.
///
/// Every variant deals ten cards to each player and three to the kitty. The
/// deck is trimmed to fit by dropping low cards of each color.
///
/// ```
/// use fhrs::Variant;
///
/// let variant = Variant::default();
/// assert_eq!(variant, Variant::FourPlayer);
/// assert_eq!(variant.deck_size(), 43);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Variant {
    /// Three players, 33 cards (7 through Ace plus the Joker).
    ThreePlayer,
    /// Four players, 43 cards (red 4s and up, black 5s and up, the Joker).
    #[default]
    FourPlayer,
    /// Five players, 53 cards (the full pack plus the Joker).
    FivePlayer,
}

impl Variant {
    /// Returns the number of players.
    #[must_use]
    pub const fn players(self) -> usize {
        match self {
            Self::ThreePlayer => 3,
            Self::FourPlayer => 4,
            Self::FivePlayer => 5,
        }
    }

    /// Returns the number of cards dealt to each player.
    #[must_use]
    pub const fn hand_size(self) -> usize {
        10
    }

    /// Returns the number of cards set aside as the kitty.
    #[must_use]
    pub const fn kitty_size(self) -> usize {
        3
    }

    /// Returns the total number of cards in the deck.
    #[must_use]
    pub const fn deck_size(self) -> usize {
        self.players() * self.hand_size() + self.kitty_size()
    }

    /// Returns the lowest rank kept in the deck for suits of `color`.
    ///
    /// # Example
    ///
    /// ```
    /// use fhrs::{Color, Rank, Variant};
    ///
    /// assert_eq!(Variant::FourPlayer.lowest_rank(Color::Red), Rank::Numbered(4));
    /// assert_eq!(Variant::FourPlayer.lowest_rank(Color::Black), Rank::Numbered(5));
    /// ```
    #[must_use]
    pub const fn lowest_rank(self, color: Color) -> Rank {
        match (self, color) {
            (Self::ThreePlayer, _) => Rank::Numbered(7),
            (Self::FourPlayer, Color::Red) => Rank::Numbered(4),
            (Self::FourPlayer, Color::Black) => Rank::Numbered(5),
            (Self::FivePlayer, _) => Rank::Numbered(2),
        }
    }
}
