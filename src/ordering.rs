//! Composable card orderings.
//!
//! An ordering is built from a list of [`Rule`]s evaluated in priority order.
//! The first rule that tells two cards apart decides their order; later rules
//! only break ties.
//!
//! ```
//! use core::cmp::Ordering;
//! use fhrs::ordering::{self, Rule};
//! use fhrs::{Card, Rank, Suit};
//!
//! let hearts_first = ordering::composite([ordering::suit(Suit::Hearts), Rule::ACE_HIGH]);
//! let two = Card::new(Rank::Numbered(2), Suit::Hearts);
//! let ace = Card::new(Rank::Ace, Suit::Spades);
//!
//! assert_eq!(hearts_first.compare(&two, &ace), Ordering::Greater);
//! ```

use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};

/// A function that orders two cards directly.
pub type Comparator = fn(&Card, &Card) -> Ordering;

/// A key that maps a card to 1 when it belongs to a category, else 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The card equals this card.
    Exact(Card),
    /// The card has this suit.
    Suit(Suit),
}

impl Key {
    /// Returns the key of `card`.
    #[must_use]
    pub fn key(&self, card: &Card) -> u8 {
        match self {
            Self::Exact(target) => u8::from(card == target),
            Self::Suit(suit) => u8::from(card.suit == *suit),
        }
    }
}

/// A single tie-breaking rule.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Higher key wins.
    Key(Key),
    /// The comparator decides.
    Compare(Comparator),
}

impl Rule {
    /// Plain rank order, see [`ace_high`].
    pub const ACE_HIGH: Self = Self::Compare(ace_high);

    /// Compares two cards under this rule alone.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self {
            Self::Key(key) => key.key(a).cmp(&key.key(b)),
            Self::Compare(compare) => compare(a, b),
        }
    }
}

/// Ranks `target` above every other card.
#[must_use]
pub const fn exact(target: Card) -> Rule {
    Rule::Key(Key::Exact(target))
}

/// Ranks cards of `suit` above cards of any other suit.
#[must_use]
pub const fn suit(suit: Suit) -> Rule {
    Rule::Key(Key::Suit(suit))
}

const fn ace_high_value(rank: Rank) -> u8 {
    match rank {
        Rank::Numbered(n) => n,
        Rank::Jack => 11,
        Rank::Queen => 12,
        Rank::King => 13,
        Rank::Ace => 14,
        Rank::Joker => 15,
    }
}

/// Orders cards by rank alone: numbered cards by face value, then Jack,
/// Queen, King, Ace, and the Joker above everything. Suit is ignored.
///
/// ```
/// use core::cmp::Ordering;
/// use fhrs::ordering::ace_high;
/// use fhrs::{Card, Rank, Suit};
///
/// let ace = Card::new(Rank::Ace, Suit::Clubs);
/// let king = Card::new(Rank::King, Suit::Hearts);
/// assert_eq!(ace_high(&ace, &king), Ordering::Greater);
/// assert_eq!(ace_high(&Card::JOKER, &ace), Ordering::Greater);
/// ```
#[must_use]
pub fn ace_high(a: &Card, b: &Card) -> Ordering {
    ace_high_value(a.rank).cmp(&ace_high_value(b.rank))
}

/// A comparator folded from an ordered list of rules.
#[derive(Debug, Clone, Default)]
pub struct Composite {
    rules: Vec<Rule>,
}

impl Composite {
    /// Returns the rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Compares two cards.
    ///
    /// Rules are tried in order and the first non-equal result is returned.
    /// Cards that tie under every rule compare equal.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Returns the highest card, or `None` if `cards` is empty.
    ///
    /// When several cards tie for highest, the last one wins.
    pub fn max<'c, I>(&self, cards: I) -> Option<&'c Card>
    where
        I: IntoIterator<Item = &'c Card>,
    {
        cards.into_iter().max_by(|a, b| self.compare(a, b))
    }

    /// Returns the index of the highest card, with the same tie-break as
    /// [`Composite::max`].
    #[must_use]
    pub fn max_position(&self, cards: &[Card]) -> Option<usize> {
        cards
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| self.compare(a, b))
            .map(|(index, _)| index)
    }

    /// Sorts cards in ascending order, keeping the relative order of ties.
    pub fn sort(&self, cards: &mut [Card]) {
        cards.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromIterator<Rule> for Composite {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Builds a comparator from rules listed highest priority first.
#[must_use]
pub fn composite<I>(rules: I) -> Composite
where
    I: IntoIterator<Item = Rule>,
{
    rules.into_iter().collect()
}
