//! Five Hundred trick and deck rules.
//!
//! A trick is won by, in order of precedence: the Joker, the right bower
//! (Jack of trump), the left bower (Jack of the other suit of trump's color),
//! any trump, any card of the led suit. Ties within a category go to the
//! higher ace-high rank.

use crate::card::{Card, Rank, Suit};
use crate::error::TrickError;
use crate::ordering::{self, Composite, Rule};
use crate::trick::Trick;

mod deal;
mod deck;

pub use deal::{Deal, deal, shuffled_deck};
pub use deck::{deck, deck_for};

/// Builds the ordering that ranks cards within a trick.
///
/// Jacks of [`Suit::None`] stand in for the bowers of a no-trump trick and
/// never match a real card.
#[must_use]
pub fn trick_ordering(trump: Suit, led: Suit) -> Composite {
    let left_bower = Card::new(Rank::Jack, trump.opposite());
    let right_bower = Card::new(Rank::Jack, trump);

    ordering::composite([
        ordering::exact(Card::JOKER),
        ordering::exact(right_bower),
        ordering::exact(left_bower),
        ordering::suit(trump),
        ordering::suit(led),
        Rule::ACE_HIGH,
    ])
}

/// Returns the play-order index of the winning card.
///
/// If two cards tie under every rule, the later one wins.
///
/// # Errors
///
/// Returns [`TrickError::Empty`] if no card has been played.
pub fn winning_position(trick: &Trick) -> Result<usize, TrickError> {
    let led = trick.led_suit().ok_or(TrickError::Empty)?;

    trick_ordering(trick.trump(), led)
        .max_position(trick.cards())
        .ok_or(TrickError::Empty)
}

/// Returns the winning card of a trick, accounting for trumps, bowers, and
/// the Joker.
///
/// # Errors
///
/// Returns [`TrickError::Empty`] if no card has been played.
///
/// # Example
///
/// ```
/// use fhrs::{Card, Rank, Suit, Trick, winning_card};
///
/// let nine_of_clubs = Card::new(Rank::Numbered(9), Suit::Clubs);
/// let jack_of_spades = Card::new(Rank::Jack, Suit::Spades);
/// let trick = Trick::with_cards(Suit::Spades, vec![nine_of_clubs, jack_of_spades]);
///
/// assert_eq!(winning_card(&trick), Ok(jack_of_spades));
/// ```
pub fn winning_card(trick: &Trick) -> Result<Card, TrickError> {
    let index = winning_position(trick)?;
    trick.cards().get(index).copied().ok_or(TrickError::Empty)
}
