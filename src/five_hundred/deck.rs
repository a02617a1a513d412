use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::options::Variant;
use crate::ordering::ace_high;

/// Creates a deck for the given variant.
///
/// Cards come suit by suit in [`Suit::ALL`] order, each suit in ascending
/// [`Rank::ALL`] order, with the Joker last.
#[must_use]
pub fn deck_for(variant: Variant) -> Vec<Card> {
    let mut cards = Vec::with_capacity(variant.deck_size());

    for suit in Suit::ALL {
        let Some(color) = suit.color() else {
            continue;
        };
        let lowest = Card::unsuited(variant.lowest_rank(color));

        for rank in Rank::ALL {
            if rank == Rank::Joker {
                continue;
            }
            let card = Card::new(rank, suit);
            if ace_high(&card, &lowest) != Ordering::Less {
                cards.push(card);
            }
        }
    }

    cards.push(Card::JOKER);
    cards
}

/// Creates the 43-card deck used with four players.
///
/// ```
/// use fhrs::{Card, DECK_SIZE, deck};
///
/// let cards = deck();
/// assert_eq!(cards.len(), DECK_SIZE);
/// assert_eq!(cards.last(), Some(&Card::JOKER));
/// ```
#[must_use]
pub fn deck() -> Vec<Card> {
    deck_for(Variant::FourPlayer)
}
