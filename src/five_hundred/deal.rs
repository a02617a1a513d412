use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::options::Variant;

use super::deck_for;

/// Hands and kitty produced by dealing a shuffled deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// One hand per player, in seat order.
    hands: Vec<Vec<Card>>,
    /// Cards set aside for the winning bidder.
    kitty: Vec<Card>,
}

impl Deal {
    /// Returns every hand in seat order.
    #[must_use]
    pub fn hands(&self) -> &[Vec<Card>] {
        &self.hands
    }

    /// Returns the hand of `player`, or `None` if there is no such seat.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&[Card]> {
        self.hands.get(player).map(Vec::as_slice)
    }

    /// Returns the kitty.
    #[must_use]
    pub fn kitty(&self) -> &[Card] {
        &self.kitty
    }
}

/// Creates a deck for `variant` shuffled with the given seed.
///
/// The same seed always produces the same order.
#[must_use]
pub fn shuffled_deck(variant: Variant, seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cards = deck_for(variant);
    cards.shuffle(&mut rng);
    cards
}

/// Shuffles a deck and deals it one card at a time around the table.
///
/// Each player receives [`Variant::hand_size`] cards; what is left forms the
/// kitty.
///
/// ```
/// use fhrs::{Variant, deal};
///
/// let deal = deal(Variant::FourPlayer, 7);
/// assert_eq!(deal.hands().len(), 4);
/// assert_eq!(deal.kitty().len(), 3);
/// ```
#[must_use]
pub fn deal(variant: Variant, seed: u64) -> Deal {
    let players = variant.players();
    let dealt = players * variant.hand_size();

    let mut cards = shuffled_deck(variant, seed);
    let kitty = cards.split_off(dealt);

    let mut hands: Vec<Vec<Card>> = (0..players)
        .map(|_| Vec::with_capacity(variant.hand_size()))
        .collect();
    for (index, card) in cards.into_iter().enumerate() {
        hands[index % players].push(card);
    }

    Deal { hands, kitty }
}
