//! Trick representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// The cards played in one round, in play order, and the trump suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    /// Cards in play order.
    cards: Vec<Card>,
    /// Trump suit, [`Suit::None`] for a no-trump trick.
    trump: Suit,
}

impl Trick {
    /// Creates an empty trick.
    #[must_use]
    pub const fn new(trump: Suit) -> Self {
        Self {
            cards: Vec::new(),
            trump,
        }
    }

    /// Creates a trick from cards already played.
    #[must_use]
    pub const fn with_cards(trump: Suit, cards: Vec<Card>) -> Self {
        Self { cards, trump }
    }

    /// Plays a card to the trick.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in play order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the trump suit.
    #[must_use]
    pub const fn trump(&self) -> Suit {
        self.trump
    }

    /// Returns the suit of the first card played.
    #[must_use]
    pub fn led_suit(&self) -> Option<Suit> {
        self.cards.first().map(|card| card.suit)
    }

    /// Returns the number of cards played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no card has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card, keeping the trump suit.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
