//! Five Hundred trick rules with optional `no_std` support.
//!
//! The crate decides which card wins a trick, accounting for trumps, the
//! right and left bowers, and the Joker. It also builds the reduced decks
//! used by each player count. Card rankings are composed from the reusable
//! rules in [`ordering`].
//!
//! # Example
//!
//! ```
//! use fhrs::{Card, Rank, Suit, Trick, winning_card};
//!
//! let mut trick = Trick::new(Suit::Clubs);
//! trick.push(Card::new(Rank::Ace, Suit::Hearts));
//! trick.push(Card::new(Rank::King, Suit::Diamonds));
//!
//! assert_eq!(winning_card(&trick), Ok(Card::new(Rank::Ace, Suit::Hearts)));
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
pub mod five_hundred;
pub mod options;
pub mod ordering;
pub mod trick;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use error::TrickError;
pub use five_hundred::{
    Deal, deal, deck, deck_for, shuffled_deck, trick_ordering, winning_card, winning_position,
};
pub use options::Variant;
pub use trick::Trick;
