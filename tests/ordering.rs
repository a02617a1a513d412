//! Ordering engine integration tests.

use core::cmp::Ordering;

use fhrs::ordering::{self, Composite, Key, Rule, ace_high};
use fhrs::{Card, Rank, Suit};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn ace_high_ranks_ignore_suit() {
    let ascending: Vec<Card> = Rank::ALL
        .iter()
        .map(|&rank| card(rank, Suit::Clubs))
        .collect();
    for pair in ascending.windows(2) {
        assert_eq!(ace_high(&pair[0], &pair[1]), Ordering::Less, "{pair:?}");
    }

    assert_eq!(
        ace_high(&card(Rank::Queen, Suit::Hearts), &card(Rank::Queen, Suit::Spades)),
        Ordering::Equal
    );
    assert_eq!(
        ace_high(&card(Rank::Ace, Suit::Diamonds), &card(Rank::King, Suit::Diamonds)),
        Ordering::Greater
    );
    assert_eq!(
        ace_high(&Card::unsuited(Rank::Numbered(10)), &card(Rank::Jack, Suit::Hearts)),
        Ordering::Less
    );
}

#[test]
fn key_rules_score_membership() {
    let target = card(Rank::Jack, Suit::Hearts);
    assert_eq!(Key::Exact(target).key(&target), 1);
    assert_eq!(Key::Exact(target).key(&card(Rank::Jack, Suit::Diamonds)), 0);
    assert_eq!(Key::Suit(Suit::Hearts).key(&card(Rank::Numbered(4), Suit::Hearts)), 1);
    assert_eq!(Key::Suit(Suit::Hearts).key(&Card::JOKER), 0);
    assert_eq!(Key::Suit(Suit::None).key(&Card::JOKER), 1);
}

#[test]
fn first_distinguishing_rule_decides() {
    let spades_then_rank = ordering::composite([ordering::suit(Suit::Spades), Rule::ACE_HIGH]);
    let low_spade = card(Rank::Numbered(5), Suit::Spades);
    let high_heart = card(Rank::Ace, Suit::Hearts);

    assert_eq!(spades_then_rank.compare(&low_spade, &high_heart), Ordering::Greater);
    assert_eq!(spades_then_rank.compare(&high_heart, &low_spade), Ordering::Less);
}

#[test]
fn tied_keys_fall_through_to_rank() {
    let composite = ordering::composite([
        ordering::exact(Card::JOKER),
        ordering::suit(Suit::Spades),
        Rule::ACE_HIGH,
    ]);
    let king = card(Rank::King, Suit::Hearts);
    let ten = card(Rank::Numbered(10), Suit::Diamonds);

    assert_eq!(composite.compare(&king, &ten), Ordering::Greater);
    assert_eq!(composite.max([&ten, &king]), Some(&king));
}

#[test]
fn exact_rule_pins_card_to_top() {
    let pinned = card(Rank::Numbered(6), Suit::Clubs);
    let composite = ordering::composite([ordering::exact(pinned), Rule::ACE_HIGH]);
    let cards = [card(Rank::Ace, Suit::Clubs), pinned, Card::JOKER];

    assert_eq!(composite.max(&cards), Some(&pinned));
    assert_eq!(composite.max_position(&cards), Some(1));
}

#[test]
fn empty_composite_ties_everything() {
    let composite = Composite::default();
    assert!(composite.rules().is_empty());

    let cards = [card(Rank::Ace, Suit::Clubs), card(Rank::Numbered(2), Suit::Hearts)];
    assert_eq!(composite.compare(&cards[0], &cards[1]), Ordering::Equal);
    assert_eq!(composite.max_position(&cards), Some(1));
}

#[test]
fn max_of_nothing_is_none() {
    let composite = ordering::composite([Rule::ACE_HIGH]);
    let none: [Card; 0] = [];
    assert_eq!(composite.max(&none), None);
    assert_eq!(composite.max_position(&[]), None);
}

#[test]
fn custom_comparator_rule() {
    fn low_first(a: &Card, b: &Card) -> Ordering {
        ace_high(b, a)
    }

    let composite: Composite = [Rule::Compare(low_first)].into_iter().collect();
    let mut cards = vec![
        card(Rank::Numbered(3), Suit::Hearts),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Numbered(9), Suit::Hearts),
    ];
    composite.sort(&mut cards);

    assert_eq!(
        cards,
        vec![
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Numbered(9), Suit::Hearts),
            card(Rank::Numbered(3), Suit::Hearts),
        ]
    );
    assert_eq!(composite.rules().len(), 1);
}

#[test]
fn suit_colors_and_opposites() {
    for suit in Suit::REAL {
        let opposite = suit.opposite();
        assert_ne!(opposite, suit);
        assert_eq!(opposite.opposite(), suit);
        assert_eq!(opposite.color(), suit.color());
    }
    assert_eq!(Suit::None.color(), None);
    assert_eq!(Suit::None.opposite(), Suit::None);
    assert_eq!(Suit::ALL.last(), Some(&Suit::None));
    assert_eq!(Rank::ALL.last(), Some(&Rank::Joker));
}
