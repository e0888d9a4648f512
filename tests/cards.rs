//! Card, deck, and hand tests.

use std::cmp::Ordering;
use std::collections::HashSet;

use bridgers::{Card, DECK_SIZE, Deck, Hand, RANKS, Suit, rank_label};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn deck_holds_every_card_once() {
    let deck = Deck::build();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in RANKS {
            assert!(unique.contains(&card(suit, rank)), "missing {rank} of {suit}");
        }
    }
}

#[test]
fn deck_enumeration_cycles_suits_and_ranks() {
    assert_eq!(Card::from_index(0), card(Suit::Hearts, 1));
    assert_eq!(Card::from_index(1), card(Suit::Diamonds, 2));
    assert_eq!(Card::from_index(4), card(Suit::Hearts, 5));
    assert_eq!(Card::from_index(13), card(Suit::Diamonds, 1));
    assert_eq!(Card::from_index(51), card(Suit::Clubs, 13));
}

#[test]
fn shuffle_keeps_the_same_cards() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::build();
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, Deck::build());
    let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
    let fresh: HashSet<Card> = Deck::build().cards().iter().copied().collect();
    assert_eq!(shuffled, fresh);
}

#[test]
fn pop_top_drains_the_deck() {
    let mut deck = Deck::build();
    let top = *deck.cards().last().unwrap();
    assert_eq!(deck.pop_top(), Some(top));

    while deck.pop_top().is_some() {}
    assert!(deck.is_empty());
    assert_eq!(deck.pop_top(), None);
}

#[test]
fn rank_labels() {
    assert_eq!(rank_label(1), "Ace");
    assert_eq!(rank_label(11), "Jack");
    assert_eq!(rank_label(12), "Queen");
    assert_eq!(rank_label(13), "King");
    for rank in 2..=10u8 {
        assert_eq!(rank_label(rank), rank.to_string());
    }
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Hearts, 1).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Clubs, 7).to_string(), "7 of Clubs");
    assert_eq!(card(Suit::Spades, 13).to_string(), "King of Spades");
}

#[test]
fn ace_is_low_and_king_is_high() {
    let ace = card(Suit::Spades, 1);
    let two = card(Suit::Spades, 2);
    let king = card(Suit::Spades, 13);

    assert_eq!(ace.compare(&two), Some(Ordering::Less));
    assert!(two > ace);
    for rank in 1..13 {
        assert!(king > card(Suit::Spades, rank));
    }
}

#[test]
fn cards_of_different_suits_are_unordered() {
    let heart = card(Suit::Hearts, 2);
    let club = card(Suit::Clubs, 13);

    assert_eq!(heart.compare(&club), None);
    assert_eq!(heart.partial_cmp(&club), None);
    assert!(!(club > heart));
}

#[test]
fn play_card_follows_with_first_matching_card() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 9));
    hand.add_card(card(Suit::Spades, 3));
    hand.add_card(card(Suit::Hearts, 2));

    assert_eq!(hand.play_card(Suit::Hearts), Some(card(Suit::Hearts, 9)));
    assert_eq!(hand.len(), 2);
    assert_eq!(
        hand.cards(),
        &[card(Suit::Spades, 3), card(Suit::Hearts, 2)]
    );
}

#[test]
fn play_card_discards_last_card_without_the_suit() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 9));
    hand.add_card(card(Suit::Spades, 3));
    hand.add_card(card(Suit::Diamonds, 12));

    assert!(!hand.has_suit(Suit::Clubs));
    assert_eq!(hand.play_card(Suit::Clubs), Some(card(Suit::Diamonds, 12)));
    assert_eq!(hand.len(), 2);
}

#[test]
fn play_card_returns_the_suit_iff_held() {
    let mut hand = Hand::new();
    for index in 0..DECK_SIZE {
        if index % 3 == 0 {
            hand.add_card(Card::from_index(index));
        }
    }

    while !hand.is_empty() {
        for suit in Suit::ALL {
            if hand.is_empty() {
                break;
            }
            let held = hand.has_suit(suit);
            let before = hand.len();
            let played = hand.play_card(suit).unwrap();
            assert_eq!(played.suit == suit, held);
            assert_eq!(hand.len(), before - 1);
        }
    }
    assert_eq!(hand.play_card(Suit::Hearts), None);
}

#[test]
fn take_last_is_the_lead_card() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 4));
    hand.add_card(card(Suit::Clubs, 8));

    assert_eq!(hand.take_last(), Some(card(Suit::Clubs, 8)));
    assert_eq!(hand.take_last(), Some(card(Suit::Hearts, 4)));
    assert_eq!(hand.take_last(), None);
}
