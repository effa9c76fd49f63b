//! Shoe composition and draw tests.

use std::collections::HashSet;

use bjtable::{Card, DECK_SIZE, EmptyShoeError, Rank, Shoe, ShoeVariant, Suit};
use proptest::prelude::*;

fn assert_full(shoe: &Shoe, decks: usize) {
    assert_eq!(shoe.len(), decks * DECK_SIZE);
    for rank in Rank::ALL {
        let n = shoe.cards().iter().filter(|c| c.rank == rank).count();
        assert_eq!(n, 4 * decks, "rank {rank}");
    }
    for suit in Suit::ALL {
        let n = shoe.cards().iter().filter(|c| c.suit == suit).count();
        assert_eq!(n, 13 * decks, "suit {suit}");
    }
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            assert_eq!(shoe.count(Card::new(rank, suit)), decks);
        }
    }
}

#[test]
fn traditional_shoe_has_one_deck() {
    let shoe = Shoe::from_seed(ShoeVariant::Traditional, 1);
    assert_full(&shoe, 1);
}

#[test]
fn modern_shoe_has_eight_decks() {
    let shoe = Shoe::from_seed(ShoeVariant::Modern, 1);
    assert_eq!(ShoeVariant::Modern.size(), 416);
    assert_full(&shoe, 8);
}

#[test]
fn unshuffled_build_matches_variant() {
    assert_eq!(bjtable::shoe::build(ShoeVariant::Traditional).len(), 52);
    assert_eq!(bjtable::shoe::build(ShoeVariant::Modern).len(), 416);
}

#[test]
fn empty_shoe_reports_error() {
    let mut shoe = Shoe::stacked(ShoeVariant::Traditional, &[]);
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw_one(), Err(EmptyShoeError));
}

#[test]
fn stacked_shoe_deals_in_order() {
    let draws = [
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Six, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Clubs),
    ];
    let mut shoe = Shoe::stacked(ShoeVariant::Traditional, &draws);
    for expected in draws {
        assert_eq!(shoe.draw_one(), Ok(expected));
    }
    assert!(shoe.draw_one().is_err());
}

#[test]
fn refresh_rebuilds_a_full_shoe() {
    let mut shoe = Shoe::stacked(ShoeVariant::Traditional, &[Card::new(Rank::Ace, Suit::Spades)]);
    shoe.refresh();
    assert_full(&shoe, 1);

    let mut shoe = Shoe::from_seed(ShoeVariant::Modern, 3);
    for _ in 0..100 {
        shoe.draw_one().unwrap();
    }
    shoe.refresh();
    assert_full(&shoe, 8);
}

#[test]
fn remove_takes_one_instance() {
    let mut shoe = Shoe::from_seed(ShoeVariant::Modern, 9);
    let queen = Card::new(Rank::Queen, Suit::Diamonds);
    assert_eq!(shoe.remove(queen), Some(queen));
    assert_eq!(shoe.count(queen), 7);
    assert_eq!(shoe.len(), 415);
}

#[test]
fn remove_missing_card_returns_none() {
    let mut shoe = Shoe::stacked(ShoeVariant::Traditional, &[Card::new(Rank::Two, Suit::Clubs)]);
    assert_eq!(shoe.remove(Card::new(Rank::Ace, Suit::Spades)), None);
    assert_eq!(shoe.len(), 1);
}

#[test]
fn seeded_shoes_are_reproducible() {
    let mut a = Shoe::from_seed(ShoeVariant::Traditional, 42);
    let mut b = Shoe::from_seed(ShoeVariant::Traditional, 42);
    for _ in 0..10 {
        assert_eq!(a.draw_one(), b.draw_one());
    }
}

#[test]
fn entropy_seeded_shoe_is_full() {
    let shoe = Shoe::new(ShoeVariant::Traditional);
    assert_full(&shoe, 1);
}

proptest! {
    #[test]
    fn drawn_cards_leave_the_shoe(seed in any::<u64>(), n in 0usize..=52) {
        let mut shoe = Shoe::from_seed(ShoeVariant::Traditional, seed);
        let drawn: Vec<Card> = (0..n).map(|_| shoe.draw_one().unwrap()).collect();

        prop_assert_eq!(shoe.len(), 52 - n);
        let remaining: HashSet<Card> = shoe.cards().iter().copied().collect();
        let taken: HashSet<Card> = drawn.iter().copied().collect();
        prop_assert_eq!(taken.len(), n);
        prop_assert!(taken.is_disjoint(&remaining));
    }

    #[test]
    fn draws_conserve_modern_card_counts(seed in any::<u64>(), n in 0usize..=416) {
        let mut shoe = Shoe::from_seed(ShoeVariant::Modern, seed);
        let drawn: Vec<Card> = (0..n).map(|_| shoe.draw_one().unwrap()).collect();

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let card = Card::new(rank, suit);
                let out = drawn.iter().filter(|c| **c == card).count();
                prop_assert_eq!(shoe.count(card) + out, 8);
            }
        }
    }
}
