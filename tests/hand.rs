//! Hand evaluation tests.

use bjtable::{Card, Rank, Suit, evaluate, hand::is_natural};
use proptest::prelude::*;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn non_ace_rank() -> impl Strategy<Value = Rank> {
    (0usize..12).prop_map(|i| Rank::ALL[i])
}

fn any_suit() -> impl Strategy<Value = Suit> {
    (0usize..4).prop_map(|i| Suit::ALL[i])
}

fn non_ace_card() -> impl Strategy<Value = Card> {
    (non_ace_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn any_card() -> impl Strategy<Value = Card> {
    ((0usize..13), any_suit()).prop_map(|(i, s)| Card::new(Rank::ALL[i], s))
}

fn points(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.rank.points())).sum()
}

proptest! {
    #[test]
    fn hands_without_aces_score_their_sum(cards in prop::collection::vec(non_ace_card(), 0..8)) {
        let sum = points(&cards);
        let evaluation = evaluate(&cards);
        prop_assert_eq!(u32::from(evaluation.score), sum);
        prop_assert_eq!(evaluation.busted, sum > 21);
        prop_assert!(!evaluation.soft);
    }

    #[test]
    fn single_ace_counts_high_only_when_it_fits(
        others in prop::collection::vec(non_ace_card(), 0..6),
        suit in any_suit(),
        position in 0usize..6,
    ) {
        let rest = points(&others);
        let mut cards = others.clone();
        cards.insert(position.min(cards.len()), card(Rank::Ace, suit));

        let evaluation = evaluate(&cards);
        if rest <= 10 {
            prop_assert_eq!(u32::from(evaluation.score), rest + 11);
            prop_assert!(!evaluation.busted);
            prop_assert!(evaluation.soft);
        } else {
            prop_assert_eq!(u32::from(evaluation.score), rest + 1);
            prop_assert_eq!(evaluation.busted, rest + 1 > 21);
        }
    }

    #[test]
    fn evaluation_is_idempotent(cards in prop::collection::vec(any_card(), 0..12)) {
        prop_assert_eq!(evaluate(&cards), evaluate(&cards));
    }

    #[test]
    fn card_order_does_not_change_the_score(cards in prop::collection::vec(any_card(), 0..10)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(evaluate(&cards), evaluate(&reversed));
    }

    #[test]
    fn score_is_the_best_total_not_over_21(cards in prop::collection::vec(any_card(), 0..10)) {
        let low = points(&cards);
        let aces = cards.iter().filter(|c| c.rank.is_ace()).count() as u32;
        let best = (0..=aces)
            .map(|promoted| low + promoted * 10)
            .filter(|total| *total <= 21)
            .max()
            .unwrap_or(low);
        prop_assert_eq!(u32::from(evaluate(&cards).score), best);
    }
}

#[test]
fn two_aces_and_a_nine_make_21() {
    let hand = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
    ];
    let evaluation = evaluate(&hand);
    assert_eq!(evaluation.score, 21);
    assert!(!evaluation.busted);
    assert!(evaluation.soft);
}

#[test]
fn face_cards_count_ten() {
    let hand = [
        card(Rank::Jack, Suit::Spades),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
    ];
    let evaluation = evaluate(&hand);
    assert_eq!(evaluation.score, 30);
    assert!(evaluation.busted);
}

#[test]
fn four_aces_and_a_seven() {
    let mut hand: Vec<Card> = Suit::ALL.iter().map(|&s| card(Rank::Ace, s)).collect();
    assert_eq!(evaluate(&hand).score, 14);

    hand.push(card(Rank::Seven, Suit::Clubs));
    assert_eq!(evaluate(&hand).score, 21);

    hand.push(card(Rank::Two, Suit::Clubs));
    let evaluation = evaluate(&hand);
    assert_eq!(evaluation.score, 13);
    assert!(!evaluation.soft);
}

#[test]
fn empty_hand_scores_zero() {
    let evaluation = evaluate(&[]);
    assert_eq!(evaluation.score, 0);
    assert!(!evaluation.busted);
}

#[test]
fn natural_needs_exactly_two_cards() {
    assert!(is_natural(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ]));
    assert!(!is_natural(&[
        card(Rank::Seven, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ]));
}

#[test]
fn cards_display_rank_and_suit() {
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "A♠");
    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10♥");
}

#[test]
fn oversized_hands_saturate() {
    let hand = [card(Rank::Ace, Suit::Spades); 300];
    let evaluation = evaluate(&hand);
    assert_eq!(evaluation.score, u8::MAX);
    assert!(evaluation.busted);
    assert!(!evaluation.soft);
}
