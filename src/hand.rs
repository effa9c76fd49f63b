//! Hand evaluation.

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

const ACE_BONUS: u8 = 10;

/// The result of evaluating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    /// The hand total.
    pub score: u8,
    /// Whether the total exceeds 21.
    pub busted: bool,
    /// Whether an ace is counted as 11.
    pub soft: bool,
}

/// Evaluates a sequence of cards.
///
/// Every ace starts low (1 point). Aces are then promoted to 11 one at a
/// time for as long as the promotion keeps the total at or below 21, which
/// yields the largest total that does not bust, or the all-low total when
/// no such total exists.
///
/// ```
/// use bjtable::{Card, Rank, Suit, hand::evaluate};
///
/// let hand = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// assert_eq!(evaluate(&hand).score, 21);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> Evaluation {
    let mut score: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces = aces.saturating_add(1);
        }
        score = score.saturating_add(card.rank.points());
    }

    let mut soft = false;
    for _ in 0..aces {
        if score.saturating_add(ACE_BONUS) <= BLACKJACK {
            score += ACE_BONUS;
            soft = true;
        }
    }

    Evaluation {
        score,
        busted: score > BLACKJACK,
        soft,
    }
}

/// Returns whether two cards form a natural (21 on the first two cards).
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate(cards).score == BLACKJACK
}
