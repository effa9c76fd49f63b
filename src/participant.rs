//! Player and dealer records.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::action::Step;
use crate::card::Card;
use crate::error::BetError;
use crate::hand::{Evaluation, evaluate};

/// Identifier handed out when a player is seated.
pub type PlayerId = u8;

/// A seated player.
///
/// The record persists across rounds. Its round-scoped fields (`bet`,
/// `cards`, `score`, `stand`, `busted`) are cleared by the table when a round
/// settles.
///
/// The balance includes the current bet: money only moves when the hand
/// busts or the round settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: PlayerId,
    name: String,
    money: usize,
    bet: usize,
    cards: Vec<Card>,
    score: Option<u8>,
    stand: bool,
    busted: bool,
}

impl Participant {
    /// Creates a player with an empty hand and no bet.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, money: usize) -> Self {
        Self {
            id,
            name: name.into(),
            money,
            bet: 0,
            cards: Vec::new(),
            score: None,
            stand: false,
            busted: false,
        }
    }

    /// Returns the player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the wager for the current round, 0 outside a round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the last evaluated total, `None` before the first evaluation.
    #[must_use]
    pub const fn score(&self) -> Option<u8> {
        self.score
    }

    /// Returns whether the player's turn is over.
    #[must_use]
    pub const fn stand(&self) -> bool {
        self.stand
    }

    /// Returns whether the hand went over 21.
    #[must_use]
    pub const fn busted(&self) -> bool {
        self.busted
    }

    /// Returns whether the player can still act.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.stand
    }

    /// Sets the wager for the round.
    ///
    /// The wager can only change before the hand holds any card.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InvalidState`] once cards have been dealt and
    /// [`BetError::InsufficientFunds`] if `amount` exceeds the balance. The
    /// record is unchanged on error.
    pub fn set_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !self.cards.is_empty() || self.stand {
            return Err(BetError::InvalidState);
        }
        if amount > self.money {
            return Err(BetError::InsufficientFunds);
        }
        self.bet = amount;
        Ok(())
    }

    /// Adds a card and re-evaluates the hand.
    pub(crate) fn receive(&mut self, card: Card) -> Evaluation {
        self.cards.push(card);
        self.reevaluate()
    }

    /// Recomputes the score, busting the hand if it went over 21.
    pub fn reevaluate(&mut self) -> Evaluation {
        let evaluation = evaluate(&self.cards);
        self.score = Some(evaluation.score);
        if evaluation.busted && !self.busted {
            self.bust();
        }
        evaluation
    }

    /// Returns the record that results from applying `step`.
    ///
    /// `card` is the card drawn for the step, if it draws one. The receiver
    /// is left untouched.
    #[must_use]
    pub fn transition(&self, step: Step, card: Option<Card>) -> Self {
        let mut next = self.clone();
        if let Some(card) = card {
            next.cards.push(card);
        }
        if step.double_bet {
            next.bet = next.bet.saturating_mul(2);
        }
        if step.stand {
            next.stand = true;
        }
        next.reevaluate();
        next
    }

    fn bust(&mut self) {
        tracing::info!(
            player = self.id,
            score = ?self.score,
            lost = self.bet,
            "player busted"
        );
        self.busted = true;
        self.stand = true;
        self.money = self.money.saturating_sub(self.bet);
        self.bet = 0;
    }

    /// Credits the bet and clears the round.
    pub(crate) fn win(&mut self) {
        self.money = self.money.saturating_add(self.bet);
        self.bet = 0;
        self.reset();
    }

    /// Deducts the bet and clears the round.
    pub(crate) fn lose(&mut self) {
        self.money = self.money.saturating_sub(self.bet);
        self.bet = 0;
        self.reset();
    }

    /// Returns the bet without any transfer and clears the round.
    pub(crate) fn push(&mut self) {
        self.bet = 0;
        self.reset();
    }

    /// Clears the round-scoped fields.
    pub(crate) fn reset(&mut self) {
        self.busted = false;
        self.stand = false;
        self.score = None;
        self.cards.clear();
    }
}

/// The dealer. The dealer represents the house and has no balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    name: String,
    cards: Vec<Card>,
    hole_card: Option<Card>,
    score: Option<u8>,
    stand: bool,
    busted: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
            hole_card: None,
            score: None,
            stand: false,
            busted: false,
        }
    }

    /// Returns the dealer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the visible cards. The hole card is excluded until revealed.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card dealt before the hole card.
    #[must_use]
    pub fn upcard(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the unrevealed hole card.
    #[must_use]
    pub const fn hole_card(&self) -> Option<Card> {
        self.hole_card
    }

    /// Returns the last evaluated total of the visible cards.
    #[must_use]
    pub const fn score(&self) -> Option<u8> {
        self.score
    }

    /// Returns whether the dealer has finished drawing.
    #[must_use]
    pub const fn stand(&self) -> bool {
        self.stand
    }

    /// Returns whether the dealer went over 21.
    #[must_use]
    pub const fn busted(&self) -> bool {
        self.busted
    }

    pub(crate) fn receive(&mut self, card: Card) -> Evaluation {
        self.cards.push(card);
        self.reevaluate()
    }

    pub(crate) const fn set_hole_card(&mut self, card: Card) {
        self.hole_card = Some(card);
    }

    /// Moves the hole card into the visible hand and re-evaluates.
    pub(crate) fn reveal(&mut self) -> Evaluation {
        if let Some(card) = self.hole_card.take() {
            tracing::debug!(%card, "dealer reveals hole card");
            self.cards.push(card);
        }
        self.reevaluate()
    }

    /// Recomputes the score of the visible cards.
    pub fn reevaluate(&mut self) -> Evaluation {
        let evaluation = evaluate(&self.cards);
        self.score = Some(evaluation.score);
        if evaluation.busted {
            self.busted = true;
            self.stand = true;
        }
        evaluation
    }

    pub(crate) const fn finish(&mut self) {
        self.stand = true;
    }

    /// Clears the round-scoped fields.
    pub(crate) fn reset(&mut self) {
        self.busted = false;
        self.stand = false;
        self.score = None;
        self.hole_card = None;
        self.cards.clear();
    }
}
