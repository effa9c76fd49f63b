//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::participant::PlayerId;

/// How a player's hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    Won,
    /// Player loses to a higher dealer total.
    Lost,
    /// Equal totals, no transfer.
    Pushed,
    /// Player went over 21 and forfeited during their turn.
    Busted,
}

/// Result for a single player.
///
/// The hand is captured before the round reset clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: PlayerId,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The amount that was at stake, including any double down.
    pub bet: usize,
    /// The player's final cards.
    pub cards: Vec<Card>,
    /// The player's final total.
    pub score: u8,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Balance after the result was applied.
    pub money: usize,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final cards, hole card included.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final total.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_busted: bool,
}

impl RoundResult {
    /// Returns the result for the given player.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&PlayerResult> {
        self.players.iter().find(|r| r.player_id == player_id)
    }
}

/// Converts a transferred amount to a signed net, saturating at
/// [`isize::MAX`].
pub(crate) fn net_amount(amount: usize) -> isize {
    isize::try_from(amount).unwrap_or(isize::MAX)
}
