//! Table state types.

/// Table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableState {
    /// Between rounds; players may join or leave.
    WaitingForPlayers,
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer reveals and plays out their hand.
    DealerTurn,
    /// Dealer is done and the round can be settled.
    RoundOver,
}

impl TableState {
    /// Returns whether no cards are on the table.
    #[must_use]
    pub const fn is_between_rounds(self) -> bool {
        matches!(self, Self::WaitingForPlayers | Self::Betting)
    }
}
