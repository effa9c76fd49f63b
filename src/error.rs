//! Error types for table operations.

use thiserror::Error;

/// A draw was attempted from an empty shoe.
///
/// A correctly sized game never exhausts its shoe, so this signals a broken
/// caller contract rather than a player mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyShoeError;

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Every seat is taken.
    #[error("table is full")]
    TableFull,
    /// The player name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// Players cannot join while a round is in progress.
    #[error("cannot seat players during a round")]
    RoundInProgress,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Bet exceeds the player's balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid table state for betting.
    #[error("invalid table state for betting")]
    InvalidState,
    /// Bet amount is below the table minimum.
    #[error("bet is below the table minimum")]
    BelowMinimum,
    /// The player already placed a bet this round.
    #[error("bet already placed")]
    AlreadyPlaced,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid table state for dealing.
    #[error("invalid table state for dealing")]
    InvalidState,
    /// No players have placed bets.
    #[error("no players have placed bets")]
    NoBets,
    /// The shoe ran out while dealing.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action token does not name a known action.
    #[error("action not recognised")]
    NotMapped,
    /// Invalid table state for this action.
    #[error("invalid table state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The hand already stood or busted.
    #[error("hand is not active")]
    HandNotActive,
    /// Doubling down needs a balance of at least twice the bet.
    #[error("insufficient funds to double down")]
    InsufficientFunds,
    /// Splitting is not supported.
    #[error("split is not implemented")]
    SplitUnsupported,
    /// The shoe ran out.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}

/// Errors that can occur while the dealer plays or the round settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid table state for this step.
    #[error("invalid table state for this step")]
    InvalidState,
    /// The shoe ran out.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
}
