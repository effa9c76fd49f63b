//! Table engine and round state management.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::SeatError;
use crate::options::TableOptions;
use crate::participant::{Dealer, Participant, PlayerId};
use crate::result::PlayerResult;
use crate::shoe::Shoe;

mod bet;
mod deal;
mod dealer;
mod round;
pub mod state;
mod turn;

pub use deal::initial_deal;
pub use round::Controller;
pub use state::TableState;

/// A blackjack table that manages seated players, the dealer and the shoe.
///
/// The table owns every piece of round state. It is a plain request/response
/// state machine: each call validates the current [`TableState`], mutates the
/// records and returns, so a presentation layer drives the round either
/// through the phase methods or through [`Table::run_round`].
#[derive(Debug, Clone)]
pub struct Table {
    options: TableOptions,
    state: TableState,
    shoe: Shoe,
    next_id: PlayerId,
    /// Players in seating order.
    players: Vec<Participant>,
    dealer: Dealer,
    /// Players who bet this round, in seating order.
    betting_order: Vec<PlayerId>,
    /// Index into `betting_order`.
    current_turn: usize,
    /// Results recorded when a hand busts during the player turns.
    busted: Vec<PlayerResult>,
}

impl Table {
    /// Creates a table with a shoe seeded from operating system entropy.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjtable::{Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default());
    /// let alice = table.seat_player("Alice", 1000).unwrap();
    /// assert_eq!(table.player(alice).map(|p| p.money()), Some(1000));
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new(options: TableOptions) -> Self {
        let shoe = Shoe::new(options.variant);
        Self::with_shoe(options, shoe)
    }

    /// Creates a table whose shoe is seeded with `seed`.
    ///
    /// Intended for tests and replays.
    #[must_use]
    pub fn from_seed(options: TableOptions, seed: u64) -> Self {
        let shoe = Shoe::from_seed(options.variant, seed);
        Self::with_shoe(options, shoe)
    }

    /// Creates a table around an existing shoe.
    #[must_use]
    pub fn with_shoe(options: TableOptions, shoe: Shoe) -> Self {
        Self {
            options,
            state: TableState::WaitingForPlayers,
            shoe,
            next_id: 0,
            players: Vec::new(),
            dealer: Dealer::new("Dealer"),
            betting_order: Vec::new(),
            current_turn: 0,
            busted: Vec::new(),
        }
    }

    /// Seats a player with the given starting balance.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, every seat is taken, every
    /// player ID is in use, or a round is in progress.
    pub fn seat_player(
        &mut self,
        name: impl Into<String>,
        budget: usize,
    ) -> Result<PlayerId, SeatError> {
        if !self.state.is_between_rounds() {
            return Err(SeatError::RoundInProgress);
        }

        let name = name.into();
        if name.trim().is_empty() {
            return Err(SeatError::EmptyName);
        }
        if self.players.len() >= self.options.max_players {
            return Err(SeatError::TableFull);
        }

        let id = self.free_id().ok_or(SeatError::TableFull)?;
        self.next_id = id.wrapping_add(1);
        tracing::info!(player = id, name = %name, budget, "player seated");
        self.players.push(Participant::new(id, name, budget));
        Ok(id)
    }

    /// Removes a player from the table.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::RoundInProgress`] once cards have been dealt.
    pub fn leave(&mut self, player_id: PlayerId) -> Result<(), SeatError> {
        if !self.state.is_between_rounds() {
            return Err(SeatError::RoundInProgress);
        }
        self.players.retain(|p| p.id() != player_id);
        self.betting_order.retain(|&id| id != player_id);
        Ok(())
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current table state.
    #[must_use]
    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Returns the seated players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Participant> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Replaces the shoe between rounds.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::RoundInProgress`] once cards have been dealt.
    pub fn replace_shoe(&mut self, shoe: Shoe) -> Result<(), SeatError> {
        if !self.state.is_between_rounds() {
            return Err(SeatError::RoundInProgress);
        }
        self.shoe = shoe;
        Ok(())
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Finds the next unused ID, starting after the last one handed out.
    fn free_id(&self) -> Option<PlayerId> {
        (0..=PlayerId::MAX)
            .map(|offset| self.next_id.wrapping_add(offset))
            .find(|&id| self.player(id).is_none())
    }

    fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Participant> {
        self.players.iter_mut().find(|p| p.id() == player_id)
    }

    /// Clears all round state and rebuilds the shoe.
    ///
    /// Every participant is reset, the shoe is refreshed and the table
    /// returns to [`TableState::WaitingForPlayers`]. Bets still on the table
    /// are returned without any transfer.
    pub fn clear_round(&mut self) {
        for player in &mut self.players {
            player.push();
        }
        self.end_round();
    }

    fn end_round(&mut self) {
        self.dealer.reset();
        self.betting_order.clear();
        self.busted.clear();
        self.current_turn = 0;
        self.shoe.refresh();
        self.state = TableState::WaitingForPlayers;
    }
}
