use crate::error::BetError;
use crate::participant::PlayerId;

use super::{Table, TableState};

impl Table {
    /// Starts the betting phase.
    ///
    /// Has no effect once cards have been dealt.
    pub fn start_betting(&mut self) {
        if self.state == TableState::WaitingForPlayers {
            self.state = TableState::Betting;
        }
    }

    /// Places a bet for the specified player.
    ///
    /// The amount stays part of the player's balance until the hand busts or
    /// the round settles.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the betting state, the player
    /// cannot be found, already bet this round, the bet is below the table
    /// minimum, or the bet exceeds the player's balance.
    pub fn place_bet(&mut self, player_id: PlayerId, amount: usize) -> Result<(), BetError> {
        if self.state != TableState::Betting {
            return Err(BetError::InvalidState);
        }
        if self.betting_order.contains(&player_id) {
            return Err(BetError::AlreadyPlaced);
        }

        let min_bet = self.options.min_bet;
        let player = self
            .player_mut(player_id)
            .ok_or(BetError::PlayerNotFound)?;

        if amount < min_bet {
            return Err(BetError::BelowMinimum);
        }
        player.set_bet(amount)?;
        tracing::info!(player = player_id, amount, "bet placed");

        self.betting_order.push(player_id);
        Ok(())
    }

    /// Returns whether the player has a bet on the table this round.
    #[must_use]
    pub fn has_bet(&self, player_id: PlayerId) -> bool {
        self.betting_order.contains(&player_id)
    }
}
