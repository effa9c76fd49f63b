use crate::action::{Action, apply};
use crate::error::ActionError;
use crate::hand::Evaluation;
use crate::participant::PlayerId;
use crate::result::{Outcome, PlayerResult, net_amount};

use super::{Table, TableState};

impl Table {
    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` outside the player turns.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.state != TableState::PlayerTurn {
            return None;
        }
        self.betting_order.get(self.current_turn).copied()
    }

    /// Applies a raw action token for the player whose turn it is.
    ///
    /// Tokens are parsed with [`Action::parse`]. The turn passes to the next
    /// player once the hand stands or busts, and to the dealer after the last
    /// player.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not recognised, the table is not in
    /// the player turn state, the player is unknown or not the current
    /// player, the action is rejected, or the shoe is empty. Nothing changes
    /// on error.
    pub fn act(&mut self, player_id: PlayerId, token: &str) -> Result<Evaluation, ActionError> {
        let action = Action::parse(token).inspect_err(|_| {
            tracing::warn!(player = player_id, token, "unrecognised action");
        })?;
        self.perform(player_id, action)
    }

    /// Applies an already parsed action for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// See [`Table::act`].
    pub fn perform(
        &mut self,
        player_id: PlayerId,
        action: Action,
    ) -> Result<Evaluation, ActionError> {
        if self.state != TableState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        if self.player(player_id).is_none() {
            return Err(ActionError::PlayerNotFound);
        }
        if self.current_player() != Some(player_id) {
            return Err(ActionError::NotYourTurn);
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == player_id)
            .ok_or(ActionError::PlayerNotFound)?;
        let money_before = player.money();
        let evaluation = apply(action, player, &mut self.shoe)?;

        if player.busted() {
            let lost = money_before - player.money();
            let net = -net_amount(lost);
            self.busted.push(PlayerResult {
                player_id,
                outcome: Outcome::Busted,
                bet: lost,
                cards: player.cards().to_vec(),
                score: evaluation.score,
                net,
                money: player.money(),
            });
        }

        if player.stand() {
            self.current_turn += 1;
            self.skip_finished_hands();
        }

        Ok(evaluation)
    }

    /// Moves the turn past hands that can no longer act.
    pub(super) fn skip_finished_hands(&mut self) {
        while let Some(player_id) = self.betting_order.get(self.current_turn).copied() {
            let active = self.player(player_id).is_some_and(|p| p.is_active());
            if active {
                return;
            }
            self.current_turn += 1;
        }

        tracing::debug!("all players done");
        self.state = TableState::DealerTurn;
    }
}
