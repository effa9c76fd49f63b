use alloc::string::String;

use crate::error::{ActionError, BetError, RoundError};
use crate::participant::{Dealer, Participant};
use crate::result::RoundResult;

use super::{Table, TableState};

/// The collaborator that supplies player decisions to [`Table::run_round`].
///
/// The table never waits on its own; it calls back into the controller when
/// it needs a bet or an action and re-prompts after every rejection.
pub trait Controller {
    /// Returns the wager for `player`, or `None` to sit the round out.
    fn bet(&mut self, player: &Participant) -> Option<usize>;

    /// Returns a raw action token for `player`, such as `"hit"` or `"2"`.
    fn action(&mut self, player: &Participant, dealer: &Dealer) -> String;

    /// Called when a bet is rejected, before the player is asked again.
    fn bet_rejected(&mut self, _player: &Participant, _error: BetError) {}

    /// Called when an action is rejected, before the player is asked again.
    fn action_rejected(&mut self, _player: &Participant, _error: ActionError) {}
}

impl Table {
    /// Plays one full round: bets, deal, player turns, dealer turn and
    /// settlement.
    ///
    /// Players whose balance is below the table minimum are not asked to bet.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, nobody bets, or
    /// the shoe runs out.
    pub fn run_round<C: Controller>(
        &mut self,
        controller: &mut C,
    ) -> Result<RoundResult, RoundError> {
        self.start_betting();
        if self.state != TableState::Betting {
            return Err(RoundError::InvalidState);
        }

        for index in 0..self.players.len() {
            let player = &self.players[index];
            if player.money() < self.options.min_bet || self.has_bet(player.id()) {
                continue;
            }

            while let Some(amount) = controller.bet(&self.players[index]) {
                let player_id = self.players[index].id();
                match self.place_bet(player_id, amount) {
                    Ok(()) => break,
                    Err(err) => controller.bet_rejected(&self.players[index], err),
                }
            }
        }

        self.deal()?;

        while let Some(player_id) = self.current_player() {
            let Some(player) = self.player(player_id) else {
                break;
            };
            let token = controller.action(player, &self.dealer);

            match self.act(player_id, &token) {
                Ok(_) => {}
                Err(ActionError::EmptyShoe(err)) => return Err(err.into()),
                Err(err) => {
                    if let Some(player) = self.player(player_id) {
                        controller.action_rejected(player, err);
                    }
                }
            }
        }

        self.dealer_play()?;
        self.settle()
    }
}
