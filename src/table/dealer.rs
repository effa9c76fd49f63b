use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::RoundError;
use crate::participant::Participant;
use crate::result::{Outcome, PlayerResult, RoundResult, net_amount};

use super::{Table, TableState};

impl Table {
    /// Dealer reveals the hole card and plays out the hand.
    ///
    /// The dealer draws while the total is below
    /// [`TableOptions::dealer_stands_at`](crate::TableOptions::dealer_stands_at)
    /// and the hand has not busted.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the dealer turn state or the
    /// shoe is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.state != TableState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut evaluation = self.dealer.reveal();
        let mut drawn = Vec::new();

        while evaluation.score < self.options.dealer_stands_at && !evaluation.busted {
            let card = self.shoe.draw_one()?;
            evaluation = self.dealer.receive(card);
            drawn.push(card);
        }

        self.dealer.finish();
        tracing::info!(
            score = evaluation.score,
            busted = evaluation.busted,
            drawn = drawn.len(),
            "dealer done"
        );

        self.state = TableState::RoundOver;
        Ok(drawn)
    }

    /// Settles every bet, resets the round and refreshes the shoe.
    ///
    /// Busts are decided before any comparison: a player who busted during
    /// their turn has already lost, and a busted dealer pays every remaining
    /// player. Otherwise the higher total wins and equal totals push.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the round-over state.
    pub fn settle(&mut self) -> Result<RoundResult, RoundError> {
        if self.state != TableState::RoundOver {
            return Err(RoundError::InvalidState);
        }

        let dealer_cards = self.dealer.cards().to_vec();
        let dealer_score = self.dealer.score().unwrap_or(0);
        let dealer_busted = self.dealer.busted();

        let mut busted = core::mem::take(&mut self.busted);
        let mut results = Vec::with_capacity(self.betting_order.len());

        for player in &mut self.players {
            let player_id = player.id();
            if !self.betting_order.contains(&player_id) {
                continue;
            }

            if let Some(index) = busted.iter().position(|r| r.player_id == player_id) {
                results.push(busted.swap_remove(index));
                player.reset();
                continue;
            }

            let outcome = outcome_against(player, dealer_score, dealer_busted);
            results.push(settle_player(player, outcome));
        }

        tracing::info!(
            dealer_score,
            dealer_busted,
            players = results.len(),
            "round settled"
        );

        self.end_round();

        Ok(RoundResult {
            players: results,
            dealer_cards,
            dealer_score,
            dealer_busted,
        })
    }
}

fn outcome_against(player: &Participant, dealer_score: u8, dealer_busted: bool) -> Outcome {
    if player.busted() {
        return Outcome::Busted;
    }
    if dealer_busted {
        return Outcome::Won;
    }

    match player.score().unwrap_or(0).cmp(&dealer_score) {
        Ordering::Greater => Outcome::Won,
        Ordering::Less => Outcome::Lost,
        Ordering::Equal => Outcome::Pushed,
    }
}

fn settle_player(player: &mut Participant, outcome: Outcome) -> PlayerResult {
    let bet = player.bet();
    let cards = player.cards().to_vec();
    let score = player.score().unwrap_or(0);
    let before = player.money();

    let net = match outcome {
        Outcome::Won => {
            player.win();
            net_amount(player.money() - before)
        }
        Outcome::Lost | Outcome::Busted => {
            player.lose();
            -net_amount(before - player.money())
        }
        Outcome::Pushed => {
            player.push();
            0
        }
    };

    tracing::info!(player = player.id(), ?outcome, bet, score, net, "hand settled");

    PlayerResult {
        player_id: player.id(),
        outcome,
        bet,
        cards,
        score,
        net,
        money: player.money(),
    }
}
