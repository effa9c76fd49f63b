use alloc::vec::Vec;

use crate::error::{DealError, EmptyShoeError};
use crate::participant::{Dealer, Participant};
use crate::shoe::Shoe;

use super::{Table, TableState};

/// Deals the opening hands.
///
/// The order is fixed: one card to each player in seating order, the
/// dealer's upcard, a second card to each player, then the dealer's hole
/// card, which stays out of the dealer's visible hand until revealed.
///
/// # Errors
///
/// Returns [`EmptyShoeError`] if the shoe runs out part way through.
pub fn initial_deal(
    players: &mut [&mut Participant],
    dealer: &mut Dealer,
    shoe: &mut Shoe,
) -> Result<(), EmptyShoeError> {
    for player in players.iter_mut() {
        player.receive(shoe.draw_one()?);
    }

    dealer.receive(shoe.draw_one()?);

    for player in players.iter_mut() {
        player.receive(shoe.draw_one()?);
    }

    dealer.set_hole_card(shoe.draw_one()?);
    Ok(())
}

impl Table {
    /// Deals initial cards to every player who bet and to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the betting state, no bets
    /// have been placed, or the shoe runs out.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != TableState::Betting {
            return Err(DealError::InvalidState);
        }
        if self.betting_order.is_empty() {
            return Err(DealError::NoBets);
        }

        // Bets may arrive in any order; cards follow the seats.
        let order = &self.betting_order;
        let seated: Vec<_> = self
            .players
            .iter()
            .map(|p| p.id())
            .filter(|id| order.contains(id))
            .collect();
        self.betting_order = seated;

        self.dealer.reset();
        self.busted.clear();

        let order = &self.betting_order;
        let mut hands: Vec<&mut Participant> = self
            .players
            .iter_mut()
            .filter(|p| order.contains(&p.id()))
            .collect();
        initial_deal(&mut hands, &mut self.dealer, &mut self.shoe)?;

        tracing::info!(
            players = self.betting_order.len(),
            upcard = ?self.dealer.upcard(),
            dealer_partial = ?self.dealer.score(),
            "initial deal complete"
        );

        self.current_turn = 0;
        self.state = TableState::PlayerTurn;
        self.skip_finished_hands();

        Ok(())
    }
}
