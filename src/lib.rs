//! A blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! betting, the fixed initial deal, player turns, the dealer's forced hits
//! and settlement. It performs no I/O; a presentation layer feeds it bets and
//! action tokens and renders the records it exposes.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default());
//! let player = table.seat_player("Player", 1000).unwrap();
//! table.start_betting();
//! table.place_bet(player, 100).unwrap();
//! table.deal().unwrap();
//! table.act(player, "stand").unwrap();
//! table.dealer_play().unwrap();
//! let result = table.settle().unwrap();
//! assert_eq!(result.players.len(), 1);
//! assert_eq!(result.players[0].player_id, player);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use action::{Action, Step, apply_action};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealError, EmptyShoeError, RoundError, SeatError};
pub use hand::{Evaluation, evaluate};
pub use options::TableOptions;
pub use participant::{Dealer, Participant, PlayerId};
pub use result::{Outcome, PlayerResult, RoundResult};
pub use shoe::{Shoe, ShoeVariant};
pub use table::{Controller, Table, TableState, initial_deal};
