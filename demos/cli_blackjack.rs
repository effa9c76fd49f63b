//! CLI blackjack example.

use std::io::{self, Write};

use bjtable::{
    ActionError, BetError, Card, Controller, Dealer, Outcome, Participant, RoundResult, Table,
    TableOptions,
};
use tracing_subscriber::EnvFilter;

struct Console {
    quit: bool,
}

impl Controller for Console {
    fn bet(&mut self, player: &Participant) -> Option<usize> {
        let money = player.money();
        let amount = prompt_usize(&format!(
            "{}, place a bet (1-{money}, 0 to quit): ",
            player.name()
        ));
        match amount {
            None | Some(0) => {
                self.quit = true;
                None
            }
            Some(value) => Some(value),
        }
    }

    fn action(&mut self, player: &Participant, dealer: &Dealer) -> String {
        print_table(player, dealer);
        println!("Actions: 1.Hit 2.Stand 3.Double Down 4.Split");
        prompt_line("Action: ")
    }

    fn bet_rejected(&mut self, _player: &Participant, error: BetError) {
        println!("Bet rejected: {error}");
    }

    fn action_rejected(&mut self, _player: &Participant, error: ActionError) {
        println!("Action rejected: {error}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Blackjack CLI example");

    let mut table = Table::new(TableOptions::default());
    let Ok(player_id) = table.seat_player("Player", 1000) else {
        return;
    };

    let mut console = Console { quit: false };

    loop {
        let money = table.player(player_id).map_or(0, Participant::money);
        if money == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        match table.run_round(&mut console) {
            Ok(result) => print_result(&result, player_id),
            Err(err) => {
                if console.quit {
                    println!("Goodbye.");
                    break;
                }
                println!("Round error: {err}");
                table.clear_round();
            }
        }

        if console.quit {
            println!("Goodbye.");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(player: &Participant, dealer: &Dealer) {
    let hidden = if dealer.hole_card().is_some() { " ??" } else { "" };
    println!(
        "\nDealer: {}{hidden} (showing {})",
        format_cards(dealer.cards()),
        dealer.score().unwrap_or(0)
    );
    println!(
        "{}: {} | score {} | bet {} | balance {}\n",
        player.name(),
        format_cards(player.cards()),
        player.score().unwrap_or(0),
        player.bet(),
        player.money()
    );
}

fn print_result(result: &RoundResult, player_id: u8) {
    println!(
        "\nDealer: {} (value {})",
        format_cards(&result.dealer_cards),
        result.dealer_score
    );

    let Some(outcome) = result.player(player_id) else {
        return;
    };
    let banner = match outcome.outcome {
        Outcome::Won => "You win",
        Outcome::Lost => "You lose",
        Outcome::Pushed => "Push",
        Outcome::Busted => "Bust",
    };
    println!(
        "You: {} (value {}) - {banner}, net {}, balance {}",
        format_cards(&outcome.cards),
        outcome.score,
        outcome.net,
        outcome.money
    );
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
