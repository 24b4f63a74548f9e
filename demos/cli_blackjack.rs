//! CLI blackjack front end.
//!
//! Set `BJ_DECKS` and `BJ_SEED` to pick the shoe size and seed, and
//! `RUST_LOG=bjcore=debug` to watch the engine's events.

use std::env;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{Action, ActionReport, Card, Game, GameOptions, RoundState};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = env_number("BJ_SEED").unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let mut options = GameOptions::default();
    if let Some(decks) = env_number("BJ_DECKS") {
        options = options.with_decks(u8::try_from(decks).unwrap_or(u8::MAX));
    }

    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Invalid options: {err}");
            return;
        }
    };
    tracing::info!(seed, decks = options.decks, "starting table");

    loop {
        print_table(&game);
        println!("{}", format_actions(&game));

        let input = prompt_line("Action: ");
        let action = match input.as_str() {
            "d" | "deal" => Action::Deal,
            "h" | "hit" => Action::Hit,
            "s" | "stand" => Action::Stand,
            "n" | "next" => Action::NextRound,
            "q" | "quit" | "" => {
                println!("Goodbye. {}", game.scoreboard());
                return;
            }
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if !game.state().accepts(action) {
            println!("{} is not available right now.", action.label());
            continue;
        }

        if let ActionReport::Resolved(outcome) = game.handle_action(action) {
            print_table(&game);
            println!("*** {outcome} ***");
        }
    }
}

fn env_number(key: &str) -> Option<u64> {
    env::var(key).ok()?.trim().parse().ok()
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

fn print_table(game: &Game) {
    if game.state() == RoundState::Idle {
        println!("\n{}\n", game.scoreboard());
        return;
    }

    let dealer = game.dealer_hand();
    let mut dealer_view = format_cards(game.visible_dealer_cards());
    for _ in game.visible_dealer_cards().len()..dealer.len() {
        dealer_view.push_str(" ??");
    }
    match game.dealer_visible_score() {
        Some(score) => println!("\nDealer: {dealer_view} (score {score})"),
        None => println!("\nDealer: {dealer_view}"),
    }

    println!(
        "You:    {} (score {})",
        format_cards(game.player_hand().cards()),
        game.player_score()
    );
    println!(
        "Shoe: {} cards remaining | {}\n",
        game.cards_remaining(),
        game.scoreboard()
    );
}

fn format_actions(game: &Game) -> String {
    let parts: Vec<String> = game
        .available_actions()
        .iter()
        .map(|action| {
            let key = match action {
                Action::Deal => "d",
                Action::Hit => "h",
                Action::Stand => "s",
                Action::NextRound => "n",
            };
            colorize(&format!("[{key}]{}", action.label()), "32")
        })
        .collect();
    format!("Actions: {} [q]uit", parts.join(" "))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|card| match card {
            Card::Jack | Card::Queen | Card::King | Card::Ace => colorize(card.label(), "31"),
            _ => card.label().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
