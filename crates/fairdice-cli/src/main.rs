//! Fairdice console game.
//!
//! Plays one round of the non-transitive dice game against the computer,
//! with every random decision backed by the commit-reveal fairness
//! protocol: the computer publishes an HMAC of its number before the
//! player answers, then reveals the number and key for verification.

mod console;
mod parse;
mod table;

use clap::Parser;
use console::ConsoleChannel;
use fairdice_core::{GameSession, SessionOutcome};
use parse::parse_dice;
use rand::rngs::OsRng;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Provably fair non-transitive dice game
#[derive(Parser)]
#[command(name = "fairdice", version, about)]
struct Args {
    /// Die definitions, each a comma-separated face list, e.g. 2,2,4,4,9,9
    #[arg(required = true, num_args = 1..)]
    dice: Vec<String>,
}

fn main() {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args = Args::parse();
    let dice = match parse_dice(&args.dice) {
        Ok(dice) => dice,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    // OsRng backs the commitments; thread_rng only drives the computer's
    // die pick.
    let session = GameSession::new(&dice, OsRng, rand::thread_rng());
    info!(game_id = %session.id(), dice = dice.len(), "starting session");

    let mut channel = ConsoleChannel::new(&dice);
    match session.play(&mut channel) {
        Ok(SessionOutcome::Resolved(result)) => {
            info!(result = %result, "session resolved");
        }
        Ok(SessionOutcome::Aborted) => {
            println!("Game aborted.");
        }
        Err(err) => {
            error!(error = %err, "session failed");
            std::process::exit(1);
        }
    }
}
