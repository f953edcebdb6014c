//! Interactive console channel.

use crate::table::probability_table;
use fairdice_core::{
    Choice, DiceSet, Digest, GameEvent, HmacKey, InteractionChannel, Participant, RoundResult,
};
use std::io::{self, BufRead, Write};

/// Stdin/stdout channel: every prompt accepts `X` to exit and `?` for the
/// win-probability table, and re-prompts on anything else invalid.
pub struct ConsoleChannel<'a> {
    dice: &'a DiceSet,
    last_range: Option<u32>,
    last_choice: Option<u32>,
}

impl<'a> ConsoleChannel<'a> {
    pub fn new(dice: &'a DiceSet) -> Self {
        Self {
            dice,
            last_range: None,
            last_choice: None,
        }
    }

    /// Prompt until the player enters one of `valid`, `X`, or EOF
    fn prompt(&self, valid: &[u32]) -> Choice {
        loop {
            print!("Your selection: ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => return Choice::Quit,
                Ok(_) => {}
            }

            match line.trim() {
                "x" | "X" => return Choice::Quit,
                "?" => {
                    probability_table(self.dice).printstd();
                }
                input => match input.parse::<u32>() {
                    Ok(n) if valid.contains(&n) => return Choice::Picked(n),
                    _ => println!("Invalid selection, try again (X to exit, ? for help)."),
                },
            }
        }
    }
}

impl InteractionChannel for ConsoleChannel<'_> {
    fn notify_commitment(&mut self, digest: &Digest, range: u32) {
        println!(
            "I selected a random value in the range 0..{} (HMAC={}).",
            range - 1,
            digest
        );
        self.last_range = Some(range);
        self.last_choice = None;
    }

    fn request_protocol_choice(&mut self, range: u32) -> Choice {
        println!("Add your number modulo {}.", range);
        for n in 0..range {
            println!("{n} - {n}");
        }
        println!("X - exit");
        println!("? - help");

        let valid: Vec<u32> = (0..range).collect();
        let choice = self.prompt(&valid);
        if let Choice::Picked(n) = choice {
            self.last_choice = Some(n);
        }
        choice
    }

    fn reveal_secret(&mut self, secret: u32, key: &HmacKey) {
        println!("My number is {} (KEY={}).", secret, key);
        if let (Some(range), Some(choice)) = (self.last_range, self.last_choice) {
            println!(
                "The fair number generation result is {} + {} = {} (mod {}).",
                choice,
                secret,
                (choice as u64 + secret as u64) % range as u64,
                range
            );
        }
    }

    fn request_die_choice(&mut self, dice: &DiceSet, taken: Option<usize>) -> Choice {
        println!("Choose your dice:");
        let available = dice.available(taken);
        for &index in &available {
            println!("{} - {}", index, dice[index]);
        }
        println!("X - exit");
        println!("? - help");

        let valid: Vec<u32> = available.iter().map(|&i| i as u32).collect();
        self.prompt(&valid)
    }

    fn announce(&mut self, event: GameEvent) {
        match event {
            GameEvent::FirstPicker(Participant::Computer) => {
                println!("I choose my dice first.");
            }
            GameEvent::FirstPicker(Participant::Player) => {
                println!("You choose your dice first.");
            }
            GameEvent::DiePicked {
                by: Participant::Computer,
                index,
            } => {
                println!("I choose the [{}] dice.", self.dice[index]);
            }
            GameEvent::DiePicked {
                by: Participant::Player,
                index,
            } => {
                println!("You choose the [{}] dice.", self.dice[index]);
            }
            GameEvent::Rolled {
                by: Participant::Computer,
                face,
            } => {
                println!("My throw is {}.", face);
            }
            GameEvent::Rolled {
                by: Participant::Player,
                face,
            } => {
                println!("Your throw is {}.", face);
            }
            GameEvent::Finished(RoundResult::ComputerWins) => {
                println!("I win!");
            }
            GameEvent::Finished(RoundResult::PlayerWins) => {
                println!("You win!");
            }
            GameEvent::Finished(RoundResult::Tie) => {
                println!("It's a tie!");
            }
        }
    }
}
