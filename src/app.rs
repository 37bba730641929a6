//! Interactive application flow: greeting, setup, and the session loop.

use crate::console::{Console, Terminal};
use crate::game::Mark;
use crate::players::{HeuristicStrategy, HumanStrategy, MoveStrategy};
use crate::session::{Player, Session};
use anyhow::Result;
use std::time::Duration;
use tracing::{info, instrument};

/// Runs the interactive game: greet, collect a name, offer watch mode,
/// then play matches until the user declines another round.
#[instrument]
pub fn run(delay: Duration) -> Result<()> {
    let mut console = Terminal::new();
    console.banner()?;

    let name = prompt_name(&mut console)?;
    console.line(&format!("Welcome, {name}!"))?;

    let watching = prompt_watch_mode(&mut console)?;
    info!(player = %name, watching, "session configured");

    // In watch mode the player's seat is driven by the same heuristic as
    // the computer's.
    let seat: Box<dyn MoveStrategy> = if watching {
        Box::new(HeuristicStrategy::new(delay))
    } else {
        Box::new(HumanStrategy::new(name.clone()))
    };
    let player = Player::new(name, Mark::X, seat);
    let opponent = Player::new("Computer", Mark::O, Box::new(HeuristicStrategy::new(delay)));

    Session::new(player, opponent).play(&mut console)
}

fn prompt_name(console: &mut dyn Console) -> Result<String> {
    loop {
        let raw = console.read_line("Please tell me your name:")?;
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Ok(capitalize(trimmed));
        }
        console.line("I did not catch that.")?;
    }
}

fn prompt_watch_mode(console: &mut dyn Console) -> Result<bool> {
    let answer =
        console.read_line("Play yourself, or watch the computer play itself? (play/watch)")?;
    Ok(answer.trim().to_lowercase().starts_with('w'))
}

/// Uppercases the first letter, leaving the rest as typed.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
