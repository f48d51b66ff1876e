use std::io::{self, Write};
use std::str::FromStr;

use color_eyre::eyre::Result;
use cuatro::card::{Card, Color};
use cuatro::provider::{play_to_completion, DecisionProvider};
use cuatro::session::{Prompt, Session};

/// Decision provider backed by stdin/stdout. All rule enforcement stays in
/// the engine; this only renders prompts and reads choices.
struct ConsoleProvider;

impl DecisionProvider for ConsoleProvider {
    fn request_move(&mut self, prompt: &Prompt) -> Card {
        println!();
        println!("Top card: {}", prompt.top_card);
        println!("{}'s turn. Hand:", prompt.active_player);
        for (i, card) in prompt.hand.iter().enumerate() {
            println!("  {}. {}", i + 1, card);
        }

        loop {
            let input = read_line("Pick a card: ");
            match input.parse::<usize>() {
                Ok(number) if (1..=prompt.hand.len()).contains(&number) => {
                    return prompt.hand[number - 1];
                }
                _ => println!("Enter a number between 1 and {}.", prompt.hand.len()),
            }
        }
    }

    fn request_color(&mut self, _prompt: &Prompt) -> Color {
        loop {
            let input = read_line("Pick a color (Red, Green, Blue, Yellow): ");
            match Color::from_str(&input) {
                Ok(color) => return color,
                Err(_) => println!("Unknown color."),
            }
        }
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().expect("stdout is writable");

    let mut line = String::new();
    io::stdin().read_line(&mut line).expect("stdin is readable");
    line.trim().to_owned()
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_target(false).init();

    let count = loop {
        let input = read_line("Number of players (2-8): ");
        match input.parse::<usize>() {
            Ok(n) if (2..=8).contains(&n) => break n,
            _ => println!("Enter a number between 2 and 8."),
        }
    };

    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        let name = read_line(&format!("Name of player {}: ", names.len() + 1));
        if name.is_empty() {
            println!("Names must be non-empty.");
            continue;
        }
        names.push(name);
    }

    let mut session = Session::new(names)?;
    let winner = play_to_completion(&mut session, &mut ConsoleProvider)?;

    println!();
    println!("{} won the game", winner);
    Ok(())
}
