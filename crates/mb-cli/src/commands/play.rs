//! Interactive line-based play loop.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use mb_core::{Category, Reaction, Size, Temperament};
use mb_engine::{Guess, Session, SessionConfig, SessionEvent, StressTrack, Verdict};

/// Session settings taken from the command line.
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub budget: u32,
    pub max_stress: u32,
    pub serpent_chance: f64,
}

const HELP: &str = "\
Commands:
  <action>, do <action>                  probe the box (e.g. `water`, `do shake`)
  actions                                list actions and their cost
  status                                 show action points and stress
  guess serpent                          guess that a serpent is inside
  guess burrower <size> <temperament>    e.g. `guess burrower big docile`
  help                                   show this help
  quit                                   walk away";

const GUESS_USAGE: &str = "usage: guess serpent | guess burrower <size> <temperament>";

/// One line of player input.
#[derive(Debug, PartialEq)]
enum Input {
    Act(String),
    Actions,
    Status,
    Guess(Guess),
    Help,
    Quit,
}

pub fn run(data: Option<&Path>, options: PlayOptions) -> Result<(), String> {
    let data = Arc::new(super::load_data(data)?);
    let seed = options.seed.unwrap_or_else(rand::random);
    let config = SessionConfig::default()
        .with_seed(seed)
        .with_budget(options.budget)
        .with_max_stress(options.max_stress)
        .with_serpent_probability(options.serpent_chance);

    let mut session = Session::start(data, config).map_err(|e| e.to_string())?;
    tracing::info!(seed, "seed chosen");

    println!("{}", "Something is moving inside the box.".bold());
    println!(
        "You have {} action points. Type 'help' for commands.",
        session.remaining_budget()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !session.is_terminal() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.map_err(|e| format!("cannot read input: {e}"))?;

        let input = match parse_input(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(msg) => {
                println!("{}", msg.yellow());
                continue;
            }
        };

        match input {
            Input::Help => println!("{HELP}"),
            Input::Status => println!("{}", status_line(&session)),
            Input::Actions => print_actions(&session),
            Input::Quit => break,
            Input::Act(name) => match session.execute_action(&name) {
                Ok(events) => {
                    for event in &events {
                        println!("{}", describe(event, session.max_stress()));
                    }
                }
                Err(e) if e.is_recoverable() => println!("{}", e.to_string().yellow()),
                Err(e) => return Err(e.to_string()),
            },
            Input::Guess(guess) => match session.submit_guess(&guess) {
                Ok(verdict) => println!("{}", verdict_line(&verdict)),
                Err(e) if e.is_recoverable() => println!("{}", e.to_string().yellow()),
                Err(e) => return Err(e.to_string()),
            },
        }
    }

    match session.revealed_creature() {
        Some(creature) => println!("It was: {creature}"),
        None => println!("You walk away from the box."),
    }

    Ok(())
}

/// Parse a line of input. Blank lines yield `None`.
fn parse_input(line: &str) -> Result<Option<Input>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = words.split_first() else {
        return Ok(None);
    };

    let input = match first.to_ascii_lowercase().as_str() {
        "actions" => Input::Actions,
        "status" => Input::Status,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        "guess" => Input::Guess(parse_guess(rest)?),
        "do" => {
            if rest.is_empty() {
                return Err("usage: do <action>".to_string());
            }
            Input::Act(rest.join(" "))
        }
        _ => Input::Act(words.join(" ")),
    };
    Ok(Some(input))
}

fn parse_guess(words: &[&str]) -> Result<Guess, String> {
    let Some((&category, traits)) = words.split_first() else {
        return Err(GUESS_USAGE.to_string());
    };

    match (Category::parse(category), traits) {
        (Some(Category::Serpent), []) => Ok(Guess::serpent()),
        (Some(Category::Burrower), [size, temperament]) => {
            let size = Size::parse(size)
                .ok_or_else(|| format!("unknown size '{size}' (expected small or big)"))?;
            let temperament = Temperament::parse(temperament).ok_or_else(|| {
                format!("unknown temperament '{temperament}' (expected docile, restless or aggressive)")
            })?;
            Ok(Guess::burrower(size, temperament))
        }
        _ => Err(GUESS_USAGE.to_string()),
    }
}

fn status_line(session: &Session) -> String {
    let stress = session.stress();
    format!(
        "Action points: {} | {stress} ({})",
        session.remaining_budget(),
        mood(stress)
    )
}

/// How close the creature is to fleeing.
fn mood(stress: &StressTrack) -> &'static str {
    match stress.fraction() {
        f if f < 0.5 => "calm",
        f if f < 0.8 => "uneasy",
        _ => "about to bolt",
    }
}

fn print_actions(session: &Session) {
    for action in session.data().catalog.actions() {
        if session.can_afford(action) {
            println!("  {action}");
        } else {
            println!("  {}", format!("{action} - not enough points").dimmed());
        }
    }
}

fn describe(event: &SessionEvent, max_stress: u32) -> String {
    match event {
        SessionEvent::BudgetChanged { remaining, spent } => {
            format!("  -{spent} AP ({remaining} left)")
        }
        SessionEvent::Reaction(reaction) => match reaction {
            Reaction::None => format!("  {}", "The box stays still.".dimmed()),
            Reaction::Small => format!("  {}", "The box gives a small shake.".yellow()),
            Reaction::Large => format!("  {}", "The box shakes violently!".yellow().bold()),
            Reaction::Attack => format!("  {}", "Something lunges out of the box!".red().bold()),
        },
        SessionEvent::StressChanged { total, delta } => {
            format!("  Stress +{delta} ({total}/{max_stress})")
        }
        SessionEvent::Feedback(text) => format!("  \"{}\"", text.italic()),
        SessionEvent::Terminal { verdict, .. } => verdict_line(verdict),
    }
}

fn verdict_line(verdict: &Verdict) -> String {
    if verdict.is_win() {
        verdict.message.green().bold().to_string()
    } else {
        verdict.message.red().bold().to_string()
    }
}
