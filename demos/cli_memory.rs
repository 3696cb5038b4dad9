//! CLI memory game example.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use memomatch::{Card, EngineOptions, ManualClock, MatchEngine, MatchEvent, PAIR_PRESETS};

const COLUMNS: usize = 3;

fn main() {
    println!("Memory game CLI example (type 'q' to quit)");
    println!("Pick a card by number, 'r' to reset, 's' to choose the size.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let clock = ManualClock::new();
    let engine = match MatchEngine::new(EngineOptions::default(), seed, &clock) {
        Ok(engine) => engine,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    let mut picks = 0usize;

    loop {
        print_grid(&engine.cards());

        if engine.is_solved() {
            println!("All pairs found in {picks} picks!");
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    reset(&engine, engine.pair_count());
                    picks = 0;
                    continue;
                }
                _ => break,
            }
        }

        let input = prompt_line("> ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "r" | "reset" => {
                reset(&engine, engine.pair_count());
                picks = 0;
                continue;
            }
            "s" | "size" => {
                if let Some(pairs) = prompt_size() {
                    reset(&engine, pairs);
                    picks = 0;
                }
                continue;
            }
            _ => {}
        }

        let Ok(position) = input.parse::<usize>() else {
            println!("Please enter a card number.");
            continue;
        };
        let Some(card) = position
            .checked_sub(1)
            .and_then(|index| engine.cards().get(index).cloned())
        else {
            println!("No card at {position}.");
            continue;
        };

        let transition = engine.select_card(card.id);
        match transition.event {
            MatchEvent::AwaitingSecondPick { .. } => picks += 1,
            MatchEvent::Matched { .. } => {
                picks += 1;
                println!("Match!");
            }
            MatchEvent::MismatchPendingFlip { .. } => {
                picks += 1;
                print_grid(&transition.cards);
                println!("No match.");
                let delay = engine.options().flip_back_delay;
                thread::sleep(delay);
                for ticket in clock.advance(delay) {
                    engine.flip_back(ticket);
                }
            }
            MatchEvent::FlippedBack { .. } => {}
            MatchEvent::Ignored if card.face_up || card.matched => {
                println!("That card is already showing.");
            }
            MatchEvent::Ignored => println!("Wait for the cards to turn back."),
        }
    }
}

fn reset(engine: &MatchEngine<&ManualClock>, pairs: usize) {
    if let Err(err) = engine.reset(pairs, engine.options().symbols.as_slice()) {
        println!("Reset error: {err}");
    }
}

fn prompt_size() -> Option<usize> {
    let options = PAIR_PRESETS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/");
    let input = prompt_line(&format!("Number of pairs ({options}): "));
    match input.parse::<usize>() {
        Ok(pairs) if PAIR_PRESETS.contains(&pairs) => Some(pairs),
        _ => {
            println!("Please choose one of {options}.");
            None
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

fn print_grid(cards: &[Card]) {
    println!();
    for (row, chunk) in cards.chunks(COLUMNS).enumerate() {
        let line = chunk
            .iter()
            .enumerate()
            .map(|(col, card)| format_card(row * COLUMNS + col + 1, card))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{line}");
    }
    println!();
}

fn format_card(position: usize, card: &Card) -> String {
    if card.matched {
        format!("{position:>2} {}", colorize(&card.content, "32"))
    } else if card.face_up {
        format!("{position:>2} {}", card.content)
    } else {
        format!("{position:>2} {}", colorize("??", "34"))
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
