//! Headless memory game: deals a deck and lets an autoplayer clear it.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use memory_match::autoplay::{Autoplayer, PerfectMemory, PlayOutcome, RandomPolicy};
use memory_match::core::GameConfig;
use memory_match::logging;
use memory_match::session::{GameSession, SessionSnapshot};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Remembers every card it has seen
    Perfect,
    /// Turns random cards
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "memory-match", version, about = "Play a memory card game headlessly")]
struct Cli {
    /// Number of pairs to deal
    #[arg(short, long, default_value_t = 6)]
    pairs: usize,

    /// Seed for the deck shuffle
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// TOML config file (pair counts, symbols, timing)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Card-choosing policy
    #[arg(long, value_enum, default_value_t = Policy::Perfect)]
    policy: Policy,

    /// Print the final snapshot and outcome as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn render(snapshot: &SessionSnapshot, pairs: usize) -> String {
    let width = match pairs {
        0..=3 => 3,
        4..=6 => 4,
        _ => 5,
    };
    let mut out = String::new();
    for row in snapshot.cards.chunks(width) {
        let line: Vec<&str> = row
            .iter()
            .map(|card| if card.face_up { card.glyph.as_str() } else { "▒▒" })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json(cli.verbose);
    } else {
        logging::init(cli.verbose);
    }

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    tracing::debug!(?config, "loaded configuration");

    let mut session = GameSession::new(config, cli.seed)?;
    session.configure(cli.pairs)?;

    let outcome: PlayOutcome = match cli.policy {
        Policy::Perfect => Autoplayer::new(PerfectMemory::new()).play(&mut session),
        Policy::Random => {
            let policy = RandomPolicy::from_rng(session.fork_rng());
            Autoplayer::new(policy).play(&mut session)
        }
    };
    let snapshot = session.snapshot();

    if cli.json {
        let report = serde_json::json!({
            "seed": cli.seed,
            "outcome": outcome,
            "snapshot": snapshot,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&snapshot, cli.pairs));
        if outcome.won {
            println!(
                "Cleared {} pairs in {}s ({} turns, {} mismatches)",
                cli.pairs, outcome.elapsed_seconds, outcome.turns, outcome.mismatches
            );
        } else {
            println!("Gave up after {} turns", outcome.turns);
        }
    }

    Ok(())
}
