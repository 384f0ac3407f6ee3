//! Example demonstrating digit-sequence generation.
//!
//! This example shows how to:
//! - Generate a sequence from a random, fixed, or phrase-derived seed
//! - Replay a sequence from its printed seed
//! - Map digits to caller-side trading signals with a threshold rule
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_sequence
//! ```
//!
//! Replay a previous run:
//!
//! ```sh
//! cargo run --example generate_sequence -- --seed <64 hex digits>
//! ```
//!
//! Derive the seed from a phrase:
//!
//! ```sh
//! cargo run --example generate_sequence -- --phrase "friday close"
//! ```
//!
//! Sample several sequences at once (random seeds, generated in parallel):
//!
//! ```sh
//! cargo run --example generate_sequence -- --count 8
//! ```
//!
//! Show the buy/sell/hold mapping a decision driver might apply:
//!
//! ```sh
//! cargo run --example generate_sequence -- --signals
//! ```

use std::{process, str::FromStr as _};

use cascade_generator::{GeneratedSequence, SequenceGenerator, SequenceSeed};
use clap::Parser;
use rayon::prelude::*;

/// Digits below the midpoint read as buys, above as sells, at it as holds.
/// The mapping belongs to the consumer of the stream; this one is only an
/// illustration.
const MIDPOINT: u8 = 5;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex digits.
    #[arg(long, value_name = "SEED", conflicts_with_all = ["phrase", "count"])]
    seed: Option<String>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "PHRASE", conflicts_with = "count")]
    phrase: Option<String>,

    /// Number of sequences to generate from random seeds.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Print the threshold signal for each digit.
    #[arg(long)]
    signals: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let seed = match &args.seed {
        Some(hex) => match SequenceSeed::from_str(hex) {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => args.phrase.as_deref().map(SequenceSeed::from_phrase),
    };

    let generator = SequenceGenerator::new();
    let generated: Vec<_> = match seed {
        Some(seed) => vec![generator.generate_with_seed(seed)],
        None => (0..args.count)
            .into_par_iter()
            .map(|_| generator.generate())
            .collect(),
    };

    for (i, sequence) in generated.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_sequence(sequence, args.signals);
    }
}

fn print_sequence(generated: &GeneratedSequence, signals: bool) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Sequence:");
    println!("  {}", generated.sequence);

    if signals {
        let line: String = generated.sequence.iter().map(signal).collect();
        println!();
        println!("Signals (b=buy, s=sell, h=hold, midpoint {MIDPOINT}):");
        println!("  {line}");
    }
}

fn signal(value: u8) -> char {
    match value.cmp(&MIDPOINT) {
        std::cmp::Ordering::Less => 'b',
        std::cmp::Ordering::Greater => 's',
        std::cmp::Ordering::Equal => 'h',
    }
}
