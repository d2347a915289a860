//! Example that shuffles a board and prints it.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p slidle-shuffle --example shuffle_board
//! ```
//!
//! Pick a size and replay a specific seed:
//!
//! ```sh
//! cargo run -p slidle-shuffle --example shuffle_board -- --size 5 --seed 42
//! ```
//!
//! Lower the retry budget to observe the forced-unsolvable fallback:
//!
//! ```sh
//! cargo run -p slidle-shuffle --example shuffle_board -- --max-tries 1
//! ```

use std::{num::NonZero, process};

use clap::Parser;
use slidle_core::Board;
use slidle_shuffle::BoardShuffler;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size N (the board has N×N slots).
    #[arg(long, value_name = "N", default_value_t = 4)]
    size: usize,

    /// Seed to replay; a random seed is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Maximum shuffle attempts before accepting a possibly unsolvable board.
    #[arg(long, value_name = "COUNT", default_value_t = 30)]
    max_tries: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(max_tries) = NonZero::new(args.max_tries) else {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    };

    let shuffler = BoardShuffler::new(max_tries);
    let result = match args.seed {
        Some(seed) => shuffler.shuffle_with_seed(args.size, seed),
        None => shuffler.shuffle(args.size),
    };
    let shuffled = match result {
        Ok(shuffled) => shuffled,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", shuffled.seed);
    println!();
    println!("Board:");
    print_board(&shuffled.board);
    println!();
    println!("Attempts:");
    println!("  {}", shuffled.attempts);

    if shuffled.forced_unsolvable {
        println!();
        println!("Retry budget exhausted; this board may be unsolvable.");
    }
}

fn print_board(board: &Board) {
    // Tiles are displayed 1-based, the way the playing UI labels them.
    let width = board.slot_count().to_string().len();
    for row in 0..board.size() {
        print!(" ");
        for col in 0..board.size() {
            let tile = board.tile_at(row * board.size() + col);
            if tile == board.empty_tile() {
                print!(" {:>width$}", ".");
            } else {
                print!(" {:>width$}", tile + 1);
            }
        }
        println!();
    }
}
