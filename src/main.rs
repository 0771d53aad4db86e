//! Command line front end for the Letter Boxed solver.
//!
//! Reads a word list, asks for the letters on the board and prints solutions
//! one at a time, fewest words first.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::{debug, error, info};
#[macro_use]
extern crate text_io;

use letter_boxed::{Dictionary, GameConfig, Playability, Result, Solution, Strategy};

const EXAMPLE_BOARD: &str = "BTLEHYVCOIWJ";
/// Solutions printed in JSON mode when no limit is given
const DEFAULT_JSON_SOLUTIONS: usize = 10;

/// Finds word chains that use every letter of a Letter Boxed board.
#[derive(Debug, Parser)]
#[command(version)]
struct Opts {
    /// Word list with one word per line. Non-letters are stripped from each line.
    #[arg(short, long, default_value = "word_list.txt")]
    word_list: PathBuf,

    /// Board letters, read clockwise from the top left corner. Asked for when
    /// missing.
    #[arg(short, long)]
    letters: Option<String>,

    /// JSON file with game settings. Flags below take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Expansion strategy, "word" or "letter"
    #[arg(short, long)]
    strategy: Option<Strategy>,

    #[arg(short, long)]
    min_word_length: Option<usize>,

    /// Seed used to shuffle equally good branches
    #[arg(long)]
    seed: Option<u64>,

    /// Seed the shuffling from the OS for some variety between runs
    #[arg(long, conflicts_with = "seed")]
    random: bool,

    /// Keep words that only fit the board through a repeated letter's later edge
    #[arg(long)]
    exhaustive: bool,

    /// Stop after this many solutions instead of asking after each one
    #[arg(short = 'n', long)]
    max_solutions: Option<usize>,

    /// Print each solution as a line of JSON
    #[arg(long)]
    json: bool,
}

fn load_config(opts: &Opts) -> Result<GameConfig> {
    let mut config = match &opts.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(strategy) = opts.strategy {
        config.strategy = strategy;
    }
    if let Some(min_word_length) = opts.min_word_length {
        config.min_word_length = min_word_length;
    }
    if let Some(seed) = opts.seed {
        config.seed = Some(seed);
    }
    if opts.random {
        config.seed = None;
    }
    if opts.exhaustive {
        config.playability = Playability::Exhaustive;
    }
    Ok(config)
}

fn prompt_letters() -> Result<String> {
    print!(
        "List all the letters, clockwise from the top left corner (for example, {}): ",
        EXAMPLE_BOARD
    );
    io::stdout().flush()?;
    let line: String = try_read!("{}\n").unwrap_or_default();
    let line = line.trim();
    if line.is_empty() {
        Ok(EXAMPLE_BOARD.to_string())
    } else {
        Ok(line.to_string())
    }
}

/// Returns false once stdin is closed
fn wait_for_enter() -> Result<bool> {
    print!("Press Enter for another solution");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    Ok(read > 0)
}

fn print_solution(index: usize, solution: &Solution) {
    println!(
        "Solution #{} ({}-solve): {}",
        index,
        solution.num_words(),
        solution
    );
    println!("Stats:");
    println!("Num words: {}", solution.num_words());
    println!("Num letters: {}", solution.num_letters);
    println!("Num duplicated letters: {}", solution.num_duplicate_letters);
}

fn run(opts: Opts) -> Result<()> {
    let config = load_config(&opts)?;
    debug!("Game configuration: {:?}", config);

    let dictionary = Dictionary::open(&opts.word_list)?;
    info!(
        "Loaded {} words from {}",
        dictionary.len(),
        opts.word_list.display()
    );

    let letters = match &opts.letters {
        Some(letters) => letters.trim().to_string(),
        None => prompt_letters()?,
    };
    let game = config.build_game(dictionary, &letters)?;
    info!("Board: {}", game.board());

    let limit = if opts.json {
        Some(opts.max_solutions.unwrap_or(DEFAULT_JSON_SOLUTIONS))
    } else {
        opts.max_solutions
    };

    if !opts.json {
        println!("I'm thinking...");
    }
    let mut found = 0;
    for solution in game.solve_with_rng(config.strategy, config.rng()) {
        found += 1;
        if opts.json {
            println!("{}", serde_json::to_string(&solution)?);
        } else {
            print_solution(found, &solution);
        }

        match limit {
            Some(limit) if found >= limit => return Ok(()),
            Some(_) => {}
            None => {
                if !wait_for_enter()? {
                    return Ok(());
                }
                println!("I'm thinking...");
            }
        }
    }
    if !opts.json {
        println!("No more solutions.");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    debug!("Command line options: {:?}", opts);

    if let Err(e) = run(opts) {
        error!("{}", e);
        process::exit(1);
    }
}
