use anyhow::{Context, Result};
use bananagrams_solver::{Config, Dictionary, LetterInventory, Solver};
use clap::Parser;
use std::convert::TryFrom;
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "build_crossword",
    about = "Build a Bananagrams crossword that uses every tile"
)]
struct Cli {
    /// Number of squares along one side of the board (odd)
    #[arg(long = "side-length", default_value_t = 33)]
    side_length: usize,
    /// Number of moves to look ahead
    #[arg(long, default_value_t = 1)]
    depth: usize,
    /// Word file with one word per line
    #[arg(long, value_name = "FILE", default_value = "wordlists/words.txt")]
    words: String,
    /// Tiles, e.g. "c a t s a" or "catsa". Read from stdin if none are given
    tiles: Vec<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::default()
        .with_side_length(cli.side_length)
        .with_search_depth(cli.depth);

    let t0 = Instant::now();
    #[cfg(feature = "bincode")]
    let dictionary = if cli.words.ends_with(".bin") {
        Dictionary::deserialize_from(&cli.words)?
    } else {
        Dictionary::from_file(&cli.words)?
    };
    #[cfg(not(feature = "bincode"))]
    let dictionary = Dictionary::from_file(&cli.words)?;
    eprintln!("Read {} in {:?}", dictionary, t0.elapsed());

    let mut tokens = cli.tiles;
    if tokens.is_empty() {
        eprint!("Enter all tiles, separated by spaces: ");
        io::stderr().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        tokens = line.split_whitespace().map(String::from).collect();
    }
    // accept both "c a t" and "cat"
    let tiles = tokens
        .iter()
        .flat_map(|token| token.chars().filter(|c| !c.is_whitespace()))
        .map(String::from)
        .collect::<Vec<String>>()
        .join(" ");
    let hand = LetterInventory::try_from(tiles.as_str()).context("Invalid tiles")?;
    eprintln!("Tiles: {}", hand);

    let solver = Solver::with_config(&dictionary, config)?;
    let t0 = Instant::now();
    let crossword = solver.build(hand)?;
    eprintln!("Build took {:?}", t0.elapsed());

    if crossword.is_complete() {
        println!("{}", crossword);
        for word in crossword.board().placed_words() {
            eprintln!("{}", word);
        }
    } else if crossword.board().is_empty() {
        println!("No word can be made from these tiles");
    } else {
        println!("{}", crossword);
        println!("Could not place: {}", crossword.remaining());
    }
    Ok(())
}
