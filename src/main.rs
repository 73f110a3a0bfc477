//! genwheel: hash-preimage recovery demo for the GA engine.
//!
//! Hashes a plaintext with the toy rolling hash, then evolves a population
//! of candidate strings until one hashes back to the same value (or, with
//! `--iterations`, for a bounded number of breeding rounds). Prints the
//! target, the recovered string, and the relative hash error.
//!
//! Exact recovery assumes the target hash actually has a preimage of the
//! requested length in the chosen alphabet; when in doubt, bound the run
//! with `--iterations`.

use clap::Parser;
use genwheel::ga::GaConfig;
use genwheel::hash::simple_hash;
use genwheel::password::{crack_password, guess_password, Alphabet};
use genwheel::GaError;

#[derive(Parser)]
#[command(
    name = "genwheel",
    version,
    about = "Recover a preimage of a toy string hash with a genetic algorithm"
)]
struct Cli {
    /// Plaintext to hash and then recover (ignored when --hash is given).
    #[arg(default_value = "ants")]
    password: String,

    /// Recover a preimage for this hash value instead of hashing a plaintext.
    #[arg(long)]
    hash: Option<i64>,

    /// Candidate length when --hash is given.
    #[arg(long, default_value_t = 4)]
    length: usize,

    /// Stop after this many breeding iterations instead of running until an
    /// exact match is found.
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Number of candidates in the population.
    #[arg(short, long, default_value_t = 500)]
    population: usize,

    /// Draw candidate characters from digits, uppercase, and lowercase
    /// instead of lowercase only.
    #[arg(long)]
    mixed: bool,

    /// Seed for a deterministic run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), GaError> {
    let cli = Cli::parse();
    let alphabet = if cli.mixed {
        Alphabet::Mixed
    } else {
        Alphabet::Lowercase
    };

    let (goal, length) = match cli.hash {
        Some(h) => (h, cli.length),
        None => {
            println!("{} = {}", cli.password, simple_hash(&cli.password));
            println!("Password: {}", cli.password);
            (simple_hash(&cli.password), cli.password.chars().count())
        }
    };

    let mut config = GaConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let guessed = match cli.iterations {
        Some(n) => crack_password(goal, n, length, cli.population, alphabet, simple_hash, &config)?,
        None => guess_password(goal, length, cli.population, alphabet, simple_hash, &config)?,
    };

    let guessed_hash = simple_hash(&guessed);
    println!("Guessed Password: {guessed}");
    println!("{guessed} = {guessed_hash}");
    let error_pct =
        (guessed_hash as i128 - goal as i128).unsigned_abs() as f64 / (goal as f64).abs() * 100.0;
    println!("Error: {error_pct:.4}%");

    Ok(())
}
