//! Genetic Algorithm engine.
//!
//! A generic GA built on a single trait-based abstraction. Users define
//! their search space by implementing [`Candidate`], which specifies how a
//! solution mutates, crosses over, and evaluates its own fitness.
//!
//! # Core Pieces
//!
//! - [`Candidate`]: A self-contained candidate solution — the engine never
//!   inspects the encoding, only fitness
//! - [`GaConfig`]: Operator rates, avoidance bias, termination cap, seed
//! - [`GaRunner`]: Executes the evolutionary loop (threshold or
//!   fixed-iteration mode)
//! - [`select_pair`]: Roulette-wheel selection of a distinct breeding pair
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::select_pair;
pub use types::Candidate;
