//! Generic genetic-algorithm engine with roulette-wheel selection.
//!
//! The engine evolves a population of candidate solutions toward a target
//! fitness via fitness-proportionate selection, per-gene crossover, and
//! per-gene mutation. Users define their search space by implementing
//! [`Candidate`](ga::Candidate); the engine is agnostic to the encoding.
//!
//! # Core Types
//!
//! - [`ga::Candidate`]: The evolvable-candidate contract — mutation,
//!   crossover, and lazy fitness evaluation.
//! - [`ga::GaConfig`]: Run parameters (operator rates, avoidance bias, seed).
//! - [`ga::GaRunner`]: Executes the evolutionary loop in either
//!   run-to-threshold or fixed-iteration mode.
//! - [`GaError`]: Precondition and exhaustion failures.
//!
//! # Demo Problem
//!
//! The [`password`] module implements a character-sequence candidate that
//! searches for a preimage of a toy string hash ([`hash::simple_hash`]).
//! It doubles as a worked example of the [`Candidate`](ga::Candidate)
//! contract and backs the `genwheel` command-line demo.
//!
//! # Caveats
//!
//! The engine is a best-effort heuristic search: there is no convergence
//! proof, and run-to-threshold mode does not terminate if the threshold is
//! unreachable for the given goal. Callers who cannot establish
//! reachability should bound the run with
//! [`GaConfig::with_max_generations`](ga::GaConfig::with_max_generations)
//! or use fixed-iteration mode.

pub mod error;
pub mod ga;
pub mod hash;
pub mod password;

pub use error::GaError;
