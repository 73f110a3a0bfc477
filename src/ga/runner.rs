//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat,
//! in one of two termination modes.

use super::config::GaConfig;
use super::selection::select_pair;
use super::types::Candidate;
use crate::error::GaError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a threshold-mode GA run.
#[derive(Debug, Clone)]
pub struct GaResult<C: Candidate> {
    /// The best candidate produced during the entire run.
    pub best: C,

    /// Fitness of `best`, recomputed from a cleared cache just before
    /// returning, so it is always a fresh measurement of the encoding.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// `false` when the run stopped at the `max_generations` cap instead of
    /// satisfying the termination predicate.
    pub converged: bool,

    /// Best-so-far fitness recorded after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// Two termination modes are exposed:
///
/// - **Threshold / predicate mode** ([`run`](GaRunner::run),
///   [`run_to_threshold`](GaRunner::run_to_threshold),
///   [`run_until`](GaRunner::run_until)): the population is replaced
///   wholesale each generation and the run ends when the best-so-far
///   candidate satisfies a predicate. Returns the single best candidate.
/// - **Fixed-iteration mode** ([`run_iterations`](GaRunner::run_iterations)):
///   each iteration breeds exactly one pair in place; the run ends after a
///   set number of iterations and returns the whole final population.
///
/// The whole run is one blocking, single-threaded call. There is no
/// cancellation hook; callers needing a wall-clock bound must run on their
/// own thread or use [`GaConfig::with_max_generations`].
///
/// # Usage
///
/// ```ignore
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(|rng| MyCandidate::generate(100, rng), &config)?;
/// println!("best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs threshold mode until the best candidate reaches exact-match
    /// fitness (`>= 1.0`).
    ///
    /// Exact-match fitness may be unreachable for non-trivial goals, in
    /// which case this loops until the `max_generations` cap (or forever
    /// without one); prefer [`run_to_threshold`](GaRunner::run_to_threshold)
    /// or [`run_iterations`](GaRunner::run_iterations) when reachability is
    /// not established.
    pub fn run<C, G>(generate: G, config: &GaConfig) -> Result<GaResult<C>, GaError>
    where
        C: Candidate,
        G: FnOnce(&mut StdRng) -> Vec<C>,
    {
        Self::run_to_threshold(generate, 1.0, config)
    }

    /// Runs threshold mode until the best candidate's fitness reaches
    /// `threshold`.
    pub fn run_to_threshold<C, G>(
        generate: G,
        threshold: f64,
        config: &GaConfig,
    ) -> Result<GaResult<C>, GaError>
    where
        C: Candidate,
        G: FnOnce(&mut StdRng) -> Vec<C>,
    {
        Self::run_until(generate, |best: &C| best.fitness() >= threshold, config)
    }

    /// Runs threshold mode with an arbitrary termination predicate over the
    /// best-so-far candidate.
    ///
    /// `generate` is invoked exactly once, at the start, with the runner's
    /// RNG; it is the sole source of initial candidates. The best candidate
    /// starts as the first generated one and is only ever replaced by a
    /// strictly fitter offspring. Each generation performs
    /// `population_len / 2` breeding rounds (select a pair, cross over,
    /// mutate both children) and replaces the population with the offspring;
    /// an odd-sized population therefore shrinks by one on the first
    /// generation.
    ///
    /// `done` is evaluated against the best-so-far once per generation
    /// (and once before the first), which also makes it a convenient
    /// progress-observation hook.
    ///
    /// # Errors
    ///
    /// [`GaError::InvalidConfig`] for a bad configuration,
    /// [`GaError::PopulationTooSmall`] if `generate` produces fewer than two
    /// candidates, and any selection error
    /// ([`GaError::ZeroTotalFitness`], [`GaError::SelectionStalled`]).
    pub fn run_until<C, G, P>(
        generate: G,
        mut done: P,
        config: &GaConfig,
    ) -> Result<GaResult<C>, GaError>
    where
        C: Candidate,
        G: FnOnce(&mut StdRng) -> Vec<C>,
        P: FnMut(&C) -> bool,
    {
        config.validate()?;
        let mut rng = seeded_rng(config);

        let mut population = generate(&mut rng);
        if population.len() < 2 {
            return Err(GaError::PopulationTooSmall(population.len()));
        }

        let mut best = population[0].clone();
        let mut fitness_history = Vec::new();
        let mut generations = 0usize;
        let mut converged = true;

        while !done(&best) {
            if let Some(limit) = config.max_generations {
                if generations >= limit {
                    converged = false;
                    break;
                }
            }

            // Warm every fitness cache up front so the selection scans over
            // this generation hit precomputed values.
            for candidate in &population {
                let _ = candidate.fitness();
            }

            let rounds = population.len() / 2;
            let mut next_gen = Vec::with_capacity(rounds * 2);
            for _ in 0..rounds {
                let (i, j) = select_pair(&population, config.avoid_rate, &mut rng)?;
                let (mut child_1, mut child_2) =
                    population[i].crossover(&population[j], config.crossover_rate, &mut rng);
                child_1.mutate(config.mutation_rate, &mut rng);
                child_2.mutate(config.mutation_rate, &mut rng);
                if child_1.fitness() > best.fitness() {
                    best = child_1.clone();
                }
                if child_2.fitness() > best.fitness() {
                    best = child_2.clone();
                }
                next_gen.push(child_1);
                next_gen.push(child_2);
            }

            population = next_gen;
            generations += 1;
            fitness_history.push(best.fitness());
        }

        // Fresh measurement: the caller gets a fitness recomputed from the
        // encoding, never a stale cache.
        best.invalidate_fitness();
        let best_fitness = best.fitness();

        Ok(GaResult {
            best,
            best_fitness,
            generations,
            converged,
            fitness_history,
        })
    }

    /// Runs fixed-iteration mode and returns the final population.
    ///
    /// Each iteration selects one pair from the *current* population,
    /// crosses them over, mutates both children, and writes the children
    /// back into the two selected slots — the population keeps its original
    /// size because only two members are touched per iteration.
    ///
    /// With `iterations = 0` the generated population is returned unchanged
    /// and selection preconditions are never checked. The caller is
    /// responsible for scanning the result for the fittest member.
    pub fn run_iterations<C, G>(
        generate: G,
        iterations: usize,
        config: &GaConfig,
    ) -> Result<Vec<C>, GaError>
    where
        C: Candidate,
        G: FnOnce(&mut StdRng) -> Vec<C>,
    {
        config.validate()?;
        let mut rng = seeded_rng(config);

        let mut population = generate(&mut rng);
        for _ in 0..iterations {
            let (i, j) = select_pair(&population, config.avoid_rate, &mut rng)?;
            let (mut child_1, mut child_2) =
                population[i].crossover(&population[j], config.crossover_rate, &mut rng);
            child_1.mutate(config.mutation_rate, &mut rng);
            child_2.mutate(config.mutation_rate, &mut rng);
            population[i] = child_1;
            population[j] = child_2;
        }

        Ok(population)
    }
}

fn seeded_rng(config: &GaConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

// ============================================================================
// Tests
// ============================================================================
