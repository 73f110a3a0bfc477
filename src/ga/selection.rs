//! Roulette-wheel selection of breeding pairs.
//!
//! Selection determines which candidates are chosen as parents for
//! crossover. Acceptance probability scales with each candidate's share of
//! the total population fitness, giving classic fitness-proportionate
//! pressure; an avoidance bias lets callers steer breeding away from the
//! dominant individual to reduce premature convergence.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Candidate;
use crate::error::GaError;
use rand::Rng;

/// Upper bound on full population scans before a selection call gives up.
///
/// Expected cost is O(population) per pick, so a healthy population
/// completes within a handful of scans. The cap only binds when the
/// avoidance bias and the distinct-pick requirement leave fewer than two
/// eligible candidates, or when a single candidate holds nearly the entire
/// fitness mass.
const MAX_SELECTION_SCANS: usize = 1_000_000;

/// Selects two distinct candidates by roulette-wheel sampling.
///
/// Scans the population in order, accepting each candidate independently
/// with probability `fitness / total_fitness`. When the accepted candidate
/// is the current fittest (strictly highest fitness, first found on ties),
/// the acceptance is additionally rejected with probability `p_avoid`. The
/// first acceptance becomes the first pick; scanning continues, wrapping to
/// a fresh full scan at the end, until a second distinct candidate is
/// accepted. The same index is never returned twice.
///
/// Returns the indices of the two picks, in acceptance order.
///
/// # Errors
///
/// - [`GaError::PopulationTooSmall`] if the population has fewer than two
///   candidates.
/// - [`GaError::ZeroTotalFitness`] if the summed fitness is not positive
///   and finite — roulette pressure is undefined without it.
/// - [`GaError::SelectionStalled`] if the scan cap is exhausted before two
///   distinct candidates are accepted.
///
/// # Complexity
///
/// O(population) expected per pick.
pub fn select_pair<C: Candidate, R: Rng>(
    population: &[C],
    p_avoid: f64,
    rng: &mut R,
) -> Result<(usize, usize), GaError> {
    if population.len() < 2 {
        return Err(GaError::PopulationTooSmall(population.len()));
    }

    let fitnesses: Vec<f64> = population.iter().map(|c| c.fitness()).collect();
    let total: f64 = fitnesses.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(GaError::ZeroTotalFitness);
    }

    // Strictly highest fitness; ties keep the first found.
    let mut best = 0;
    for (i, &f) in fitnesses.iter().enumerate().skip(1) {
        if f > fitnesses[best] {
            best = i;
        }
    }

    let mut first: Option<usize> = None;
    for _ in 0..MAX_SELECTION_SCANS {
        for (i, &f) in fitnesses.iter().enumerate() {
            if rng.random::<f64>() > f / total {
                continue;
            }
            if i == best && rng.random::<f64>() < p_avoid {
                continue;
            }
            match first {
                None => first = Some(i),
                Some(j) if j != i => return Ok((j, i)),
                Some(_) => {}
            }
        }
    }

    Err(GaError::SelectionStalled {
        scans: MAX_SELECTION_SCANS,
    })
}
