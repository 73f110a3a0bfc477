//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;

/// Configuration for a GA run.
///
/// Controls the per-gene operator rates, the best-avoidance bias in
/// selection, the optional generation cap, and the random seed. The
/// termination *mode* (run-to-threshold vs. fixed iteration count) is
/// chosen by the [`GaRunner`](super::GaRunner) entry point, not stored
/// here — the generalized form of a threshold is an arbitrary predicate
/// closure, which has no place in a `Clone + Debug` parameter bundle.
///
/// # Defaults
///
/// ```
/// use genwheel::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.crossover_rate, 0.7);
/// assert_eq!(config.mutation_rate, 0.04);
/// assert_eq!(config.avoid_rate, 0.6);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use genwheel::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_crossover_rate(0.6)
///     .with_mutation_rate(0.02)
///     .with_avoid_rate(0.0)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Per-gene probability of swapping alleles between two parents during
    /// crossover (`0.0`–`1.0`).
    pub crossover_rate: f64,

    /// Per-gene probability of replacing an allele with a fresh random draw
    /// during mutation (`0.0`–`1.0`).
    pub mutation_rate: f64,

    /// Probability of skipping the current fittest candidate when it is
    /// accepted during selection (`0.0`–`1.0`).
    ///
    /// A nonzero value diversifies breeding away from a dominant
    /// individual. `0.0` disables avoidance; `1.0` excludes the best
    /// candidate from breeding entirely.
    pub avoid_rate: f64,

    /// Safety cap on generations in threshold mode.
    ///
    /// `None` (the default) runs until the termination predicate is
    /// satisfied, which never happens if the threshold is unreachable for
    /// the goal. `Some(n)` stops after `n` generations and reports
    /// `converged = false` on the result.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from entropy; `Some` gives a deterministic run.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.7,
            mutation_rate: 0.04,
            avoid_rate: 0.6,
            max_generations: None,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the per-gene crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the best-avoidance rate, clamped to `[0, 1]`.
    pub fn with_avoid_rate(mut self, rate: f64) -> Self {
        self.avoid_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Caps threshold-mode runs at `limit` generations.
    pub fn with_max_generations(mut self, limit: usize) -> Self {
        self.max_generations = Some(limit);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The builders clamp rates, but the fields are public, so a directly
    /// constructed config is re-checked here by the runner.
    pub fn validate(&self) -> Result<(), GaError> {
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("avoid_rate", self.avoid_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GaError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {rate}"
                )));
            }
        }
        if self.max_generations == Some(0) {
            return Err(GaError::InvalidConfig(
                "max_generations must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
