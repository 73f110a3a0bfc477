//! Error taxonomy for the GA engine.
//!
//! All errors are precondition violations or exhaustion guards; nothing is
//! retried internally. Every failure propagates to the caller of the
//! `run*` / `select_pair` entry points.

use thiserror::Error;

/// Failures raised by the GA engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The population generator produced fewer than two candidates, so no
    /// breeding pair can exist.
    #[error("population must contain at least 2 candidates, got {0}")]
    PopulationTooSmall(usize),

    /// The summed fitness of the population is zero, negative, or
    /// non-finite, leaving roulette-wheel selection with no pressure.
    #[error("total population fitness must be positive and finite")]
    ZeroTotalFitness,

    /// Selection scanned the population `scans` times without accepting two
    /// distinct candidates. Happens when avoidance plus the distinctness
    /// requirement leave fewer than two eligible candidates.
    #[error("selection failed to accept two distinct candidates after {scans} population scans")]
    SelectionStalled {
        /// Number of full population scans performed before giving up.
        scans: usize,
    },
}
