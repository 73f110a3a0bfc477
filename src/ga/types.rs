//! Core trait definition for the GA engine.
//!
//! [`Candidate`] is the contract between the generic engine and
//! domain-specific solution representations.

use rand::Rng;

/// A candidate solution in the GA population.
///
/// The encoding is opaque to the engine: candidates are compared only by
/// fitness, never by structural equality. All state changes happen inside
/// the candidate itself — the engine calls the operators with the
/// configured rates and an RNG, nothing more.
///
/// # Fitness Contract
///
/// [`fitness`](Candidate::fitness) must be a deterministic pure function of
/// the current encoding, in `[0, 1]` where `1.0` is an exact match to the
/// goal, and must relate monotonically to some distance from the goal so
/// that selection pressure is meaningful. Repeated calls without an
/// intervening mutation must return the same value.
///
/// Implementations may cache the value lazily (e.g. in a
/// `Cell<Option<f64>>`); any cache must be dropped by
/// [`mutate`](Candidate::mutate), [`crossover`](Candidate::crossover), and
/// [`invalidate_fitness`](Candidate::invalidate_fitness).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct BitVector {
///     bits: Vec<bool>,
///     cached: Cell<Option<f64>>,
/// }
///
/// impl Candidate for BitVector {
///     fn mutate<R: Rng>(&mut self, p_m: f64, rng: &mut R) { /* redraw genes */ }
///     fn crossover<R: Rng>(&self, other: &Self, p_c: f64, rng: &mut R) -> (Self, Self) {
///         /* clone both, swap genes */
///     }
///     fn fitness(&self) -> f64 { /* compute or read cache */ }
///     fn invalidate_fitness(&mut self) { self.cached.set(None); }
/// }
/// ```
pub trait Candidate: Clone {
    /// Mutates the encoding in place.
    ///
    /// For each gene, independently with probability `p_m`, the allele is
    /// replaced with a freshly drawn random value from the legal alphabet
    /// for that position. `p_m = 0.0` must leave the encoding unchanged and
    /// `p_m = 1.0` must redraw every gene.
    fn mutate<R: Rng>(&mut self, p_m: f64, rng: &mut R);

    /// Produces two offspring by recombining with `other`.
    ///
    /// Copy-producing: both parents are left untouched. For each gene
    /// position up to the shorter of the two encodings, independently with
    /// probability `p_c`, the allele at that position is swapped between
    /// the two offspring. Positions beyond the shorter length are carried
    /// over unchanged — a length mismatch is policy, not an error.
    ///
    /// Crossover between structurally incompatible candidates is undefined;
    /// callers must keep populations homogeneous.
    fn crossover<R: Rng>(&self, other: &Self, p_c: f64, rng: &mut R) -> (Self, Self);

    /// Returns the fitness of the current encoding, in `[0, 1]`.
    fn fitness(&self) -> f64;

    /// Drops any cached fitness so the next [`fitness`](Candidate::fitness)
    /// call recomputes from the encoding.
    ///
    /// The runner calls this on the winning candidate before returning it,
    /// guaranteeing the reported fitness is a fresh measurement. The
    /// default is a no-op for implementations that do not cache.
    fn invalidate_fitness(&mut self) {}
}
