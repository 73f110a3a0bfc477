//! Password-recovery demo candidate.
//!
//! [`Password`] is a character-sequence implementation of the
//! [`Candidate`] contract: the genes are characters, the goal is a target
//! hash value, and fitness falls off with the absolute distance between the
//! candidate's hash and the goal. The module also carries the two driver
//! helpers behind the `genwheel` binary: [`guess_password`] (run until an
//! exact preimage is found) and [`crack_password`] (bounded iteration
//! count, best-effort result).

use crate::error::GaError;
use crate::ga::{Candidate, GaConfig, GaRunner};
use rand::Rng;
use std::cell::Cell;
use std::fmt;

/// Legal gene alphabet for password candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alphabet {
    /// ASCII lowercase letters `a..=z`.
    Lowercase,
    /// Digits, uppercase, and lowercase letters, each class drawn with
    /// probability one third.
    Mixed,
}

impl Alphabet {
    /// Draws one random character from this alphabet.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        match self {
            Alphabet::Lowercase => rng.random_range(b'a'..=b'z') as char,
            Alphabet::Mixed => {
                let class = rng.random::<f64>();
                if class < 1.0 / 3.0 {
                    rng.random_range(b'0'..=b'9') as char
                } else if class < 2.0 / 3.0 {
                    rng.random_range(b'A'..=b'Z') as char
                } else {
                    rng.random_range(b'a'..=b'z') as char
                }
            }
        }
    }

    /// Whether `c` belongs to this alphabet.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Alphabet::Lowercase => c.is_ascii_lowercase(),
            Alphabet::Mixed => c.is_ascii_alphanumeric(),
        }
    }
}

/// A candidate preimage for a target hash.
///
/// Fitness is `1.0` when the candidate's hash equals the goal, `0.9999` at
/// an absolute distance of one (a near-miss that must still lose to an
/// exact match), and `1 / distance` otherwise — inversely related to the
/// hash distance so roulette pressure concentrates on close candidates.
/// The value is cached lazily and dropped whenever the genes change.
#[derive(Debug, Clone)]
pub struct Password {
    genes: Vec<char>,
    goal_hash: i64,
    alphabet: Alphabet,
    hasher: fn(&str) -> i64,
    cached: Cell<Option<f64>>,
}

impl Password {
    /// Builds a candidate from an explicit gene sequence.
    pub fn new(
        genes: Vec<char>,
        goal_hash: i64,
        alphabet: Alphabet,
        hasher: fn(&str) -> i64,
    ) -> Self {
        Self {
            genes,
            goal_hash,
            alphabet,
            hasher,
            cached: Cell::new(None),
        }
    }

    /// Generates a population of `count` random candidates of `length`
    /// characters each.
    pub fn generate<R: Rng>(
        count: usize,
        length: usize,
        goal_hash: i64,
        alphabet: Alphabet,
        hasher: fn(&str) -> i64,
        rng: &mut R,
    ) -> Vec<Self> {
        (0..count)
            .map(|_| {
                let genes = (0..length).map(|_| alphabet.sample(rng)).collect();
                Self::new(genes, goal_hash, alphabet, hasher)
            })
            .collect()
    }

    /// The gene sequence as characters.
    pub fn genes(&self) -> &[char] {
        &self.genes
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.genes {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Candidate for Password {
    fn mutate<R: Rng>(&mut self, p_m: f64, rng: &mut R) {
        let alphabet = self.alphabet;
        let mut changed = false;
        for gene in &mut self.genes {
            if rng.random::<f64>() < p_m {
                *gene = alphabet.sample(rng);
                changed = true;
            }
        }
        if changed {
            self.cached.set(None);
        }
    }

    fn crossover<R: Rng>(&self, other: &Self, p_c: f64, rng: &mut R) -> (Self, Self) {
        let mut child_1 = self.clone();
        let mut child_2 = other.clone();
        let overlap = child_1.genes.len().min(child_2.genes.len());
        for i in 0..overlap {
            if rng.random::<f64>() < p_c {
                std::mem::swap(&mut child_1.genes[i], &mut child_2.genes[i]);
            }
        }
        child_1.cached.set(None);
        child_2.cached.set(None);
        (child_1, child_2)
    }

    fn fitness(&self) -> f64 {
        if let Some(f) = self.cached.get() {
            return f;
        }
        let text = self.to_string();
        // i128 keeps the subtraction exact even for wrapped hash values.
        let diff = ((self.hasher)(&text) as i128 - self.goal_hash as i128).unsigned_abs();
        let f = match diff {
            0 => 1.0,
            1 => 0.9999,
            d => 1.0 / d as f64,
        };
        self.cached.set(Some(f));
        f
    }

    fn invalidate_fitness(&mut self) {
        self.cached.set(None);
    }
}

/// Searches for an exact preimage of `goal_hash` via threshold mode.
///
/// Runs until a candidate hashes exactly to the goal. If the goal has no
/// `length`-character preimage in `alphabet`, this only returns when
/// `config.max_generations` is set; the result is then the best miss found.
pub fn guess_password(
    goal_hash: i64,
    length: usize,
    population_size: usize,
    alphabet: Alphabet,
    hasher: fn(&str) -> i64,
    config: &GaConfig,
) -> Result<String, GaError> {
    let result = GaRunner::run(
        |rng| Password::generate(population_size, length, goal_hash, alphabet, hasher, rng),
        config,
    )?;
    Ok(result.best.to_string())
}

/// Best-effort preimage search with a bounded iteration count.
///
/// Runs fixed-iteration mode and returns the fittest member of the final
/// population, which may or may not hash exactly to the goal.
pub fn crack_password(
    goal_hash: i64,
    iterations: usize,
    length: usize,
    population_size: usize,
    alphabet: Alphabet,
    hasher: fn(&str) -> i64,
    config: &GaConfig,
) -> Result<String, GaError> {
    let population = GaRunner::run_iterations(
        |rng| Password::generate(population_size, length, goal_hash, alphabet, hasher, rng),
        iterations,
        config,
    )?;
    let best = population
        .iter()
        .max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .ok_or(GaError::PopulationTooSmall(0))?;
    Ok(best.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::simple_hash;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lowercase_password(s: &str, goal_hash: i64) -> Password {
        Password::new(s.chars().collect(), goal_hash, Alphabet::Lowercase, simple_hash)
    }

    // ---- Fitness formula ----

    #[test]
    fn test_fitness_exact_match() {
        let p = lowercase_password("abcd", simple_hash("abcd"));
        assert_eq!(p.fitness(), 1.0);
    }

    #[test]
    fn test_fitness_near_miss() {
        let p = lowercase_password("abcd", simple_hash("abcd") + 1);
        assert_eq!(p.fitness(), 0.9999);
        let p = lowercase_password("abcd", simple_hash("abcd") - 1);
        assert_eq!(p.fitness(), 0.9999);
    }

    #[test]
    fn test_fitness_inverse_distance() {
        let p = lowercase_password("abcd", simple_hash("abcd") + 4);
        assert_eq!(p.fitness(), 0.25);
    }

    #[test]
    fn test_fitness_idempotent() {
        let p = lowercase_password("zzzz", simple_hash("abcd"));
        assert_eq!(p.fitness(), p.fitness());
    }

    #[test]
    fn test_fitness_monotone_in_distance() {
        let goal = simple_hash("abcd");
        let close = lowercase_password("abcd", goal + 10);
        let far = lowercase_password("abcd", goal + 1000);
        assert!(close.fitness() > far.fitness());
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let mut p = lowercase_password("aaaa", simple_hash("abcd"));
        let _ = p.fitness(); // populate the cache
        let mut rng = StdRng::seed_from_u64(42);
        p.mutate(1.0, &mut rng);

        // A clone with a force-cleared cache must agree with the mutated
        // candidate's next read.
        let mut fresh = p.clone();
        fresh.invalidate_fitness();
        assert_eq!(p.fitness(), fresh.fitness());
    }

    // ---- Mutation endpoints ----

    #[test]
    fn test_mutate_zero_rate_is_identity() {
        let mut p = lowercase_password("hello", 0);
        let before = p.genes().to_vec();
        let mut rng = StdRng::seed_from_u64(42);
        p.mutate(0.0, &mut rng);
        assert_eq!(p.genes(), &before[..]);
    }

    #[test]
    fn test_mutate_full_rate_redraws_every_gene() {
        // Start from genes outside the alphabet: any survivor would prove a
        // position was skipped.
        let mut p = Password::new(vec!['!'; 8], 0, Alphabet::Lowercase, simple_hash);
        let mut rng = StdRng::seed_from_u64(42);
        p.mutate(1.0, &mut rng);
        assert!(p.genes().iter().all(|&c| Alphabet::Lowercase.contains(c)));
    }

    // ---- Crossover endpoints (property-based) ----

    proptest! {
        #[test]
        fn crossover_zero_rate_preserves_parents(
            a in prop::collection::vec(proptest::char::range('a', 'z'), 1..16),
            b in prop::collection::vec(proptest::char::range('a', 'z'), 1..16),
            seed in any::<u64>(),
        ) {
            let p1 = Password::new(a.clone(), 0, Alphabet::Lowercase, simple_hash);
            let p2 = Password::new(b.clone(), 0, Alphabet::Lowercase, simple_hash);
            let mut rng = StdRng::seed_from_u64(seed);
            let (c1, c2) = p1.crossover(&p2, 0.0, &mut rng);
            prop_assert_eq!(c1.genes(), &a[..]);
            prop_assert_eq!(c2.genes(), &b[..]);
        }

        #[test]
        fn crossover_full_rate_swaps_overlap(
            a in prop::collection::vec(proptest::char::range('a', 'z'), 1..16),
            b in prop::collection::vec(proptest::char::range('a', 'z'), 1..16),
            seed in any::<u64>(),
        ) {
            let p1 = Password::new(a.clone(), 0, Alphabet::Lowercase, simple_hash);
            let p2 = Password::new(b.clone(), 0, Alphabet::Lowercase, simple_hash);
            let mut rng = StdRng::seed_from_u64(seed);
            let (c1, c2) = p1.crossover(&p2, 1.0, &mut rng);

            let overlap = a.len().min(b.len());
            // Swapped prefix, untouched tail beyond the shorter parent.
            prop_assert_eq!(&c1.genes()[..overlap], &b[..overlap]);
            prop_assert_eq!(&c1.genes()[overlap..], &a[overlap..]);
            prop_assert_eq!(&c2.genes()[..overlap], &a[..overlap]);
            prop_assert_eq!(&c2.genes()[overlap..], &b[overlap..]);
        }

        #[test]
        fn crossover_preserves_lengths(
            a in prop::collection::vec(proptest::char::range('a', 'z'), 1..16),
            b in prop::collection::vec(proptest::char::range('a', 'z'), 1..16),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let p1 = Password::new(a.clone(), 0, Alphabet::Lowercase, simple_hash);
            let p2 = Password::new(b.clone(), 0, Alphabet::Lowercase, simple_hash);
            let mut rng = StdRng::seed_from_u64(seed);
            let (c1, c2) = p1.crossover(&p2, rate, &mut rng);
            prop_assert_eq!(c1.genes().len(), a.len());
            prop_assert_eq!(c2.genes().len(), b.len());
        }
    }

    // ---- Alphabets ----

    #[test]
    fn test_lowercase_samples_stay_lowercase() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let c = Alphabet::Lowercase.sample(&mut rng);
            assert!(c.is_ascii_lowercase(), "unexpected sample {c:?}");
        }
    }

    #[test]
    fn test_mixed_samples_cover_all_classes() {
        let mut rng = StdRng::seed_from_u64(42);
        let (mut digits, mut upper, mut lower) = (0, 0, 0);
        for _ in 0..600 {
            let c = Alphabet::Mixed.sample(&mut rng);
            match c {
                '0'..='9' => digits += 1,
                'A'..='Z' => upper += 1,
                'a'..='z' => lower += 1,
                other => panic!("unexpected sample {other:?}"),
            }
        }
        assert!(digits > 0 && upper > 0 && lower > 0);
    }

    // ---- Generation and display ----

    #[test]
    fn test_generate_population_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Password::generate(50, 6, 0, Alphabet::Lowercase, simple_hash, &mut rng);
        assert_eq!(pop.len(), 50);
        for p in &pop {
            assert_eq!(p.genes().len(), 6);
            assert!(p.genes().iter().all(|&c| Alphabet::Lowercase.contains(c)));
        }
    }

    #[test]
    fn test_display_joins_genes() {
        let p = lowercase_password("ants", 0);
        assert_eq!(p.to_string(), "ants");
    }

    // ---- End-to-end scenarios ----

    #[test]
    fn test_recovers_four_char_lowercase_preimage() {
        let goal = simple_hash("abcd");
        let config = GaConfig::default()
            .with_max_generations(50_000)
            .with_seed(9);

        let guessed = guess_password(goal, 4, 300, Alphabet::Lowercase, simple_hash, &config)
            .unwrap();

        assert_eq!(simple_hash(&guessed), goal);
    }

    #[test]
    fn test_crack_password_best_effort() {
        let goal = simple_hash("cab");
        let config = GaConfig::default().with_avoid_rate(0.0).with_seed(42);

        let guessed =
            crack_password(goal, 200, 3, 50, Alphabet::Lowercase, simple_hash, &config).unwrap();

        assert_eq!(guessed.chars().count(), 3);
        assert!(guessed.chars().all(|c| Alphabet::Lowercase.contains(c)));
    }
}
