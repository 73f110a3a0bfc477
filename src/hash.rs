//! Toy string hash used by the password demo.

/// Hashes a string by rolling polynomial accumulation.
///
/// Each character folds into the accumulator as `acc = acc * 127 + code`,
/// wrapping on overflow. Deterministic, goal-comparable, and **not**
/// cryptographically meaningful — it exists so the demo candidates have a
/// cheap integer score to chase, nothing more.
///
/// ```
/// use genwheel::hash::simple_hash;
///
/// assert_eq!(simple_hash(""), 0);
/// assert_eq!(simple_hash("a"), 97);
/// assert_eq!(simple_hash("ab"), 97 * 127 + 98);
/// ```
pub fn simple_hash(s: &str) -> i64 {
    let mut acc: i64 = 0;
    for c in s.chars() {
        acc = acc.wrapping_mul(127).wrapping_add(c as i64);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(simple_hash(""), 0);
        assert_eq!(simple_hash("a"), 97);
        assert_eq!(simple_hash("ab"), 12417);
        assert_eq!(simple_hash("abcd"), 200_286_466);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(simple_hash("ants"), simple_hash("ants"));
    }

    #[test]
    fn test_positional() {
        // Order matters: this is not a bag-of-characters checksum.
        assert_ne!(simple_hash("ab"), simple_hash("ba"));
    }

    #[test]
    fn test_long_input_wraps_instead_of_panicking() {
        let long: String = std::iter::repeat('z').take(64).collect();
        let _ = simple_hash(&long);
    }
}
