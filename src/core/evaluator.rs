//! Trial-division primality evaluation.

/// Returns the prime elements of `candidates`, preserving input order.
///
/// A value `v` counts as prime when `v != 0` and no divisor in `[2, v)`
/// divides it evenly. Under this rule 1 has no divisors to test and is
/// reported prime; the search preserves that historical behavior.
pub fn find_primes(candidates: &[u64]) -> Vec<u64> {
    candidates.iter().copied().filter(|&v| is_prime(v)).collect()
}

fn is_prime(value: u64) -> bool {
    if value == 0 {
        return false;
    }
    !(2..value).any(|div| value % div == 0)
}
