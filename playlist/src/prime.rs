//! Prime search
//!
//! The full-cycle generator works modulo the smallest prime above the
//! playlist size. A prime modulus makes every nonzero step coprime to it.

/// Trial division over the 6k±1 wheel
///
/// # Example
/// ```
/// use rand_playlist::prime::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(91)); // 7 * 13
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // i <= n / i rather than i * i <= n, which overflows near i64::MAX
    let mut i = 5i64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Smallest prime strictly greater than `n`
///
/// Any `n < 2` yields 2. Callers pass playlist sizes, far below the point
/// where the candidate could overflow.
///
/// # Example
/// ```
/// use rand_playlist::prime::next_prime_above;
///
/// assert_eq!(next_prime_above(10), 11);
/// assert_eq!(next_prime_above(11), 13);
/// ```
pub fn next_prime_above(n: i64) -> i64 {
    let mut candidate = n.max(1) + 1;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}
