//! Random sources for playlist generators
//!
//! Generators never touch global random state. Every draw goes through a
//! [`RandomSource`] handed over at construction, so a fixed source yields a
//! fixed sequence of indices.
//!
//! Stock sources:
//! - [`RngManager`]: seeded xorshift64*, fully reproducible
//! - [`SystemRandom`]: thread-local entropy, used by [`crate::new`]
//!
//! Any `FnMut(i64) -> i64` closure is a source as well.

mod system;
mod xorshift;

pub use system::SystemRandom;
pub use xorshift::RngManager;

/// Capability to draw a uniform integer in `[0, n)`
///
/// # Contract
///
/// `rand_n(n)` is only ever called with `n >= 2` and MUST return a value in
/// `[0, n)`. This is not checked: a source returning values outside the range
/// is a caller bug and the generator's output is then unspecified.
///
/// # Example
/// ```
/// use rand_playlist::RandomSource;
///
/// let mut always_zero = |_n: i64| 0;
/// assert_eq!(always_zero.rand_n(10), 0);
/// ```
pub trait RandomSource {
    /// Draw a value in `[0, n)`
    fn rand_n(&mut self, n: i64) -> i64;
}

impl<F> RandomSource for F
where
    F: FnMut(i64) -> i64,
{
    fn rand_n(&mut self, n: i64) -> i64 {
        self(n)
    }
}

impl RandomSource for RngManager {
    fn rand_n(&mut self, n: i64) -> i64 {
        self.range(0, n)
    }
}

impl RandomSource for SystemRandom {
    fn rand_n(&mut self, n: i64) -> i64 {
        self.below(n)
    }
}
