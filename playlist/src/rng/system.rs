//! Entropy-backed default source

use rand::Rng;

/// Random source drawing from the thread-local `rand` generator
///
/// Not reproducible. Use [`super::RngManager`] when the sequence must be
/// replayable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }

    /// Uniform value in `[0, n)`
    ///
    /// # Panics
    /// Panics if `n <= 0`
    pub fn below(&mut self, n: i64) -> i64 {
        rand::thread_rng().gen_range(0..n)
    }
}
