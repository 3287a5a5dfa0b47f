//! Seeded xorshift64* source
//!
//! Reproducible shuffles: the same seed replays the same laps, which is what
//! the generator tests and `PlaylistConfig { seed: Some(..) }` rely on.
//!
//! xorshift64* keeps 64 bits of state and passes BigCrush. Not suitable for
//! anything security related.

/// Deterministic xorshift64* generator
///
/// # Example
/// ```
/// use rand_playlist::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let raw = rng.next();
/// let track = rng.range(0, 40); // [0, 40)
/// assert!((0..40).contains(&track));
/// # let _ = raw;
/// ```
#[derive(Debug, Clone)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a generator from `seed`
    ///
    /// # Arguments
    /// * `seed` - Any value; equal seeds give equal streams
    ///
    /// A zero seed is a fixed point of xorshift and is replaced by 1.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Advance the state and return the next raw 64-bit output
    pub fn next(&mut self) -> u64 {
        // xorshift64*: three shifts, then a multiplicative scramble
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Value in `[min, max)`
    ///
    /// Plain modulo reduction; the bias is negligible for playlist-sized
    /// ranges.
    ///
    /// # Panics
    /// Panics if `min >= max`
    ///
    /// # Example
    /// ```
    /// use rand_playlist::RngManager;
    ///
    /// let mut rng = RngManager::new(9);
    /// assert_eq!(rng.range(5, 6), 5);
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let span = max.wrapping_sub(min) as u64;
        min.wrapping_add((self.next() % span) as i64)
    }

    /// Current internal state
    ///
    /// `RngManager::new(rng.get_state())` continues the exact same stream.
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
