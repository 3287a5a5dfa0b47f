//! Full-cycle playlist for three or more entries
//!
//! # Algorithm
//!
//! Positions are residues modulo `prime`, the smallest prime above `size`.
//! Each step adds `skip` modulo `prime`. Since `prime` is prime and
//! `skip mod prime != 0`, the walk `cur, cur + skip, cur + 2*skip, ..` visits
//! all `prime` residues before coming back to `cur`. Residues `>= size` are
//! stepped over, so the valid indices `[0, size)` each come up exactly once
//! per period.
//!
//! # Laps
//!
//! A lap owes `size` outputs. When it is used up the playlist reseeds: it
//! draws a new `skip`, keeps `cur`, and immediately takes one step from the
//! old `cur` that is not counted against the new lap. The first index of the
//! new lap is therefore reached from the last index of the old lap by at
//! least one and fewer than `prime` steps, and cannot equal it.
//!
//! ```text
//! lap n:   .. x      (cur = x, remaining = 0)
//! reseed:  skip'     (cur stays x)
//! step:    x -> y    (uncounted)
//! lap n+1: z ..      (first output, z != x)
//! ```
//!
//! Both `y` and `z` lie within one period of `x` under the new step, so the
//! walk cannot have returned to `x` yet.

use super::Playlist;
use crate::prime::next_prime_above;
use crate::rng::RandomSource;
use tracing::trace;

/// Shuffled playlist over `[0, size)`, `size >= 3`
///
/// # Example
/// ```
/// use rand_playlist::{FullCycle, Playlist, RngManager};
///
/// let mut playlist = FullCycle::new(10, RngManager::new(1));
/// assert_eq!(playlist.prime(), 11);
///
/// let mut lap = playlist.take_indices(10);
/// lap.sort();
/// assert_eq!(lap, (0..10).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone)]
pub struct FullCycle<R> {
    size: i64,
    /// Smallest prime above `size`
    prime: i64,
    /// Per-lap step, reduced into `[1, prime)`
    skip: i64,
    /// Current residue in `[0, prime)`
    cur: i64,
    /// Outputs still owed in the current lap
    remaining: i64,
    laps: u64,
    source: R,
}

impl<R: RandomSource> FullCycle<R> {
    /// Build the playlist and start its first lap
    ///
    /// # Arguments
    /// * `size` - Number of entries, at least 3
    /// * `source` - Draws the per-lap step; three draws in `[0, size)` per lap
    ///
    /// # Panics
    /// Panics if `size < 3`; use [`crate::new_with_rand`] for any size.
    pub fn new(size: i64, source: R) -> Self {
        assert!(size >= 3, "full cycle playlist needs at least 3 entries");

        let mut playlist = Self {
            size,
            prime: next_prime_above(size),
            skip: 0,
            cur: 0,
            remaining: 0,
            laps: 0,
            source,
        };
        playlist.reseed();
        playlist
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn prime(&self) -> i64 {
        self.prime
    }

    /// Number of laps started so far, including the current one
    pub fn laps(&self) -> u64 {
        self.laps
    }

    fn reseed(&mut self) {
        let size = self.size;
        let mut draw = || 1 + self.source.rand_n(size);
        let (a, b, c) = (draw(), draw(), draw());

        // skip = a*size^2 + b*size + c, taken mod prime one product at a
        // time. Every factor is below prime, so each product fits i128.
        let (n, p) = (i128::from(size), i128::from(self.prime));
        let a_n2 = i128::from(a) * n % p * n % p;
        let b_n = i128::from(b) * n % p;
        let skip = (a_n2 + b_n + i128::from(c)) % p;
        // A zero step would never leave cur.
        self.skip = if skip == 0 { 1 } else { skip as i64 };

        self.remaining = size + 1;
        self.laps += 1;
        trace!(
            size,
            prime = self.prime,
            skip = self.skip,
            lap = self.laps,
            "reseeded playlist"
        );

        // Uncounted step from the previous lap's last position.
        self.step();
    }

    fn step(&mut self) -> i64 {
        if self.remaining <= 0 {
            self.reseed();
        }
        self.remaining -= 1;

        self.cur = self.advance(self.cur);
        // Residues in [size, prime) are not indices.
        while self.cur >= self.size {
            self.cur = self.advance(self.cur);
        }
        self.cur
    }

    /// `(cur + skip) mod prime` without overflowing near `i64::MAX`
    fn advance(&self, cur: i64) -> i64 {
        ((i128::from(cur) + i128::from(self.skip)) % i128::from(self.prime)) as i64
    }
}

impl<R: RandomSource> Playlist for FullCycle<R> {
    fn next(&mut self) -> i64 {
        self.step()
    }
}
