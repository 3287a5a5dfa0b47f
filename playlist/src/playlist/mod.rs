//! Playlist generators
//!
//! A playlist hands out indices in `[0, size)` so that every index appears
//! once per lap, laps are shuffled independently, and the last index of a lap
//! is never immediately repeated as the first index of the next.
//!
//! # Variants
//!
//! The variant is picked once, from the size, when the playlist is built:
//!
//! | size   | variant        | output                         |
//! |--------|----------------|--------------------------------|
//! | `<= 0` | [`Constant`]   | always `-1`                    |
//! | `1`    | [`Constant`]   | always `0`                     |
//! | `2`    | [`Toggle`]     | `0,1,0,1,..` or `1,0,1,0,..`   |
//! | `>= 3` | [`FullCycle`]  | shuffled laps, reseeded per lap |
//!
//! # Example
//! ```
//! use rand_playlist::Playlist;
//!
//! let mut playlist = rand_playlist::with_seed(5, 42);
//! let mut lap = playlist.take_indices(5);
//! lap.sort();
//! assert_eq!(lap, vec![0, 1, 2, 3, 4]);
//! ```

mod constant;
mod full_cycle;
mod toggle;

pub use constant::Constant;
pub use full_cycle::FullCycle;
pub use toggle::Toggle;

use crate::rng::{RandomSource, RngManager, SystemRandom};
use tracing::debug;

/// Returned by every playlist whose size is zero or negative
pub const EMPTY: i64 = -1;

/// Produces the next index of a shuffled playlist
pub trait Playlist {
    /// Next index in `[0, size)`, or [`EMPTY`] when `size <= 0`
    ///
    /// Never fails and can be called indefinitely.
    fn next(&mut self) -> i64;

    /// Collect the next `count` indices
    fn take_indices(&mut self, count: usize) -> Vec<i64> {
        (0..count).map(|_| self.next()).collect()
    }
}

/// Playlist of `size` entries drawing from thread-local entropy
pub fn new(size: i64) -> Box<dyn Playlist> {
    new_with_rand(size, SystemRandom::new())
}

/// Playlist of `size` entries replaying the stream of `RngManager::new(seed)`
///
/// # Example
/// ```
/// use rand_playlist::Playlist;
///
/// let mut a = rand_playlist::with_seed(12, 7);
/// let mut b = rand_playlist::with_seed(12, 7);
/// assert_eq!(a.take_indices(100), b.take_indices(100));
/// ```
pub fn with_seed(size: i64, seed: u64) -> Box<dyn Playlist> {
    new_with_rand(size, RngManager::new(seed))
}

/// Playlist of `size` entries drawing from `source`
///
/// # Arguments
/// * `size` - Number of entries; any value is accepted, `<= 0` gives an
///   empty playlist yielding [`EMPTY`]
/// * `source` - Random source; `source.rand_n(n)` must return a value in
///   `[0, n)`, see [`RandomSource`]. Sizes `<= 1` never consult it.
///
/// # Example
/// ```
/// use rand_playlist::Playlist;
///
/// // A constant source still yields a full lap.
/// let mut playlist = rand_playlist::new_with_rand(4, |_n: i64| 0);
/// let mut lap = playlist.take_indices(4);
/// lap.sort();
/// assert_eq!(lap, vec![0, 1, 2, 3]);
/// ```
pub fn new_with_rand<R>(size: i64, source: R) -> Box<dyn Playlist>
where
    R: RandomSource + 'static,
{
    match size {
        s if s <= 0 => {
            debug!(size, "empty playlist");
            Box::new(Constant::new(EMPTY))
        }
        1 => {
            debug!(size, "single entry playlist");
            Box::new(Constant::new(0))
        }
        2 => {
            debug!(size, "toggle playlist");
            Box::new(Toggle::new(source))
        }
        _ => {
            debug!(size, "full cycle playlist");
            Box::new(FullCycle::new(size, source))
        }
    }
}
