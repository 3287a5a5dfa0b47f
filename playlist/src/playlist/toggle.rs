use super::Playlist;
use crate::rng::RandomSource;

/// Two entry playlist
///
/// Every lap has length two, so the only order that never repeats an entry
/// across laps is strict alternation. One draw at construction decides which
/// entry comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    bit: i64,
}

impl Toggle {
    /// Draw the starting phase
    ///
    /// # Arguments
    /// * `source` - Asked once for a value in `[0, 2)`; `0` makes the first
    ///   output `1`, `1` makes it `0`
    pub fn new<R: RandomSource>(mut source: R) -> Self {
        Self {
            bit: source.rand_n(2),
        }
    }
}

impl Playlist for Toggle {
    fn next(&mut self) -> i64 {
        // flip 0 <-> 1
        self.bit = 1 - self.bit;
        self.bit
    }
}
