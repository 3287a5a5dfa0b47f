//! Property tests for playlist laps
//!
//! Laps are checked over many sizes and seeds rather than a handful of
//! fixed cases.

use proptest::prelude::*;
use rand_playlist::{new_with_rand, with_seed, Playlist};

proptest! {
    #[test]
    fn prop_each_lap_is_a_permutation(size in 3i64..80, seed in any::<u64>(), laps in 1usize..8) {
        let mut playlist = with_seed(size, seed);
        for _ in 0..laps {
            let mut lap = playlist.take_indices(size as usize);
            lap.sort_unstable();
            prop_assert_eq!(lap, (0..size).collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_no_consecutive_repeats(size in 2i64..80, seed in any::<u64>()) {
        let mut playlist = with_seed(size, seed);
        let values = playlist.take_indices(size as usize * 6);
        for pair in values.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn prop_scripted_source_still_covers_laps(
        size in 3i64..40,
        script in prop::collection::vec(any::<u32>(), 1..16),
    ) {
        // Any source honoring [0, n) is acceptable, however non-random.
        let mut i = 0;
        let source = move |n: i64| {
            let v = i64::from(script[i % script.len()]) % n;
            i += 1;
            v
        };
        let mut playlist = new_with_rand(size, source);
        let mut last = None;
        for _ in 0..4 {
            let lap = playlist.take_indices(size as usize);
            if let Some(prev) = last {
                prop_assert_ne!(prev, lap[0]);
            }
            last = lap.last().copied();

            let mut sorted = lap;
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..size).collect::<Vec<_>>());
        }
    }
}
