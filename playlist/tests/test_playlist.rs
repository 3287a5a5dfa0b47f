//! Tests for playlist generators
//!
//! Covers the degenerate sizes, lap coverage across reseeds and the
//! no-double-play guarantee at lap boundaries.

use rand_playlist::{new, new_with_rand, with_seed, Playlist, RngManager, EMPTY};

#[test]
fn test_empty_sizes_return_sentinel() {
    for size in [-1, 0] {
        let mut playlist = new(size);
        for _ in 0..100 {
            assert_eq!(playlist.next(), EMPTY);
        }
    }
    assert_eq!(EMPTY, -1);
}

#[test]
fn test_size_one_always_zero() {
    let mut playlist = new(1);
    for _ in 0..100 {
        assert_eq!(playlist.next(), 0);
    }
}

#[test]
fn test_degenerate_sizes_never_consult_source() {
    for size in [i64::MIN, -5, 0, 1] {
        let mut playlist = new_with_rand(size, move |_n: i64| -> i64 {
            panic!("source called for size {}", size)
        });
        playlist.take_indices(10);
    }
}

#[test]
fn test_size_two_toggles_between_0_and_1() {
    for _ in 0..100 {
        let mut playlist = new(2);
        // Line up so the next value is 0: a leading 1 already does that,
        // a leading 0 is followed by 1 and then 0.
        if playlist.next() == 0 {
            playlist.next();
        }
        for _ in 0..100 {
            assert_eq!(playlist.next(), 0);
            assert_eq!(playlist.next(), 1);
        }
    }
}

#[test]
fn test_every_index_once_per_lap() {
    for _ in 0..100 {
        let mut playlist = new(10);
        let mut seen = [0; 10];
        for lap in 1..10 {
            for _ in 0..10 {
                seen[playlist.next() as usize] += 1;
            }
            // Each block of 10 bumps every index by exactly one.
            assert_eq!(seen, [lap; 10], "after lap {}", lap);
        }
    }
}

#[test]
fn test_last_index_not_repeated_after_lap() {
    // A finished lap must not be followed by the same track, otherwise the
    // same song plays twice in a row.
    let mut playlist = new(3);
    let mut last = playlist.next();
    for i in 0..1000 {
        let next = playlist.next();
        assert_ne!(last, next, "repeat at call {}", i);
        last = next;
    }
}

#[test]
fn test_seeded_playlists_are_reproducible() {
    let mut a = with_seed(25, 2024);
    let mut b = new_with_rand(25, RngManager::new(2024));
    assert_eq!(a.take_indices(500), b.take_indices(500));
}

#[test]
fn test_different_seeds_shuffle_differently() {
    let mut a = with_seed(50, 1);
    let mut b = with_seed(50, 2);
    assert_ne!(a.take_indices(50), b.take_indices(50));
}

#[test]
fn test_laps_are_reshuffled() {
    let mut playlist = with_seed(40, 77);
    let laps: Vec<Vec<i64>> = (0..5).map(|_| playlist.take_indices(40)).collect();
    assert!(
        laps.windows(2).any(|w| w[0] != w[1]),
        "five identical laps in a row"
    );
}

#[test]
fn test_values_stay_in_range_for_many_sizes() {
    for size in 3..120 {
        let mut playlist = with_seed(size, size as u64);
        for v in playlist.take_indices(size as usize * 3) {
            assert!((0..size).contains(&v), "{} out of range for size {}", v, size);
        }
    }
}

#[test]
fn test_extreme_source_values_still_cover_lap() {
    // Sources pinned to either end of [0, n) must still give full laps.
    for pinned_high in [false, true] {
        let source = move |n: i64| if pinned_high { n - 1 } else { 0 };
        let mut playlist = new_with_rand(17, source);
        for _ in 0..4 {
            let mut lap = playlist.take_indices(17);
            lap.sort();
            assert_eq!(lap, (0..17).collect::<Vec<_>>());
        }
    }
}
