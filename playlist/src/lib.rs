//! Random Playlist - non-repeating shuffled index sequences
//!
//! Hands out indices in `[0, size)` lap after lap. Within a lap every index
//! appears exactly once in shuffled order; each new lap is reshuffled, and
//! the first index of a lap never equals the last index of the lap before.
//!
//! # Architecture
//!
//! - **playlist**: The `Playlist` trait, its size-specific variants and the
//!   factory functions
//! - **prime**: Prime search used to size the modular walk
//! - **rng**: Injected random sources (seeded and entropy-backed)
//! - **config**: JSON-loadable playlist parameters
//!
//! # Critical Invariants
//!
//! 1. Every lap of `size` outputs covers `[0, size)` exactly once
//! 2. No index is returned twice in a row, across lap boundaries included
//! 3. All randomness comes from the injected `RandomSource`
//!
//! # Example
//! ```
//! use rand_playlist::Playlist;
//!
//! let mut playlist = rand_playlist::new(30);
//! let track = playlist.next();
//! assert!((0..30).contains(&track));
//! ```

// Module declarations
pub mod config;
pub mod playlist;
pub mod prime;
pub mod rng;

// Re-exports for convenience
pub use config::{ConfigError, PlaylistConfig};
pub use playlist::{new, new_with_rand, with_seed, Constant, FullCycle, Playlist, Toggle, EMPTY};
pub use rng::{RandomSource, RngManager, SystemRandom};
