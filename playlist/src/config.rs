//! Playlist configuration
//!
//! Lets a host application describe a playlist in JSON:
//!
//! ```json
//! { "size": 24, "seed": 7 }
//! ```
//!
//! `seed` is optional. Without it the playlist draws from thread-local
//! entropy; with it every run replays the same laps.

use crate::playlist::{self, Playlist};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`PlaylistConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid playlist config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameters for building a playlist
///
/// # Example
/// ```
/// use rand_playlist::{Playlist, PlaylistConfig};
///
/// let config = PlaylistConfig::from_json(r#"{ "size": 3, "seed": 11 }"#).unwrap();
/// let mut playlist = config.build();
///
/// let mut lap = playlist.take_indices(3);
/// lap.sort();
/// assert_eq!(lap, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistConfig {
    /// Number of entries; zero or negative gives an empty playlist
    pub size: i64,

    /// Seed for a reproducible shuffle
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlaylistConfig {
    pub fn new(size: i64) -> Self {
        Self { size, seed: None }
    }

    pub fn with_seed(size: i64, seed: u64) -> Self {
        Self {
            size,
            seed: Some(seed),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> Box<dyn Playlist> {
        match self.seed {
            Some(seed) => playlist::with_seed(self.size, seed),
            None => playlist::new(self.size),
        }
    }
}
