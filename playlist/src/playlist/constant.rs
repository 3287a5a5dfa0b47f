use super::Playlist;

/// Playlist that always yields the same value
///
/// Backs empty playlists (`-1`) and single entry playlists (`0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(i64);

impl Constant {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl Playlist for Constant {
    fn next(&mut self) -> i64 {
        self.0
    }
}
