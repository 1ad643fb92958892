//! Request queue model.
//!
//! A request is nothing more than the track it targets. Duplicates are
//! legal and each copy is serviced on its own.

use serde::{Deserialize, Serialize};

/// A track (cylinder) number.
///
/// Signed so that out-of-range input can be represented and rejected by
/// validation instead of failing to parse. 32 bits wide, so a single move
/// is at most `u32::MAX` tracks and the `u64` running totals cannot wrap.
pub type Track = i32;

/// Pending requests in arrival order.
///
/// Arrival order matters only to policies that honor it (FCFS, and SSTF
/// for tie-breaking). Sweep policies sort a private copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestSet {
    tracks: Vec<Track>,
}

impl RequestSet {
    /// Creates an empty request set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request.
    pub fn with_request(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Appends a request in place.
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Requests in arrival order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether no requests are pending.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Highest requested track, if any.
    pub fn max_track(&self) -> Option<Track> {
        self.tracks.iter().copied().max()
    }

    /// Lowest requested track, if any.
    pub fn min_track(&self) -> Option<Track> {
        self.tracks.iter().copied().min()
    }

    /// Splits the requests around `head` for a sweep.
    ///
    /// Returns `(below, at_or_above)`, both sorted ascending. A request
    /// sitting exactly on the head belongs to the upper partition.
    pub fn partition_sorted(&self, head: Track) -> (Vec<Track>, Vec<Track>) {
        let mut sorted = self.tracks.clone();
        sorted.sort_unstable();
        let split = sorted.partition_point(|&t| t < head);
        let upper = sorted.split_off(split);
        (sorted, upper)
    }
}

impl From<Vec<Track>> for RequestSet {
    fn from(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

impl From<&[Track]> for RequestSet {
    fn from(tracks: &[Track]) -> Self {
        Self {
            tracks: tracks.to_vec(),
        }
    }
}

impl FromIterator<Track> for RequestSet {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}
