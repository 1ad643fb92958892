//! Shortest-Seek-Time-First.

use super::SeekPolicy;
use crate::models::{DiskGeometry, RequestSet, ServiceTrace, Track};

/// Shortest-Seek-Time-First.
///
/// Greedy nearest neighbor: always services the pending request closest
/// to the head. Equidistant candidates resolve to the one that arrived
/// first, which keeps the result deterministic.
///
/// # Complexity
/// O(n²) for n requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl Sstf {
    /// Index of the closest pending request, lowest index on ties.
    fn closest(tracks: &[Track], visited: &[bool], head: Track) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (idx, &track) in tracks.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            let distance = head.abs_diff(track);
            // Strict comparison keeps the earliest index among equals.
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((idx, distance));
            }
        }
        best.map(|(idx, _)| idx)
    }
}

impl SeekPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn run(&self, requests: &RequestSet, disk: &DiskGeometry) -> ServiceTrace {
        let tracks = requests.tracks();
        let mut visited = vec![false; tracks.len()];
        let mut trace = ServiceTrace::starting_at(disk.head);

        while let Some(idx) = Self::closest(tracks, &visited, trace.head()) {
            visited[idx] = true;
            trace.service(tracks[idx]);
        }

        trace
    }

    fn description(&self) -> &'static str {
        "Shortest-Seek-Time-First"
    }
}
