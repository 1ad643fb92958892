//! Disk geometry model.

use serde::{Deserialize, Serialize};

use super::Track;

/// Starting head position and disk size for one simulation.
///
/// Tracks are numbered `0..disk_size`; the far edge is `disk_size - 1`.
/// Only sweep policies (SCAN, C-SCAN) consult the disk size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskGeometry {
    /// Track under the head before the first request is serviced.
    pub head: Track,
    /// Number of tracks (exclusive upper bound on track numbers).
    pub disk_size: Track,
}

impl DiskGeometry {
    /// Creates a geometry.
    pub fn new(head: Track, disk_size: Track) -> Self {
        Self { head, disk_size }
    }

    /// Innermost track.
    pub fn near_edge(&self) -> Track {
        0
    }

    /// Outermost track (`disk_size - 1`).
    pub fn far_edge(&self) -> Track {
        self.disk_size - 1
    }

    /// Whether `track` lies on the disk.
    pub fn contains(&self, track: Track) -> bool {
        (0..self.disk_size).contains(&track)
    }
}
