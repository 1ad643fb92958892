//! Sweep (elevator) policies.
//!
//! Both policies partition the queue around the initial head, service
//! the upper partition in ascending order first, and only travel to a
//! disk edge when requests remain on the other side of the head.

use serde::{Deserialize, Serialize};

use super::SeekPolicy;
use crate::models::{DiskGeometry, RequestSet, ServiceTrace};

/// Direction of the first sweep.
///
/// Requests sitting exactly on the initial head are serviced by the
/// first sweep in either direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDirection {
    /// Ascending first, reversing at `disk_size - 1`.
    #[default]
    TowardFarEdge,
    /// Descending first, reversing at track 0.
    TowardNearEdge,
}

/// SCAN (elevator).
///
/// Sweeps toward the far edge servicing requests at or above the head,
/// then, if anything is left below, continues to the far edge and sweeps
/// back down. The edge excursion is skipped when nothing lies below.
///
/// # Example
/// ```
/// use u_seek::models::{DiskGeometry, RequestSet};
/// use u_seek::policies::{Scan, SeekPolicy};
///
/// let requests = RequestSet::from(vec![98, 183, 37, 122, 14, 124, 65, 67]);
/// let trace = Scan::default().run(&requests, &DiskGeometry::new(53, 200));
/// assert_eq!(trace.total_seek, 331);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan {
    /// Direction of the first sweep (default: toward the far edge).
    pub direction: SweepDirection,
}

impl Scan {
    /// SCAN that heads for track 0 first.
    pub fn toward_near_edge() -> Self {
        Self {
            direction: SweepDirection::TowardNearEdge,
        }
    }
}

impl SeekPolicy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn run(&self, requests: &RequestSet, disk: &DiskGeometry) -> ServiceTrace {
        let mut trace = ServiceTrace::starting_at(disk.head);

        match self.direction {
            SweepDirection::TowardFarEdge => {
                let (below, upper) = requests.partition_sorted(disk.head);
                trace.service_all(upper);
                if !below.is_empty() {
                    trace.move_to(disk.far_edge());
                    trace.service_all(below.into_iter().rev());
                }
            }
            SweepDirection::TowardNearEdge => {
                // Mirror image: requests on the head join the first sweep.
                let (lower, above) = requests.partition_sorted(disk.head.saturating_add(1));
                trace.service_all(lower.into_iter().rev());
                if !above.is_empty() {
                    trace.move_to(disk.near_edge());
                    trace.service_all(above);
                }
            }
        }

        trace
    }

    fn uses_disk_edge(&self) -> bool {
        true
    }

    fn description(&self) -> &'static str {
        "Elevator sweep with reversal at the disk edge"
    }
}

/// Circular SCAN.
///
/// Sweeps toward the far edge like SCAN. If requests remain below the
/// head, the arm travels to the far edge, wraps to track 0 (paying the
/// full `disk_size - 1` traversal), and sweeps upward again.
///
/// # Example
/// ```
/// use u_seek::models::{DiskGeometry, RequestSet};
/// use u_seek::policies::{CScan, SeekPolicy};
///
/// let requests = RequestSet::from(vec![98, 183, 37, 122, 14, 124, 65, 67]);
/// let trace = CScan.run(&requests, &DiskGeometry::new(53, 200));
/// assert_eq!(trace.total_seek, 382);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CScan;

impl SeekPolicy for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn run(&self, requests: &RequestSet, disk: &DiskGeometry) -> ServiceTrace {
        let (below, upper) = requests.partition_sorted(disk.head);
        let mut trace = ServiceTrace::starting_at(disk.head);

        trace.service_all(upper);
        if !below.is_empty() {
            trace.move_to(disk.far_edge());
            trace.move_to(disk.near_edge());
            trace.service_all(below);
        }

        trace
    }

    fn uses_disk_edge(&self) -> bool {
        true
    }

    fn description(&self) -> &'static str {
        "Circular sweep with wrap-around to track 0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> RequestSet {
        RequestSet::from(vec![98, 183, 37, 122, 14, 124, 65, 67])
    }

    fn disk() -> DiskGeometry {
        DiskGeometry::new(53, 200)
    }

    #[test]
    fn test_scan_textbook() {
        let trace = Scan::default().run(&textbook(), &disk());
        // 53→183 (130), →199 (16), →37 (162), →14 (23)
        assert_eq!(trace.total_seek, 331);
        assert_eq!(trace.service_order, vec![65, 67, 98, 122, 124, 183, 37, 14]);
        assert_eq!(
            trace.head_path,
            vec![53, 65, 67, 98, 122, 124, 183, 199, 37, 14]
        );
    }

    #[test]
    fn test_scan_toward_near_edge_textbook() {
        let trace = Scan::toward_near_edge().run(&textbook(), &disk());
        // 53→14 (39), →0 (14), →183 (183)
        assert_eq!(trace.total_seek, 236);
        assert_eq!(trace.service_order, vec![37, 14, 65, 67, 98, 122, 124, 183]);
    }

    #[test]
    fn test_scan_no_bounce_when_nothing_below() {
        let requests = RequestSet::from(vec![60, 90, 70]);
        let trace = Scan::default().run(&requests, &disk());
        assert_eq!(trace.total_seek, 90 - 53);
        assert!(!trace.head_path.contains(&199));
    }

    #[test]
    fn test_scan_all_below() {
        let requests = RequestSet::from(vec![10, 20]);
        let trace = Scan::default().run(&requests, &disk());
        // 53→199 (146), →20 (179), →10 (10)
        assert_eq!(trace.total_seek, 146 + 179 + 10);
        assert_eq!(trace.service_order, vec![20, 10]);
    }

    #[test]
    fn test_scan_near_edge_bounces_for_requests_above() {
        let requests = RequestSet::from(vec![90, 60]);
        let trace = Scan::toward_near_edge().run(&requests, &disk());
        // 53→0 (53), →60 (60), →90 (30)
        assert_eq!(trace.total_seek, 143);
        assert_eq!(trace.head_path, vec![53, 0, 60, 90]);
    }

    #[test]
    fn test_scan_near_edge_requests_on_head_only() {
        let requests = RequestSet::from(vec![53, 53]);
        let trace = Scan::toward_near_edge().run(&requests, &disk());
        assert_eq!(trace.total_seek, 0);
    }

    #[test]
    fn test_cscan_textbook() {
        let trace = CScan.run(&textbook(), &disk());
        // 53→183 (130), →199 (16), →0 (199), →37 (37)
        assert_eq!(trace.total_seek, 382);
        assert_eq!(trace.service_order, vec![65, 67, 98, 122, 124, 183, 14, 37]);
        assert_eq!(
            trace.head_path,
            vec![53, 65, 67, 98, 122, 124, 183, 199, 0, 14, 37]
        );
    }

    #[test]
    fn test_cscan_no_wrap_when_nothing_below() {
        let requests = RequestSet::from(vec![53, 100]);
        let trace = CScan.run(&requests, &disk());
        assert_eq!(trace.total_seek, 47);
        assert_eq!(trace.head(), 100);
    }

    #[test]
    fn test_cscan_request_on_far_edge() {
        let requests = RequestSet::from(vec![199, 5]);
        let trace = CScan.run(&requests, &disk());
        // 53→199 (146), edge (0), wrap (199), →5 (5)
        assert_eq!(trace.total_seek, 146 + 199 + 5);
    }

    #[test]
    fn test_sweeps_use_disk_edge() {
        assert!(Scan::default().uses_disk_edge());
        assert!(CScan.uses_disk_edge());
    }
}
