//! First-Come-First-Served.

use super::SeekPolicy;
use crate::models::{DiskGeometry, RequestSet, ServiceTrace};

/// First-Come-First-Served.
///
/// Services requests strictly in arrival order. Fair, but the head may
/// swing back and forth across the disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SeekPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, requests: &RequestSet, disk: &DiskGeometry) -> ServiceTrace {
        let mut trace = ServiceTrace::starting_at(disk.head);
        trace.service_all(requests.tracks().iter().copied());
        trace
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> RequestSet {
        RequestSet::from(vec![98, 183, 37, 122, 14, 124, 65, 67])
    }

    #[test]
    fn test_textbook_total() {
        let trace = Fcfs.run(&textbook(), &DiskGeometry::new(53, 200));
        assert_eq!(trace.total_seek, 640);
        assert_eq!(trace.service_order, textbook().tracks());
        assert_eq!(trace.head(), 67);
    }

    #[test]
    fn test_empty_rests_at_head() {
        let trace = Fcfs.run(&RequestSet::new(), &DiskGeometry::new(53, 200));
        assert_eq!(trace.total_seek, 0);
        assert_eq!(trace.head(), 53);
    }

    #[test]
    fn test_ignores_disk_size() {
        // Out-of-range tracks are still serviced; FCFS never reads the size.
        let requests = RequestSet::from(vec![500, -20]);
        let trace = Fcfs.run(&requests, &DiskGeometry::new(0, 10));
        assert_eq!(trace.total_seek, 500 + 520);
        assert!(!Fcfs.uses_disk_edge());
    }
}
