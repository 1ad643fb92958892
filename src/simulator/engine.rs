//! Simulation engine.
//!
//! # Algorithm
//!
//! 1. Validate the request against the selected policy.
//! 2. Run the policy from the initial head, producing a trace.
//! 3. Derive statistics from the trace.
//!
//! Comparing policies is the same dispatch applied to every
//! [`Policy`] in [`Policy::ALL`] order.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::SeekReport;
use crate::error::SimulationResult;
use crate::models::{DiskGeometry, RequestSet, Track};
use crate::parse::{parse_requests, parse_track};
use crate::policies::{Policy, Scan, SeekPolicy, SweepDirection};
use crate::validation::validate_input;

/// Input container for a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Pending requests in arrival order.
    pub requests: RequestSet,
    /// Initial head and disk size.
    pub disk: DiskGeometry,
    /// Policy to simulate (default: FCFS).
    pub policy: Policy,
}

impl SimulationRequest {
    /// Creates a request for the given queue, head, and disk size.
    pub fn new(requests: impl Into<RequestSet>, head: Track, disk_size: Track) -> Self {
        Self {
            requests: requests.into(),
            disk: DiskGeometry::new(head, disk_size),
            policy: Policy::Fcfs,
        }
    }

    /// Builds a request from raw text fields (comma-separated requests,
    /// head position, disk size).
    pub fn from_text(requests: &str, head: &str, disk_size: &str) -> SimulationResult<Self> {
        Ok(Self::new(
            parse_requests(requests)?,
            parse_track("Head position", head)?,
            parse_track("Disk size", disk_size)?,
        ))
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the disk size.
    pub fn with_disk_size(mut self, disk_size: Track) -> Self {
        self.disk.disk_size = disk_size;
        self
    }
}

/// Disk-head scheduling simulator.
///
/// Stateless apart from its configuration; repeated calls with identical
/// input yield identical reports.
///
/// # Example
///
/// ```
/// use u_seek::policies::Policy;
/// use u_seek::simulator::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, 200)
///     .with_policy(Policy::Sstf);
///
/// let report = Simulator::new().simulate(&request).unwrap();
/// assert_eq!(report.total_seek_time(), 236);
///
/// let all = Simulator::new().compare_all(&request).unwrap();
/// let totals: Vec<u64> = all.iter().map(|r| r.total_seek_time()).collect();
/// assert_eq!(totals, vec![640, 236, 331, 382]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    scan_direction: SweepDirection,
}

impl Simulator {
    /// Creates a simulator with SCAN sweeping toward the far edge first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first sweep direction used for [`Policy::Scan`].
    pub fn with_scan_direction(mut self, direction: SweepDirection) -> Self {
        self.scan_direction = direction;
        self
    }

    /// Simulates the request's policy.
    pub fn simulate(&self, request: &SimulationRequest) -> SimulationResult<SeekReport> {
        self.simulate_policy(request, request.policy)
    }

    /// Simulates `policy` over the request's queue and geometry,
    /// ignoring `request.policy`.
    pub fn simulate_policy(
        &self,
        request: &SimulationRequest,
        policy: Policy,
    ) -> SimulationResult<SeekReport> {
        if let Err(errors) = validate_input(&request.requests, &request.disk, policy) {
            warn!(
                policy = policy.name(),
                problems = errors.len(),
                "rejected simulation input"
            );
            return Err(errors.into());
        }

        let trace = match policy {
            Policy::Scan => Scan {
                direction: self.scan_direction,
            }
            .run(&request.requests, &request.disk),
            other => other
                .implementation()
                .run(&request.requests, &request.disk),
        };

        let report = SeekReport::new(policy, trace);
        debug!(
            policy = policy.name(),
            requests = report.request_count(),
            total_seek = report.total_seek_time(),
            "simulation complete"
        );
        Ok(report)
    }

    /// Simulates every policy, in FCFS, SSTF, SCAN, C-SCAN order.
    ///
    /// Fails with the first policy whose input is invalid; no partial
    /// result is returned.
    pub fn compare_all(&self, request: &SimulationRequest) -> SimulationResult<Vec<SeekReport>> {
        Policy::ALL
            .iter()
            .map(|&policy| self.simulate_policy(request, policy))
            .collect()
    }

    /// The report with the lowest total seek time; earlier policies win ties.
    pub fn best(reports: &[SeekReport]) -> Option<&SeekReport> {
        reports.iter().min_by_key(|r| r.total_seek_time())
    }
}

/// Simulates one policy with the default simulator.
///
/// # Example
/// ```
/// use u_seek::policies::Policy;
/// use u_seek::simulator::simulate;
///
/// let report = simulate(&[98, 183, 37, 122, 14, 124, 65, 67], 53, 200, Policy::CScan).unwrap();
/// assert_eq!(report.total_seek_time(), 382);
/// ```
pub fn simulate(
    requests: &[Track],
    head: Track,
    disk_size: Track,
    policy: Policy,
) -> SimulationResult<SeekReport> {
    let request = SimulationRequest::new(requests, head, disk_size).with_policy(policy);
    Simulator::new().simulate(&request)
}
