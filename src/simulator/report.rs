//! Simulation report.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SeekStatistics;
use crate::models::ServiceTrace;
use crate::policies::Policy;

/// The outcome of simulating one policy over one request set.
///
/// Immutable once produced. Formatting for display is left to the
/// caller; the [`Display`](fmt::Display) impl renders the classic
/// four-line summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekReport {
    /// Policy that produced this report.
    pub policy: Policy,
    /// Derived statistics.
    pub statistics: SeekStatistics,
    /// Service order and head path.
    pub trace: ServiceTrace,
}

impl SeekReport {
    pub(crate) fn new(policy: Policy, trace: ServiceTrace) -> Self {
        let statistics = SeekStatistics::calculate(trace.serviced_count(), trace.total_seek);
        Self {
            policy,
            statistics,
            trace,
        }
    }

    /// Policy display name ("FCFS", "SSTF", "SCAN", "C-SCAN").
    pub fn algorithm_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Number of requests serviced.
    pub fn request_count(&self) -> usize {
        self.statistics.request_count
    }

    /// Total head movement in tracks.
    pub fn total_seek_time(&self) -> u64 {
        self.statistics.total_seek_time
    }

    /// Mean head movement per request (0.0 with no requests).
    pub fn average_seek_time(&self) -> f64 {
        self.statistics.average_seek_time
    }

    /// Requests per track moved (`f64::INFINITY` when the head never moved).
    pub fn throughput(&self) -> f64 {
        self.statistics.throughput
    }
}

impl fmt::Display for SeekReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm_name())?;
        writeln!(f, "Total Seek Time: {}", self.total_seek_time())?;
        writeln!(f, "Average Seek Time: {:.2}", self.average_seek_time())?;
        writeln!(f, "Throughput: {:.4}", self.throughput())
    }
}
