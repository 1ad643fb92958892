//! Seek statistics.
//!
//! Derives the average seek time and throughput from a request count and
//! a total seek distance, guarding both divisions.

use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationResult};

/// Aggregate statistics of one simulation run.
///
/// # Degenerate cases
/// - No requests: every field is zero.
/// - Requests but no head movement: average is `0.0` and throughput is
///   `f64::INFINITY`.
///
/// Use [`checked_average`](Self::checked_average) and
/// [`checked_throughput`](Self::checked_throughput) to get an error
/// instead of a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeekStatistics {
    /// Number of requests serviced.
    pub request_count: usize,
    /// Total head movement in tracks.
    pub total_seek_time: u64,
    /// Mean head movement per request.
    pub average_seek_time: f64,
    /// Requests serviced per track of head movement.
    ///
    /// Serialized as `null` when undefined (infinite).
    #[serde(with = "undefined_as_null")]
    pub throughput: f64,
}

impl SeekStatistics {
    /// Computes statistics from a request count and total seek distance.
    pub fn calculate(request_count: usize, total_seek_time: u64) -> Self {
        let average_seek_time = if request_count == 0 {
            0.0
        } else {
            total_seek_time as f64 / request_count as f64
        };

        let throughput = match (request_count, total_seek_time) {
            (0, _) => 0.0,
            (_, 0) => f64::INFINITY,
            (n, total) => n as f64 / total as f64,
        };

        Self {
            request_count,
            total_seek_time,
            average_seek_time,
            throughput,
        }
    }

    /// Average seek time, or `EmptyRequestSet` when nothing was serviced.
    pub fn checked_average(&self) -> SimulationResult<f64> {
        if self.request_count == 0 {
            return Err(SimulationError::EmptyRequestSet);
        }
        Ok(self.average_seek_time)
    }

    /// Throughput, or an error when it is undefined.
    ///
    /// Returns `EmptyRequestSet` with no requests and `ZeroSeekTime` when
    /// the head never moved.
    pub fn checked_throughput(&self) -> SimulationResult<f64> {
        if self.request_count == 0 {
            return Err(SimulationError::EmptyRequestSet);
        }
        if self.total_seek_time == 0 {
            return Err(SimulationError::ZeroSeekTime);
        }
        Ok(self.throughput)
    }

}

/// Maps the infinite throughput sentinel to JSON-safe `null` and back.
mod undefined_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
