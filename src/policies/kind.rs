//! Closed policy enumeration used for dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CScan, Fcfs, Scan, SeekPolicy, Sstf, SweepDirection};
use crate::error::SimulationError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// The classic disk scheduling policies.
///
/// [`Policy::ALL`] fixes the order used when comparing policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Seek-Time-First.
    #[serde(rename = "SSTF")]
    Sstf,
    /// SCAN, sweeping toward the far edge first.
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN.
    #[serde(rename = "C-SCAN")]
    CScan,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Policy; 4] = [Policy::Fcfs, Policy::Sstf, Policy::Scan, Policy::CScan];

    /// The policy implementation.
    ///
    /// [`Policy::Scan`] always maps to SCAN sweeping toward the far edge
    /// first. Use [`Simulator::with_scan_direction`] (or construct
    /// [`Scan`] directly) for the other direction.
    ///
    /// [`Simulator::with_scan_direction`]: crate::simulator::Simulator::with_scan_direction
    pub fn implementation(self) -> &'static dyn SeekPolicy {
        static SCAN: Scan = Scan {
            direction: SweepDirection::TowardFarEdge,
        };
        match self {
            Policy::Fcfs => &Fcfs,
            Policy::Sstf => &Sstf,
            Policy::Scan => &SCAN,
            Policy::CScan => &CScan,
        }
    }

    /// Display name ("FCFS", "SSTF", "SCAN", "C-SCAN").
    pub fn name(self) -> &'static str {
        self.implementation().name()
    }

    /// Whether the policy needs a valid disk size.
    pub fn uses_disk_edge(self) -> bool {
        self.implementation().uses_disk_edge()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Policy::Fcfs),
            "SSTF" => Ok(Policy::Sstf),
            "SCAN" => Ok(Policy::Scan),
            "C-SCAN" | "CSCAN" => Ok(Policy::CScan),
            _ => Err(SimulationError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::UnknownPolicy,
                format!("Unknown policy '{}'", s.trim()),
            )])),
        }
    }
}
