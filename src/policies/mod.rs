//! Seek policies.
//!
//! Each policy decides the order in which pending requests are serviced
//! and drives a [`ServiceTrace`] accordingly. Policies are stateless unit
//! structs sharing the [`SeekPolicy`] signature; [`Policy`] is the closed
//! enumeration used for dispatch.
//!
//! # Policies
//!
//! - **FCFS**: arrival order
//! - **SSTF**: greedy nearest request, lowest input index on ties
//! - **SCAN**: sweep up, bounce off the far edge, sweep down
//! - **C-SCAN**: sweep up, wrap from the far edge to track 0, sweep up
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod fcfs;
mod kind;
mod sstf;
mod sweep;

pub use fcfs::Fcfs;
pub use kind::Policy;
pub use sstf::Sstf;
pub use sweep::{CScan, Scan, SweepDirection};

use crate::models::{DiskGeometry, RequestSet, ServiceTrace};
use std::fmt::Debug;

/// A disk-head scheduling policy.
///
/// Implementations must be pure: the same requests and geometry always
/// produce the same trace, and every request is serviced exactly once.
pub trait SeekPolicy: Send + Sync + Debug {
    /// Short policy name as shown in reports (e.g., "SSTF").
    fn name(&self) -> &'static str;

    /// Services every request starting from `disk.head`.
    fn run(&self, requests: &RequestSet, disk: &DiskGeometry) -> ServiceTrace;

    /// Whether the policy travels to a disk edge and therefore needs a
    /// valid disk size.
    fn uses_disk_edge(&self) -> bool {
        false
    }

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
