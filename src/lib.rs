//! Disk-head scheduling simulator.
//!
//! Computes the head movement ("seek time") and derived statistics of the
//! classic disk scheduling policies for a queue of track requests.
//! Simulations are pure: no I/O, no shared state, identical input yields
//! an identical report.
//!
//! # Modules
//!
//! - **`models`**: `RequestSet`, `DiskGeometry`, `ServiceTrace`
//! - **`policies`**: `Policy` and the FCFS, SSTF, SCAN, C-SCAN implementations
//! - **`simulator`**: `Simulator`, `SimulationRequest`, `SeekReport`, `SeekStatistics`
//! - **`validation`**: Input bounds checks for edge-using policies
//! - **`parse`**: Comma-separated request lists and integer fields
//! - **`workload`**: Seeded random request generators
//!
//! # Example
//!
//! ```
//! use u_seek::policies::Policy;
//! use u_seek::simulator::{SimulationRequest, Simulator};
//!
//! let request = SimulationRequest::from_text("98,183,37,122,14,124,65,67", "53", "200").unwrap();
//! for report in Simulator::new().compare_all(&request).unwrap() {
//!     println!("{report}");
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod error;
pub mod models;
pub mod parse;
pub mod policies;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use error::{SimulationError, SimulationResult};
