//! Seek simulation engine and statistics.
//!
//! [`Simulator`] validates a [`SimulationRequest`], dispatches it to the
//! selected policy, and derives [`SeekStatistics`] from the resulting
//! trace. Each call is independent: all working state lives on the stack
//! of that call, so simulators can be shared freely across threads.
//!
//! # Statistics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total seek time | Sum of head movement distances |
//! | Average seek time | total / request count |
//! | Throughput | request count / total |

mod engine;
mod report;
mod stats;

pub use engine::{simulate, SimulationRequest, Simulator};
pub use report::SeekReport;
pub use stats::SeekStatistics;
