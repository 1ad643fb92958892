//! Disk scheduling domain models.
//!
//! Provides the data types shared by every seek policy: the request
//! queue, the disk geometry, and the trace a head leaves behind while
//! servicing the queue.
//!
//! # Terminology
//!
//! | u-seek | Meaning |
//! |--------|---------|
//! | Track | A cylinder number on the platter |
//! | RequestSet | Pending requests in arrival order |
//! | DiskGeometry | Initial head position and disk size |
//! | ServiceTrace | Service order and every head position visited |

mod disk;
mod request;
mod trace;

pub use disk::DiskGeometry;
pub use request::{RequestSet, Track};
pub use trace::ServiceTrace;
