//! Head movement trace.
//!
//! Every policy drives a [`ServiceTrace`] from the initial head position.
//! The trace owns the running head and the accumulated seek distance, so
//! policies only decide *where* the head goes next.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::Track;

/// The path a head takes while servicing a request set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTrace {
    /// Requests in the order they were serviced.
    pub service_order: Vec<Track>,
    /// Every position the head occupied, starting with the initial head.
    /// Includes edge visits that service nothing.
    pub head_path: Vec<Track>,
    /// Sum of absolute distances between consecutive head positions.
    pub total_seek: u64,
}

impl ServiceTrace {
    /// Starts a trace with the head resting on `head`.
    pub fn starting_at(head: Track) -> Self {
        Self {
            service_order: Vec::new(),
            head_path: vec![head],
            total_seek: 0,
        }
    }

    /// Current head position.
    pub fn head(&self) -> Track {
        // head_path is never empty: starting_at seeds it.
        self.head_path.last().copied().unwrap_or_default()
    }

    /// Moves the head to `track` and services the request there.
    pub fn service(&mut self, track: Track) {
        self.move_to(track);
        self.service_order.push(track);
    }

    /// Services each track in iteration order.
    pub fn service_all<I: IntoIterator<Item = Track>>(&mut self, tracks: I) {
        for track in tracks {
            self.service(track);
        }
    }

    /// Moves the head to `track` without servicing anything (edge visits).
    pub fn move_to(&mut self, track: Track) {
        let from = self.head();
        let distance = u64::from(from.abs_diff(track));
        trace!(from, to = track, distance, "head moved");
        self.total_seek += distance;
        self.head_path.push(track);
    }

    /// Number of requests serviced so far.
    pub fn serviced_count(&self) -> usize {
        self.service_order.len()
    }
}
