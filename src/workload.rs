//! Synthetic request workloads.
//!
//! Seeded generators for experiments that compare policies on more than
//! a handful of hand-written queues.

use rand::Rng;

use crate::models::{RequestSet, Track};

/// `count` requests drawn uniformly from `[0, disk_size)`.
///
/// Returns an empty set when `disk_size` is not positive.
pub fn uniform_requests<R: Rng>(rng: &mut R, count: usize, disk_size: Track) -> RequestSet {
    if disk_size <= 0 {
        return RequestSet::new();
    }
    (0..count).map(|_| rng.random_range(0..disk_size)).collect()
}

/// `count` requests within `spread` tracks of `center`, clamped to the disk.
///
/// Models locality: most traffic hitting one region of the platter.
/// Returns an empty set when `disk_size` is not positive.
pub fn clustered_requests<R: Rng>(
    rng: &mut R,
    count: usize,
    disk_size: Track,
    center: Track,
    spread: Track,
) -> RequestSet {
    if disk_size <= 0 {
        return RequestSet::new();
    }
    let spread = spread.saturating_abs();
    (0..count)
        .map(|_| {
            let offset = rng.random_range(-spread..=spread);
            center.saturating_add(offset).clamp(0, disk_size - 1)
        })
        .collect()
}
