//! Input validation for seek simulations.
//!
//! Checks a request set against the disk geometry before simulating.
//! Detects:
//! - Non-positive disk sizes
//! - Heads off the disk
//! - Requests beyond the far edge or below track 0
//!
//! Bounds only matter to policies that travel to a disk edge (SCAN,
//! C-SCAN). FCFS and SSTF never read the disk size, so their inputs are
//! accepted as any integers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{DiskGeometry, RequestSet};
use crate::policies::Policy;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A request-list token is not an integer.
    MalformedToken,
    /// The policy name is not one of FCFS, SSTF, SCAN, C-SCAN.
    UnknownPolicy,
    /// Disk size is zero or negative.
    NonPositiveDiskSize,
    /// The initial head is not on the disk.
    HeadOutOfRange,
    /// A request is at or beyond the disk size.
    TrackOutOfRange,
    /// A request is below track 0.
    NegativeTrack,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a simulation input for the given policy.
///
/// Checks (edge-using policies only):
/// 1. Disk size is positive
/// 2. Head lies in `[0, disk_size)`
/// 3. Every request lies in `[0, disk_size)`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    requests: &RequestSet,
    disk: &DiskGeometry,
    policy: Policy,
) -> ValidationResult {
    if !policy.uses_disk_edge() {
        return Ok(());
    }

    let mut errors = Vec::new();

    if disk.disk_size <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveDiskSize,
            format!("Disk size must be positive, got {}", disk.disk_size),
        ));
        // Range checks against a non-positive size would only repeat this.
        return Err(errors);
    }

    if !disk.contains(disk.head) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!(
                "Head position {} is outside the disk [0, {})",
                disk.head, disk.disk_size
            ),
        ));
    }

    for (idx, &track) in requests.tracks().iter().enumerate() {
        if track < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTrack,
                format!("Request #{} targets negative track {}", idx + 1, track),
            ));
        } else if track >= disk.disk_size {
            errors.push(ValidationError::new(
                ValidationErrorKind::TrackOutOfRange,
                format!(
                    "Request #{} targets track {} but disk size is {}",
                    idx + 1,
                    track,
                    disk.disk_size
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
