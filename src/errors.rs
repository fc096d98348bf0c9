//! Error types for the rotations crate
//!
//! Rotation types never validate themselves on construction. These errors are
//! only produced by the opt-in validating constructors and by the slice-based
//! constructors used when components arrive from outside the program.

use thiserror::Error;

/// Main error type for rotation construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    /// A representation invariant (unit norm, orthonormality, determinant)
    /// is violated beyond the requested tolerance
    #[error("Invalid {representation}: {reason} (deviation {deviation:e} exceeds tolerance {tolerance:e})")]
    InvalidRotation {
        /// Name of the representation being validated
        representation: &'static str,
        /// The invariant that failed
        reason: &'static str,
        /// How far the value is from satisfying the invariant
        deviation: f64,
        /// The tolerance the deviation was checked against
        tolerance: f64,
    },

    /// A flat component list has the wrong length for the representation
    #[error("{representation} expects {expected} components, got {found}")]
    ComponentCount {
        /// Name of the representation being built
        representation: &'static str,
        /// Number of components the representation needs
        expected: usize,
        /// Number of components that were supplied
        found: usize,
    },
}

/// Result type for rotation operations
pub type Result<T> = std::result::Result<T, RotationError>;

/// Checks a deviation against a tolerance, producing `InvalidRotation` on failure
pub(crate) fn check_invariant(
    representation: &'static str,
    reason: &'static str,
    deviation: f64,
    tolerance: f64,
) -> Result<()> {
    if deviation <= tolerance {
        return Ok(());
    }
    log::debug!(
        "rejecting {}: {} off by {:e} (tolerance {:e})",
        representation,
        reason,
        deviation,
        tolerance
    );
    Err(RotationError::InvalidRotation {
        representation,
        reason,
        deviation,
        tolerance,
    })
}

/// Checks that a flat component list has exactly `expected` entries
pub(crate) fn check_component_count(
    representation: &'static str,
    expected: usize,
    found: usize,
) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(RotationError::ComponentCount {
            representation,
            expected,
            found,
        })
    }
}
