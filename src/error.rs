//! Error type shared by the flux, update and motion stages.

use thiserror::Error;

use crate::types::EdgeIndex;

/// Errors that abort a timestep.
///
/// Numerical degeneracies (zero-length edges, vanishing swept-volume
/// denominators) are not reported here; they surface as non-finite values
/// for the caller's timestep controller to catch.
#[derive(Debug, Error)]
pub enum AleError {
    /// No rule of the condition-action sequence accepted an edge.
    #[error("No condition matched {edge} (neighbors {first}, {second})")]
    NoMatchingCondition {
        edge: EdgeIndex,
        first: usize,
        second: usize,
    },

    /// A tracer list does not have one entry per registered tracer name.
    #[error("Tracer count mismatch in {what} {index}: expected {expected}, got {actual}")]
    TracerCountMismatch {
        what: &'static str,
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A per-edge or per-cell input has the wrong length.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A condition refers to a sticker that is not registered.
    #[error("Unknown sticker: {0}")]
    UnknownSticker(String),

    /// The Riemann solver rejected its input states.
    #[error("Riemann solver failure: {0}")]
    RiemannFailure(String),
}

impl AleError {
    /// Create a length mismatch error.
    pub fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Create a tracer count mismatch error.
    pub fn tracer_mismatch(what: &'static str, index: usize, expected: usize, actual: usize) -> Self {
        Self::TracerCountMismatch {
            what,
            index,
            expected,
            actual,
        }
    }
}
