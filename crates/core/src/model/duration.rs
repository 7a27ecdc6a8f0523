use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DurationError {
    #[error("\"From\" must be earlier than \"To\"")]
    FromNotBeforeTo,

    #[error("segment must be at least {MIN_GAP_SECONDS} seconds long")]
    TooShort,

    #[error("timestamps must be finite and non-negative")]
    OutOfRange,
}

/// Shortest segment an author is allowed to define, in seconds.
pub const MIN_GAP_SECONDS: f64 = 0.3;

// Tolerates f64 rounding when the gap lands exactly on the boundary.
const GAP_EPSILON: f64 = 1e-9;

//
// ─── DURATION ──────────────────────────────────────────────────────────────────
//

/// A validated media segment: start and end offsets in seconds.
///
/// This is the only value the host persists; it serializes as
/// `{"from": .., "to": ..}`. Construction enforces ordering and the
/// minimum gap, so a `Duration` in hand is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Duration {
    from: f64,
    to: f64,
}

impl Duration {
    /// Creates a segment from start/end offsets in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error when either offset is negative or non-finite,
    /// when `to <= from`, or when the segment is shorter than
    /// [`MIN_GAP_SECONDS`].
    pub fn new(from: f64, to: f64) -> Result<Self, DurationError> {
        if !from.is_finite() || !to.is_finite() || from < 0.0 || to < 0.0 {
            return Err(DurationError::OutOfRange);
        }
        if to <= from {
            return Err(DurationError::FromNotBeforeTo);
        }
        if (to - from) - MIN_GAP_SECONDS < -GAP_EPSILON {
            return Err(DurationError::TooShort);
        }
        Ok(Self { from, to })
    }

    #[must_use]
    pub fn from_secs(&self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn to_secs(&self) -> f64 {
        self.to
    }

    /// Length of the segment in seconds. Always at least [`MIN_GAP_SECONDS`].
    #[must_use]
    pub fn length(&self) -> f64 {
        self.to - self.from
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
