//! Timecode parsing and formatting.
//!
//! Authors type segment offsets as `[[H:]MM:]SS[.fraction]`; this module
//! turns that text into fractional seconds and back. Parsing is strict:
//! the seconds segment is always two digits, minutes must be two digits
//! whenever an hours segment is present, and an explicit `0` hours
//! segment is rejected rather than treated as "no hours".

use thiserror::Error;

use crate::model::{ErrorKind, FieldError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Parse failure for a single timecode field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("field \"{0}\" is required")]
    RequiredMissing(String),

    #[error("field \"{0}\" is not a valid timecode")]
    InvalidFormat(String),
}

impl ParseError {
    /// Name of the field the input belonged to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::RequiredMissing(field) | Self::InvalidFormat(field) => field,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RequiredMissing(_) => ErrorKind::RequiredMissing,
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
        }
    }
}

impl From<ParseError> for FieldError {
    fn from(err: ParseError) -> Self {
        let field = err.field().to_owned();
        FieldError::new(err.field(), err.kind()).with_context(":property", field)
    }
}

//
// ─── PARSING ───────────────────────────────────────────────────────────────────
//

/// Parses a timecode string into fractional seconds.
///
/// Accepted shapes are `MM:SS`, `H:MM:SS`, each optionally followed by
/// `.f`, `.ff` or `.fff`. Segments are checked right to left and the
/// first violation wins, so a malformed input yields exactly one error.
///
/// Fraction scaling is digit-count dependent and deliberately keeps the
/// legacy behavior of stored content: one digit is tenths, two digits
/// keep only the leading tenth (`.25` -> 0.2), three digits are
/// milliseconds truncated to tenths. The digits themselves, read as an
/// integer, must not exceed 59.
///
/// # Errors
///
/// `RequiredMissing` for blank input, `InvalidFormat` for everything
/// else. Never panics; on success the value is finite and non-negative.
pub fn parse(text: &str, field: &str) -> Result<f64, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::RequiredMissing(field.to_owned()));
    }
    let invalid = || ParseError::InvalidFormat(field.to_owned());

    let parts: Vec<&str> = text.split('.').collect();
    let (clock, fraction) = match parts.as_slice() {
        [clock] => (*clock, 0.0),
        [clock, digits] => (*clock, fraction_seconds(digits).ok_or_else(invalid)?),
        // more than one literal dot
        _ => return Err(invalid()),
    };

    let segments: Vec<&str> = clock.split(':').collect();
    let (hours_seg, minutes_seg, seconds_seg) = match segments.as_slice() {
        [m, s] => (None, *m, *s),
        [h, m, s] => (Some(*h), *m, *s),
        _ => return Err(invalid()),
    };

    // Right to left: seconds, minutes, then hours.
    if seconds_seg.len() != 2 {
        return Err(invalid());
    }
    let seconds = digits_value(seconds_seg).filter(|&s| s <= 59).ok_or_else(invalid)?;

    let minutes = digits_value(minutes_seg).filter(|&m| m <= 59).ok_or_else(invalid)?;
    if hours_seg.is_some() && minutes_seg.len() != 2 {
        return Err(invalid());
    }

    let hours = match hours_seg {
        None => 0,
        // An explicit zero hours segment is malformed, not "no hours".
        Some(seg) => digits_value(seg).filter(|&h| h >= 1).ok_or_else(invalid)?,
    };

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + fraction)
}

/// Digits-only segment value; `None` when empty, non-numeric or too
/// large to represent.
fn digits_value(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn fraction_seconds(digits: &str) -> Option<f64> {
    let value = digits_value(digits)?;
    if value > 59 {
        return None;
    }
    match digits.len() {
        1 => Some(value as f64 / 10.0),
        // Legacy scaling: only the leading digit of a two-digit
        // fraction contributes.
        2 => Some((value / 10) as f64 / 10.0),
        3 => Some((value / 100) as f64 / 10.0),
        _ => None,
    }
}

//
// ─── FORMATTING ────────────────────────────────────────────────────────────────
//

/// Formats seconds as the canonical timecode shown to authors.
///
/// Output is `H:MM:SS.t` when there is a non-zero hours component,
/// `MM:SS.t` otherwise; minutes and seconds are zero-padded to two
/// digits and the fraction is always a single tenths digit. Display is
/// lossy for values entered with hundredths or milliseconds, which is
/// intentional. Negative or non-finite input clamps to zero.
#[must_use]
pub fn format(seconds: f64) -> String {
    // Round to tenths up front so the carry propagates (59.96 becomes
    // 01:00.0, not 00:59.10).
    let tenths_total = (seconds.max(0.0) * 10.0).round() as u64;
    let tenths = tenths_total % 10;
    let whole = tenths_total / 10;

    let secs = whole % 60;
    let minutes = (whole / 60) % 60;
    let hours = whole / 3600;

    if hours != 0 {
        format!("{hours}:{minutes:02}:{secs:02}.{tenths}")
    } else {
        format!("{minutes:02}:{secs:02}.{tenths}")
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
