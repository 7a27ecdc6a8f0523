use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS (host misconfiguration) ────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldSpecError {
    #[error("field name cannot be empty")]
    EmptyName,

    #[error("field minimum must be <= maximum")]
    InvalidBounds,

    #[error("field bounds must be finite and non-negative")]
    OutOfRangeBound,
}

//
// ─── FIELD SPEC ────────────────────────────────────────────────────────────────
//

/// Per-field metadata supplied by the host's field configuration.
///
/// Bounds are in seconds. Misconfiguration is a programmer error and is
/// rejected up front rather than surfacing as a user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    name: String,
    label: Option<String>,
    optional: bool,
    min: Option<f64>,
    max: Option<f64>,
}

impl FieldSpec {
    /// Creates a field spec.
    ///
    /// # Errors
    ///
    /// Returns an error when `name` is blank, a bound is negative or
    /// non-finite, or `min` exceeds `max`.
    pub fn new(
        name: impl Into<String>,
        optional: bool,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self, FieldSpecError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FieldSpecError::EmptyName);
        }
        for bound in [min, max].into_iter().flatten() {
            if !bound.is_finite() || bound < 0.0 {
                return Err(FieldSpecError::OutOfRangeBound);
            }
        }
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(FieldSpecError::InvalidBounds);
            }
        }
        Ok(Self {
            name: name.trim().to_owned(),
            label: None,
            optional,
            min,
            max,
        })
    }

    /// Required field with no bounds.
    pub fn required(name: impl Into<String>) -> Result<Self, FieldSpecError> {
        Self::new(name, false, None, None)
    }

    /// Sets the display name used in error messages.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name for messages; falls back to the field name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn optional(&self) -> bool {
        self.optional
    }

    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.max
    }
}

//
// ─── FIELD ERRORS (user input) ─────────────────────────────────────────────────
//

/// Validation failure taxonomy for the duration field.
///
/// Each kind maps to a translation domain and key; the host resolves
/// them through its message catalog (see the widget crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequiredMissing,
    InvalidFormat,
    ExceedsMax,
    ExceedsMin,
    FromNotAfterTo,
    DurationTooShort,
}

impl ErrorKind {
    /// Translation domain the host resolves this kind in. Single-field
    /// failures reuse the host's shared strings; cross-field failures
    /// are owned by the duration widget.
    #[must_use]
    pub fn domain(self) -> &'static str {
        match self {
            Self::RequiredMissing | Self::InvalidFormat | Self::ExceedsMax | Self::ExceedsMin => {
                "core"
            }
            Self::FromNotAfterTo | Self::DurationTooShort => "duration",
        }
    }

    /// Translation key within [`ErrorKind::domain`].
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::RequiredMissing => "requiredProperty",
            Self::InvalidFormat => "invalidTime",
            Self::ExceedsMax => "exceedsMax",
            Self::ExceedsMin => "exceedsMin",
            Self::FromNotAfterTo => "fromBiggerThanTo",
            Self::DurationTooShort => "durationTooShort",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::RequiredMissing => "required value is missing",
            Self::InvalidFormat => "not a valid timecode",
            Self::ExceedsMax => "exceeds the maximum value",
            Self::ExceedsMin => "below the minimum value",
            Self::FromNotAfterTo => "\"From\" is not earlier than \"To\"",
            Self::DurationTooShort => "segment is too short",
        };
        f.write_str(text)
    }
}

/// One structured, renderable validation failure.
///
/// Carries the owning field, the error kind, and the placeholder values
/// a message catalog substitutes into its template. Never holds UI
/// handles, so it is freely clonable and comparable in tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("field \"{field}\": {kind}")]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
    pub context: BTreeMap<String, String>,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
            context: BTreeMap::new(),
        }
    }

    /// Adds a placeholder value, e.g. `":max"` for `ExceedsMax`.
    #[must_use]
    pub fn with_context(mut self, placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(placeholder.into(), value.into());
        self
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_rejects_blank_name() {
        let err = FieldSpec::new("   ", false, None, None).unwrap_err();
        assert_eq!(err, FieldSpecError::EmptyName);
    }

    #[test]
    fn spec_rejects_min_above_max() {
        let err = FieldSpec::new("from", false, Some(10.0), Some(5.0)).unwrap_err();
        assert_eq!(err, FieldSpecError::InvalidBounds);
    }

    #[test]
    fn spec_rejects_negative_bound() {
        let err = FieldSpec::new("from", false, Some(-1.0), None).unwrap_err();
        assert_eq!(err, FieldSpecError::OutOfRangeBound);
    }

    #[test]
    fn spec_label_falls_back_to_name() {
        let spec = FieldSpec::required("from").unwrap();
        assert_eq!(spec.label(), "from");
        let spec = spec.with_label("From");
        assert_eq!(spec.label(), "From");
    }

    #[test]
    fn kind_domains_and_keys() {
        assert_eq!(ErrorKind::RequiredMissing.domain(), "core");
        assert_eq!(ErrorKind::RequiredMissing.key(), "requiredProperty");
        assert_eq!(ErrorKind::InvalidFormat.key(), "invalidTime");
        assert_eq!(ErrorKind::ExceedsMax.key(), "exceedsMax");
        assert_eq!(ErrorKind::ExceedsMin.key(), "exceedsMin");
        assert_eq!(ErrorKind::FromNotAfterTo.domain(), "duration");
        assert_eq!(ErrorKind::FromNotAfterTo.key(), "fromBiggerThanTo");
        assert_eq!(ErrorKind::DurationTooShort.key(), "durationTooShort");
    }

    #[test]
    fn field_error_context_builder() {
        let err = FieldError::new("to", ErrorKind::ExceedsMax)
            .with_context(":property", "To")
            .with_context(":max", "01:00.0");
        assert_eq!(err.field, "to");
        assert_eq!(err.context.get(":max").map(String::as_str), Some("01:00.0"));
        assert_eq!(err.to_string(), "field \"to\": exceeds the maximum value");
    }
}
