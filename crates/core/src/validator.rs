//! Cross-field validation for the "From"/"To" timecode pair.

use crate::model::{
    Duration, DurationError, ErrorKind, FieldError, FieldSpec, MIN_GAP_SECONDS,
};
use crate::timecode;

/// Outcome of validating the two timecode inputs of a duration field.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Both fields parsed, passed bounds and the cross-field checks.
    Valid(Duration),
    /// An optional field was left blank; nothing to store, nothing wrong.
    Incomplete,
    /// One or more failures, in field order (from, to, cross-field).
    Invalid(Vec<FieldError>),
    /// Stale-error gate: prior errors are still displayed and the
    /// inputs have not changed, so nothing was re-parsed.
    Unfixed,
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::Valid(d) => Some(*d),
            _ => None,
        }
    }

    /// Accumulated field errors; empty unless `Invalid`.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

enum FieldValue {
    Value(f64),
    Blank,
    Failed,
}

/// Orchestrates per-field parsing, numeric bounds and the cross-field
/// ordering / minimum-gap rules.
///
/// Stateless and pure: identical inputs produce identical outcomes.
/// The stale-error gate is a caller-owned signal passed into
/// [`DurationValidator::validate`], not internal state.
#[derive(Debug, Clone)]
pub struct DurationValidator {
    from: FieldSpec,
    to: FieldSpec,
}

impl DurationValidator {
    #[must_use]
    pub fn new(from: FieldSpec, to: FieldSpec) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn from_spec(&self) -> &FieldSpec {
        &self.from
    }

    #[must_use]
    pub fn to_spec(&self) -> &FieldSpec {
        &self.to
    }

    /// Validates the raw text of both fields.
    ///
    /// Both fields are always attempted so the caller sees every
    /// problem at once. Cross-field checks run only when both fields
    /// independently parse and pass their bounds; their errors attach
    /// to the "to" field. `stale_errors` is the caller-tracked "errors
    /// still on screen, inputs unchanged" flag and short-circuits the
    /// whole pass.
    #[must_use]
    pub fn validate(&self, raw_from: &str, raw_to: &str, stale_errors: bool) -> Validation {
        if stale_errors {
            return Validation::Unfixed;
        }

        let mut errors = Vec::new();
        let from = Self::field_value(&self.from, raw_from, &mut errors);
        let to = Self::field_value(&self.to, raw_to, &mut errors);

        if let (FieldValue::Value(from), FieldValue::Value(to)) = (from, to) {
            if errors.is_empty() {
                return match Duration::new(from, to) {
                    Ok(duration) => Validation::Valid(duration),
                    Err(err) => Validation::Invalid(vec![self.cross_error(err)]),
                };
            }
        }

        if errors.is_empty() {
            Validation::Incomplete
        } else {
            Validation::Invalid(errors)
        }
    }

    fn field_value(spec: &FieldSpec, raw: &str, errors: &mut Vec<FieldError>) -> FieldValue {
        if spec.optional() && raw.trim().is_empty() {
            return FieldValue::Blank;
        }

        let value = match timecode::parse(raw, spec.name()) {
            Ok(value) => value,
            Err(err) => {
                errors.push(
                    FieldError::new(spec.name(), err.kind())
                        .with_context(":property", spec.label()),
                );
                return FieldValue::Failed;
            }
        };

        if let Some(max) = spec.max() {
            if value > max {
                errors.push(
                    FieldError::new(spec.name(), ErrorKind::ExceedsMax)
                        .with_context(":property", spec.label())
                        .with_context(":max", timecode::format(max)),
                );
                return FieldValue::Failed;
            }
        }
        if let Some(min) = spec.min() {
            if value < min {
                errors.push(
                    FieldError::new(spec.name(), ErrorKind::ExceedsMin)
                        .with_context(":property", spec.label())
                        .with_context(":min", timecode::format(min)),
                );
                return FieldValue::Failed;
            }
        }

        FieldValue::Value(value)
    }

    fn cross_error(&self, err: DurationError) -> FieldError {
        let kind = match err {
            DurationError::TooShort => ErrorKind::DurationTooShort,
            // OutOfRange cannot come from parsed values; fold it in.
            DurationError::FromNotBeforeTo | DurationError::OutOfRange => {
                ErrorKind::FromNotAfterTo
            }
        };
        let error = FieldError::new(self.to.name(), kind);
        if kind == ErrorKind::DurationTooShort {
            error.with_context(":min", MIN_GAP_SECONDS.to_string())
        } else {
            error
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
