//! The "From"/"To" duration field as the host sees it.

use duration_core::{Duration, DurationValidator, FieldSpec, Validation, timecode};

/// Host-provided sink the validated value is written back through.
pub trait ValueSink {
    fn set_duration(&mut self, value: Duration);
}

/// A pair of timecode inputs bound to one media segment duration.
///
/// The host forwards the raw text of both inputs on every change and
/// renders whatever comes back. The field owns the stale-error gate:
/// after a failed pass nothing is re-validated until the host reports
/// an edit via [`DurationField::mark_edited`], mirroring "don't
/// re-check while the errors are still on screen".
#[derive(Debug, Clone)]
pub struct DurationField {
    validator: DurationValidator,
    unresolved_errors: bool,
}

impl DurationField {
    #[must_use]
    pub fn new(from: FieldSpec, to: FieldSpec) -> Self {
        Self {
            validator: DurationValidator::new(from, to),
            unresolved_errors: false,
        }
    }

    #[must_use]
    pub fn validator(&self) -> &DurationValidator {
        &self.validator
    }

    /// Text used to seed the two inputs when showing an existing value.
    #[must_use]
    pub fn display_text(&self, value: &Duration) -> (String, String) {
        (
            timecode::format(value.from_secs()),
            timecode::format(value.to_secs()),
        )
    }

    /// True while a failed pass has errors the author has not touched.
    #[must_use]
    pub fn has_unresolved_errors(&self) -> bool {
        self.unresolved_errors
    }

    /// Host signal that an errored input was edited; re-opens the gate.
    pub fn mark_edited(&mut self) {
        self.unresolved_errors = false;
    }

    /// Validates the current input text and commits a valid value
    /// through the sink. Returns the full outcome so the host can
    /// render errors or clear them.
    pub fn handle_change(
        &mut self,
        raw_from: &str,
        raw_to: &str,
        sink: &mut impl ValueSink,
    ) -> Validation {
        let outcome = self
            .validator
            .validate(raw_from, raw_to, self.unresolved_errors);
        match &outcome {
            Validation::Valid(duration) => {
                self.unresolved_errors = false;
                sink.set_duration(*duration);
            }
            Validation::Incomplete => self.unresolved_errors = false,
            Validation::Invalid(_) => self.unresolved_errors = true,
            Validation::Unfixed => {}
        }
        outcome
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
