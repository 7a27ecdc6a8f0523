//! Rendering structured field errors into display strings.
//!
//! The core emits [`FieldError`] descriptors, never final UI text. The
//! host supplies a [`Translate`] capability that resolves a domain/key
//! pair and substitutes the error's placeholder values; the widget
//! ships [`EnglishCatalog`] as the default table.

use std::collections::BTreeMap;

use duration_core::FieldError;

/// Host-provided message lookup.
///
/// `params` maps placeholders (e.g. `":property"`, `":max"`) to the
/// values to substitute into the resolved template.
pub trait Translate {
    fn translate(&self, domain: &str, key: &str, params: &BTreeMap<String, String>) -> String;
}

/// Renders each error through the host catalog, preserving order.
#[must_use]
pub fn render(errors: &[FieldError], catalog: &impl Translate) -> Vec<String> {
    errors
        .iter()
        .map(|err| catalog.translate(err.kind.domain(), err.kind.key(), &err.context))
        .collect()
}

/// Built-in English strings used when the host has no catalog of its
/// own.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl EnglishCatalog {
    fn template(domain: &str, key: &str) -> Option<&'static str> {
        let text = match (domain, key) {
            ("core", "requiredProperty") => "The field :property is required.",
            ("core", "invalidTime") => {
                "Invalid time format for :property. Use MM:SS or H:MM:SS, optionally followed by a fraction."
            }
            ("core", "exceedsMax") => "\":property\" exceeds maximum value of :max.",
            ("core", "exceedsMin") => "\":property\" exceeds minimum value of :min.",
            ("duration", "fromBiggerThanTo") => "\"From\" must be earlier than \"To\".",
            ("duration", "durationTooShort") => "The segment must be at least :min seconds long.",
            _ => return None,
        };
        Some(text)
    }
}

impl Translate for EnglishCatalog {
    fn translate(&self, domain: &str, key: &str, params: &BTreeMap<String, String>) -> String {
        // Unknown keys echo back as "domain.key" so a missing string is
        // visible instead of silent.
        let mut message = match Self::template(domain, key) {
            Some(text) => text.to_owned(),
            None => format!("{domain}.{key}"),
        };
        for (placeholder, value) in params {
            message = message.replace(placeholder.as_str(), value);
        }
        message
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use duration_core::ErrorKind;

    #[test]
    fn substitutes_placeholders() {
        let err = FieldError::new("to", ErrorKind::ExceedsMax)
            .with_context(":property", "To")
            .with_context(":max", "01:00.0");
        let rendered = render(&[err], &EnglishCatalog);
        assert_eq!(rendered, vec!["\"To\" exceeds maximum value of 01:00.0."]);
    }

    #[test]
    fn renders_cross_field_messages() {
        let errors = [
            FieldError::new("to", ErrorKind::FromNotAfterTo),
            FieldError::new("to", ErrorKind::DurationTooShort).with_context(":min", "0.3"),
        ];
        let rendered = render(&errors, &EnglishCatalog);
        assert_eq!(rendered[0], "\"From\" must be earlier than \"To\".");
        assert_eq!(rendered[1], "The segment must be at least 0.3 seconds long.");
    }

    #[test]
    fn unknown_key_is_visible() {
        let text = EnglishCatalog.translate("core", "nope", &BTreeMap::new());
        assert_eq!(text, "core.nope");
    }
}
