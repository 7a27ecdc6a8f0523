use widget::{
    Duration, DurationField, EnglishCatalog, ErrorKind, FieldSpec, Validation, ValueSink, render,
};

#[derive(Default)]
struct RecordingSink {
    committed: Vec<Duration>,
}

impl ValueSink for RecordingSink {
    fn set_duration(&mut self, value: Duration) {
        self.committed.push(value);
    }
}

fn segment_field() -> DurationField {
    DurationField::new(
        FieldSpec::required("from")
            .expect("from spec")
            .with_label("From"),
        FieldSpec::new("to", false, None, Some(3600.0))
            .expect("to spec")
            .with_label("To"),
    )
}

#[test]
fn edit_validate_commit_flow() {
    let mut field = segment_field();
    let mut sink = RecordingSink::default();

    // Author types a reversed interval.
    let outcome = field.handle_change("0:30", "0:10", &mut sink);
    let errors = match &outcome {
        Validation::Invalid(errors) => errors,
        other => panic!("expected invalid outcome, got {other:?}"),
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::FromNotAfterTo);

    let messages = render(errors, &EnglishCatalog);
    assert_eq!(messages, vec!["\"From\" must be earlier than \"To\"."]);
    assert!(sink.committed.is_empty());

    // Change events with the errors still on screen are ignored.
    assert_eq!(field.handle_change("0:30", "0:10", &mut sink), Validation::Unfixed);

    // Author edits the "To" input; validation runs again and commits.
    field.mark_edited();
    let outcome = field.handle_change("0:30", "0:45", &mut sink);
    assert!(outcome.is_valid());
    assert_eq!(sink.committed.len(), 1);
    assert_eq!(sink.committed[0].from_secs(), 30.0);
    assert_eq!(sink.committed[0].to_secs(), 45.0);

    // The committed value seeds the inputs next time the form opens.
    let (from_text, to_text) = field.display_text(&sink.committed[0]);
    assert_eq!(from_text, "00:30.0");
    assert_eq!(to_text, "00:45.0");
}

#[test]
fn bounds_failure_renders_humanized_limit() {
    let mut field = segment_field();
    let mut sink = RecordingSink::default();

    let outcome = field.handle_change("0:10", "2:00:00", &mut sink);
    let errors = outcome.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::ExceedsMax);

    let messages = render(errors, &EnglishCatalog);
    assert_eq!(messages, vec!["\"To\" exceeds maximum value of 1:00:00.0."]);
    assert!(sink.committed.is_empty());
}

#[test]
fn every_problem_is_reported_in_one_pass() {
    let mut field = segment_field();
    let mut sink = RecordingSink::default();

    let outcome = field.handle_change("", "garbage", &mut sink);
    let kinds: Vec<ErrorKind> = outcome.errors().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ErrorKind::RequiredMissing, ErrorKind::InvalidFormat]);

    let messages = render(outcome.errors(), &EnglishCatalog);
    assert_eq!(messages[0], "The field From is required.");
    assert!(messages[1].starts_with("Invalid time format for To."));
}
