#![forbid(unsafe_code)]

pub mod field;
pub mod messages;

pub use duration_core::{
    Duration, DurationValidator, ErrorKind, FieldError, FieldSpec, Validation,
};

pub use field::{DurationField, ValueSink};
pub use messages::{EnglishCatalog, Translate, render};
