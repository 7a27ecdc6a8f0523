#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod timecode;
pub mod validator;

pub use error::Error;

pub use model::{
    Duration, DurationError, ErrorKind, FieldError, FieldSpec, FieldSpecError, MIN_GAP_SECONDS,
};

pub use timecode::ParseError;
pub use validator::{DurationValidator, Validation};
