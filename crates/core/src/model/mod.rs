pub mod duration;
pub mod field;

pub use duration::{Duration, DurationError, MIN_GAP_SECONDS};
pub use field::{ErrorKind, FieldError, FieldSpec, FieldSpecError};
