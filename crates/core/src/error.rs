use thiserror::Error;

use crate::model::{DurationError, FieldSpecError};
use crate::timecode::ParseError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Duration(#[from] DurationError),
    #[error(transparent)]
    FieldSpec(#[from] FieldSpecError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_module_errors_transparently() {
        let err: Error = ParseError::InvalidFormat("from".to_owned()).into();
        assert_eq!(err.to_string(), "field \"from\" is not a valid timecode");

        let err: Error = DurationError::TooShort.into();
        assert_eq!(err.to_string(), "segment must be at least 0.3 seconds long");

        let err: Error = FieldSpecError::EmptyName.into();
        assert_eq!(err.to_string(), "field name cannot be empty");
    }
}
