// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for generator construction.
//!
//! The generators themselves never fail: an infeasible domain simply yields no
//! sequences. These errors are only produced by the `checked` constructors,
//! which apply the stricter validation a production caller usually wants.

use thiserror::Error;

/// Longest sequence any generator will build.
///
/// Bounds the depth of the engine stack and the number of trailed slots.
pub const MAX_SEQUENCE_LENGTH: usize = 64;

/// Errors reported by the `checked` generator constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A parameter lies outside the generator's domain (e.g. K > N).
    #[error("invalid argument for {generator}: {reason}")]
    InvalidArgument {
        generator: &'static str,
        reason: String,
    },

    /// The requested sequences would be longer than [`MAX_SEQUENCE_LENGTH`].
    #[error("{generator} sequences of length {length} exceed the maximum of {max}")]
    LengthExceeded {
        generator: &'static str,
        length: usize,
        max: usize,
    },
}

impl GenerateError {
    /// Check `length` against [`MAX_SEQUENCE_LENGTH`].
    pub(crate) fn check_length(generator: &'static str, length: usize) -> Result<(), Self> {
        if length > MAX_SEQUENCE_LENGTH {
            Err(GenerateError::LengthExceeded {
                generator,
                length,
                max: MAX_SEQUENCE_LENGTH,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_length() {
        assert!(GenerateError::check_length("test", MAX_SEQUENCE_LENGTH).is_ok());
        assert_eq!(
            GenerateError::check_length("test", MAX_SEQUENCE_LENGTH + 1),
            Err(GenerateError::LengthExceeded {
                generator: "test",
                length: MAX_SEQUENCE_LENGTH + 1,
                max: MAX_SEQUENCE_LENGTH,
            })
        );
    }

    #[test]
    fn test_display() {
        let err = GenerateError::InvalidArgument {
            generator: "combinations",
            reason: "k = 5 exceeds n = 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument for combinations: k = 5 exceeds n = 3"
        );
    }
}
