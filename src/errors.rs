// Veil - Synonym generators for data anonymization
// Copyright (c) 2026 Veil Contributors
// Licensed under the MIT License

//! Generator error types
//!
//! The two failure kinds a generator can raise. Both carry enough context
//! for the host to tell a configuration problem (length bound too small)
//! apart from a mapping problem (wrong field type routed to the generator).

use thiserror::Error;

use crate::synonyms::ValueKind;

/// Failure raised by a synonym generator.
///
/// Raised synchronously to the caller; generators perform no retry or
/// recovery of their own. Absent input is not an error and never produces
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The requested maximum length cannot hold any generated value.
    ///
    /// Generators never truncate, so retrying with the same bound would
    /// fail identically. The caller must supply a larger bound.
    #[error("Cannot generate a synonym within maximum length {requested}")]
    UnsupportedConstraint {
        /// The length bound the caller supplied
        requested: usize,
    },

    /// The input value is present but not of a type the generator understands.
    #[error("Cannot anonymize values of type {actual}")]
    UnsupportedInputType {
        /// The kind of value actually encountered
        actual: ValueKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_constraint_display() {
        let err = GeneratorError::UnsupportedConstraint { requested: 5 };
        assert_eq!(
            err.to_string(),
            "Cannot generate a synonym within maximum length 5"
        );
    }

    #[test]
    fn test_unsupported_input_type_display() {
        let err = GeneratorError::UnsupportedInputType {
            actual: ValueKind::Integer,
        };
        assert_eq!(err.to_string(), "Cannot anonymize values of type INTEGER");
    }

    #[test]
    fn test_errors_carry_context() {
        let err = GeneratorError::UnsupportedConstraint { requested: 12 };
        assert!(matches!(
            err,
            GeneratorError::UnsupportedConstraint { requested: 12 }
        ));

        let err = GeneratorError::UnsupportedInputType {
            actual: ValueKind::Array,
        };
        assert!(matches!(
            err,
            GeneratorError::UnsupportedInputType {
                actual: ValueKind::Array
            }
        ));
    }

    #[test]
    fn test_generator_error_implements_std_error() {
        let err = GeneratorError::UnsupportedConstraint { requested: 0 };
        // Verify it implements std::error::Error
        let _: &dyn std::error::Error = &err;
    }
}
