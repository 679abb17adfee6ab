//! Errors raised by misusing a [`Validation`](crate::Validation)
//!
//! These are not validation-domain errors. Domain errors travel inside
//! `Validation::Failure` as ordinary data; an `AccessError` only signals that a caller
//! asked a validation for a channel it does not hold.
//!
//! # Examples
//!
//! ```
//! use accrue::{AccessError, Validation};
//!
//! let v = Validation::<i32, &str>::failure("too short");
//! assert_eq!(v.get(), Err(AccessError::EmptyValue));
//!
//! let v = Validation::<i32, &str>::success(42);
//! assert_eq!(v.get_error(), Err(AccessError::IllegalState));
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Raised when reading the channel of a validation that is not populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// A success value was requested from a `Failure`
    EmptyValue,
    /// An error was requested from a `Success`
    IllegalState,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::EmptyValue => write!(f, "value of 'Failure' validation"),
            AccessError::IllegalState => write!(f, "error of 'Success' validation"),
        }
    }
}

impl StdError for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AccessError::EmptyValue.to_string(),
            "value of 'Failure' validation"
        );
        assert_eq!(
            AccessError::IllegalState.to_string(),
            "error of 'Success' validation"
        );
    }

    #[test]
    fn test_error_trait() {
        let err: Box<dyn StdError> = Box::new(AccessError::EmptyValue);
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "value of 'Failure' validation");
    }
}
