//! Check error types.
//!
//! Self-contained error enum for every check operation in this crate. Each
//! variant is a programmatically distinguishable failure kind and carries the
//! labels a caller needs to branch on the failure or format a precise message:
//!
//! - [`CheckError::TypeMismatch`] - the value's runtime shape is not the
//!   requested shape
//! - [`CheckError::ClassMismatch`] - the value is an object but not an
//!   instance of the requested class
//! - [`CheckError::KeyNotFound`] - an indexed or filtered array access named a
//!   key the array does not have

use thiserror::Error;

use crate::core::key::Key;

/// Failure of a check operation.
///
/// Checks never recover or retry internally; the first failing step of a
/// composed check is surfaced unchanged to the caller.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The value's runtime shape does not match the requested shape.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// The value is an object, but not an instance of the requested class.
    #[error("class mismatch: expected instance of {expected}, got {actual}")]
    ClassMismatch { expected: String, actual: String },

    /// An array is missing a required key.
    #[error("key not found: '{key}'")]
    KeyNotFound { key: Key },
}

impl CheckError {
    /// Create a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a class mismatch error.
    pub fn class_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ClassMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a key not found error.
    pub fn key_not_found(key: impl Into<Key>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Check if this is a type mismatch.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Check if this is a class mismatch.
    #[must_use]
    pub const fn is_class_mismatch(&self) -> bool {
        matches!(self, Self::ClassMismatch { .. })
    }

    /// Check if this is a missing-key failure.
    #[must_use]
    pub const fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}

/// Result type for check operations.
pub type CheckResult<T> = Result<T, CheckError>;
