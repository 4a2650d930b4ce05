//! Check operations: narrow a [`Value`] to an expected shape or fail with a
//! typed [`CheckError`](crate::error::CheckError).
//!
//! [`Checker`] is the entry point. It borrows a single value and offers one
//! operation per expected shape; composite shapes (arrays, classes, JSON
//! strings) delegate to the specialized [`ArrayChecker`], [`ClassChecker`]
//! and [`JsonChecker`] around the same value. A checker is a zero-cost
//! borrow, created per check and discarded afterwards.
//!
//! ```
//! use veris_checker::{Checker, Value};
//!
//! let value = Value::integer(42);
//! assert_eq!(Checker::new(&value).check_integer(), Ok(42));
//! assert!(Checker::new(&value).check_string().is_err());
//! ```
//!
//! Every operation is a pure, synchronous function of the borrowed value: no
//! coercion, no mutation, no partial success.

pub mod array;
pub mod class;
pub mod json;

pub use array::ArrayChecker;
pub use class::ClassChecker;
pub use json::JsonChecker;

use crate::collections::array::Entries;
use crate::collections::{Array, Object};
use crate::core::value::Value;
use crate::error::{CheckError, CheckResult};

/// Entry point for narrowing one dynamically-typed value.
#[derive(Debug, Clone, Copy)]
pub struct Checker<'a> {
    value: &'a Value,
}

impl<'a> Checker<'a> {
    /// Wrap a value for checking.
    #[must_use]
    pub const fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Narrow to a boolean.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for any other kind of value.
    pub fn check_boolean(&self) -> CheckResult<bool> {
        self.value
            .as_boolean()
            .ok_or_else(|| self.mismatch("boolean"))
    }

    /// Narrow to an integer. Numeric strings and floats do not pass.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for any other kind of value.
    pub fn check_integer(&self) -> CheckResult<i64> {
        self.value
            .as_integer()
            .ok_or_else(|| self.mismatch("integer"))
    }

    /// Narrow to a float. Integers do not pass.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for any other kind of value.
    pub fn check_float(&self) -> CheckResult<f64> {
        self.value.as_float().ok_or_else(|| self.mismatch("float"))
    }

    /// Narrow to a string.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for any other kind of value.
    pub fn check_string(&self) -> CheckResult<&'a str> {
        self.value.as_str().ok_or_else(|| self.mismatch("string"))
    }

    /// Narrow to a string or null.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for anything that is neither a
    /// string nor null.
    pub fn check_string_or_null(&self) -> CheckResult<Option<&'a str>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s.as_str())),
            _ => Err(self.mismatch("string")),
        }
    }

    /// Narrow to an object of any class.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for non-object values.
    pub fn check_object(&self) -> CheckResult<&'a Object> {
        self.value.as_object().ok_or_else(|| self.mismatch("object"))
    }

    /// Narrow to a keyed sequence and return its iteration view.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for values that cannot be iterated
    /// as a keyed sequence.
    pub fn check_iterable(&self) -> CheckResult<Entries<'a>> {
        self.value
            .entries()
            .ok_or_else(|| self.mismatch("iterable"))
    }

    /// Narrow to an array.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for non-array values.
    pub fn check_array(&self) -> CheckResult<&'a Array> {
        ArrayChecker::new(self.value).check()
    }

    /// Narrow to an instance of `class_name` (subclasses pass).
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for non-objects and
    /// `CheckError::ClassMismatch` for objects of a different class.
    pub fn check_class(&self, class_name: &str) -> CheckResult<&'a Object> {
        ClassChecker::new(self.value).check_given(class_name)
    }

    /// Narrow to a generic record: an object with no declared class.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for anything but a generic record.
    pub fn check_record(&self) -> CheckResult<&'a Object> {
        ClassChecker::new(self.value).check_record()
    }

    /// Narrow to a string holding syntactically valid JSON.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for non-strings and for strings
    /// that do not parse as JSON.
    pub fn check_json(&self) -> CheckResult<&'a str> {
        JsonChecker::new(self.value).check()
    }

    fn mismatch(&self, expected: &str) -> CheckError {
        CheckError::type_mismatch(expected, self.value.kind_name())
    }
}
