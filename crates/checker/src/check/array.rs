//! Structural checks for array-shaped values.

use tracing::trace;

use crate::check::{Checker, ClassChecker};
use crate::collections::{Array, Object};
use crate::core::key::Key;
use crate::core::value::Value;
use crate::error::{CheckError, CheckResult};

/// Checker for array-shaped values.
///
/// Every operation first requires the wrapped value to be an array and fails
/// with `TypeMismatch("array", ..)` otherwise. Element checks fail fast on the
/// first offending element. Indexed accessors compose
/// [`check_index`](Self::check_index) with the matching narrowing check, so a
/// missing key always takes precedence over a type mismatch.
#[derive(Debug, Clone, Copy)]
pub struct ArrayChecker<'a> {
    value: &'a Value,
}

impl<'a> ArrayChecker<'a> {
    /// Wrap a value for array checking.
    #[must_use]
    pub const fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Validate the value is an array and return it unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for non-array values.
    pub fn check(&self) -> CheckResult<&'a Array> {
        self.array()
    }

    /// Narrow to an associative array.
    ///
    /// Fails when the key sequence is exactly `0..len`, which also covers the
    /// empty array: its key sequence trivially equals the empty integer range,
    /// so an empty array counts as sequential and is rejected here.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for non-arrays and for sequential
    /// arrays.
    pub fn check_associative(&self) -> CheckResult<&'a Array> {
        let array = self.array()?;
        if array.is_sequential() {
            return Err(CheckError::type_mismatch(
                "array-associative",
                "array-sequential",
            ));
        }
        Ok(array)
    }

    /// Narrow to a sequential array: keys exactly `0..len` in order.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for non-arrays and for associative
    /// arrays.
    pub fn check_sequential(&self) -> CheckResult<&'a Array> {
        let array = self.array()?;
        if !array.is_sequential() {
            return Err(CheckError::type_mismatch(
                "array-sequential",
                "array-associative",
            ));
        }
        Ok(array)
    }

    /// Narrow to a flat array: every element a scalar or null.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` carrying the kind of the first
    /// composite element.
    pub fn check_flat(&self) -> CheckResult<&'a Array> {
        let array = self.array()?;
        for (_, value) in array.iter() {
            if value.kind().is_collection() {
                return Err(CheckError::type_mismatch("flat", value.kind_name()));
            }
        }
        Ok(array)
    }

    /// Narrow to an array of strings.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for the first non-string element.
    pub fn check_string(&self) -> CheckResult<Vec<&'a str>> {
        let array = self.array()?;
        array
            .values()
            .map(|value| Checker::new(value).check_string())
            .collect()
    }

    /// Narrow to an array of strings or nulls.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for the first element that is
    /// neither a string nor null.
    pub fn check_string_or_null(&self) -> CheckResult<Vec<Option<&'a str>>> {
        let array = self.array()?;
        array
            .values()
            .map(|value| Checker::new(value).check_string_or_null())
            .collect()
    }

    /// Narrow to an array of instances of `class_name`.
    ///
    /// # Errors
    ///
    /// Propagates the class checker's failure for the first offending
    /// element: `TypeMismatch` for non-objects, `ClassMismatch` for objects
    /// of a different class.
    pub fn check_class(&self, class_name: &str) -> CheckResult<Vec<&'a Object>> {
        let array = self.array()?;
        array
            .values()
            .map(|value| ClassChecker::new(value).check_given(class_name))
            .collect()
    }

    /// Treat the value as a sequence of rows and project each row to
    /// `filter_keys`.
    ///
    /// Every row must itself be an array. With empty `filter_keys` the rows
    /// are returned unchanged; otherwise each row is reduced to exactly the
    /// listed keys, in `filter_keys` order. The projection is strict per row.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for the first non-array row and
    /// `CheckError::KeyNotFound` for the first listed key missing from a row.
    pub fn check_rows(&self, filter_keys: &[&str]) -> CheckResult<Vec<Array>> {
        let array = self.array()?;
        let mut rows = Vec::with_capacity(array.len());
        for (_, value) in array.iter() {
            let row = match value.as_array() {
                Some(row) => row,
                None => return Err(CheckError::type_mismatch("array", value.kind_name())),
            };

            if filter_keys.is_empty() {
                rows.push(row.clone());
                continue;
            }

            let mut projected = Array::new();
            for &filter_key in filter_keys {
                let key = Key::from(filter_key);
                match row.get(&key) {
                    Some(field) => projected = projected.insert(key, field.clone()),
                    None => return Err(CheckError::key_not_found(key)),
                }
            }
            rows.push(projected);
        }
        trace!(rows = rows.len(), keys = filter_keys.len(), "validated row array");
        Ok(rows)
    }

    /// Look up `key` and return the raw sub-value, with no narrowing.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` when the key is absent. The lookup
    /// uses exact key identity; integer and string keys never match each
    /// other.
    pub fn check_index(&self, key: impl Into<Key>) -> CheckResult<&'a Value> {
        let key = key.into();
        let array = self.array()?;
        array
            .get(&key)
            .ok_or_else(|| CheckError::key_not_found(key))
    }

    // Indexed accessors: check_index composed with the matching narrowing
    // check. Existence is always verified before shape.

    /// Look up `key` and narrow the sub-value to an integer.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// scalar check's `TypeMismatch`.
    pub fn check_index_integer(&self, key: impl Into<Key>) -> CheckResult<i64> {
        Checker::new(self.check_index(key)?).check_integer()
    }

    /// Look up `key` and narrow the sub-value to a string.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// scalar check's `TypeMismatch`.
    pub fn check_index_string(&self, key: impl Into<Key>) -> CheckResult<&'a str> {
        Checker::new(self.check_index(key)?).check_string()
    }

    /// Look up `key` and narrow the sub-value to a string or null.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// scalar check's `TypeMismatch`.
    pub fn check_index_string_or_null(
        &self,
        key: impl Into<Key>,
    ) -> CheckResult<Option<&'a str>> {
        Checker::new(self.check_index(key)?).check_string_or_null()
    }

    /// Look up `key` and validate the sub-value is an array.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// array check's `TypeMismatch`.
    pub fn check_index_array(&self, key: impl Into<Key>) -> CheckResult<&'a Array> {
        ArrayChecker::new(self.check_index(key)?).check()
    }

    /// Look up `key` and narrow the sub-value to an associative array.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// associative check's `TypeMismatch`.
    pub fn check_index_array_associative(&self, key: impl Into<Key>) -> CheckResult<&'a Array> {
        ArrayChecker::new(self.check_index(key)?).check_associative()
    }

    /// Look up `key` and narrow the sub-value to a sequential array.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// sequential check's `TypeMismatch`.
    pub fn check_index_array_sequential(&self, key: impl Into<Key>) -> CheckResult<&'a Array> {
        ArrayChecker::new(self.check_index(key)?).check_sequential()
    }

    /// Look up `key` and narrow the sub-value to a flat array.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// flat check's `TypeMismatch`.
    pub fn check_index_array_flat(&self, key: impl Into<Key>) -> CheckResult<&'a Array> {
        ArrayChecker::new(self.check_index(key)?).check_flat()
    }

    /// Look up `key` and narrow the sub-value to an array of strings.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// string-array check's `TypeMismatch`.
    pub fn check_index_array_string(&self, key: impl Into<Key>) -> CheckResult<Vec<&'a str>> {
        ArrayChecker::new(self.check_index(key)?).check_string()
    }

    /// Look up `key` and narrow the sub-value to an array of strings or
    /// nulls.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// element check's `TypeMismatch`.
    pub fn check_index_array_string_or_null(
        &self,
        key: impl Into<Key>,
    ) -> CheckResult<Vec<Option<&'a str>>> {
        ArrayChecker::new(self.check_index(key)?).check_string_or_null()
    }

    /// Look up `key` and narrow the sub-value to an array of instances of
    /// `class_name`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// class-array check's failure.
    pub fn check_index_array_class(
        &self,
        key: impl Into<Key>,
        class_name: &str,
    ) -> CheckResult<Vec<&'a Object>> {
        ArrayChecker::new(self.check_index(key)?).check_class(class_name)
    }

    /// Look up `key` and project the sub-value's rows to `filter_keys`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::KeyNotFound` for a missing key, otherwise the
    /// row check's failure.
    pub fn check_index_rows(
        &self,
        key: impl Into<Key>,
        filter_keys: &[&str],
    ) -> CheckResult<Vec<Array>> {
        ArrayChecker::new(self.check_index(key)?).check_rows(filter_keys)
    }

    fn array(&self) -> CheckResult<&'a Array> {
        self.value
            .as_array()
            .ok_or_else(|| CheckError::type_mismatch("array", self.value.kind_name()))
    }
}
