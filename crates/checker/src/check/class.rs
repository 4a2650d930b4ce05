//! Nominal-type checks for object values.

use crate::collections::object::RECORD_CLASS;
use crate::collections::Object;
use crate::core::value::Value;
use crate::error::{CheckError, CheckResult};

/// Checker for object-shaped values.
#[derive(Debug, Clone, Copy)]
pub struct ClassChecker<'a> {
    value: &'a Value,
}

impl<'a> ClassChecker<'a> {
    /// Wrap a value for class checking.
    #[must_use]
    pub const fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Narrow to an instance of `class_name`.
    ///
    /// Membership is instance-of, not exact-type equality: an instance of a
    /// subclass of `class_name` passes, decided by walking the object's class
    /// descriptor chain.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` when the value is not an object at
    /// all, and `CheckError::ClassMismatch` when it is an object of a class
    /// outside `class_name`'s lineage.
    pub fn check_given(&self, class_name: &str) -> CheckResult<&'a Object> {
        let object = match self.value.as_object() {
            Some(object) => object,
            None => {
                return Err(CheckError::type_mismatch(
                    class_name,
                    self.value.kind_name(),
                ));
            }
        };

        if !object.is_instance_of(class_name) {
            return Err(CheckError::class_mismatch(class_name, object.class_name()));
        }

        Ok(object)
    }

    /// Narrow to a generic record: an object whose class is the designated
    /// record type itself.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for non-objects and for objects of
    /// any declared class.
    pub fn check_record(&self) -> CheckResult<&'a Object> {
        match self.value.as_object() {
            Some(object) if object.is_record() => Ok(object),
            _ => Err(CheckError::type_mismatch(
                RECORD_CLASS,
                self.value.kind_name(),
            )),
        }
    }
}
