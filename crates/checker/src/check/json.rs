//! JSON syntax checks for string values.

use tracing::trace;

use crate::check::Checker;
use crate::core::value::Value;
use crate::error::{CheckError, CheckResult};

/// Checker for JSON-encoded string values.
#[derive(Debug, Clone, Copy)]
pub struct JsonChecker<'a> {
    value: &'a Value,
}

impl<'a> JsonChecker<'a> {
    /// Wrap a value for JSON checking.
    #[must_use]
    pub const fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Validate the value is a string holding syntactically valid JSON and
    /// return the original string unchanged. Syntax only; the parsed
    /// structure is discarded, so there is no re-serialization drift.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` for non-strings and for strings
    /// that fail to parse.
    pub fn check(&self) -> CheckResult<&'a str> {
        let input = Checker::new(self.value).check_string()?;

        if let Err(error) = serde_json::from_str::<serde_json::Value>(input) {
            trace!(%error, "json validation failed");
            return Err(CheckError::type_mismatch("json-string", "non-json-string"));
        }

        Ok(input)
    }

    /// Check whether the value is a string holding syntactically valid JSON.
    ///
    /// Total predicate: false for non-strings and unparsable strings, never
    /// an error.
    #[must_use]
    pub fn is_json(&self) -> bool {
        match self.value.as_str() {
            Some(input) => serde_json::from_str::<serde_json::Value>(input).is_ok(),
            None => false,
        }
    }
}
