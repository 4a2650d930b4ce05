//! Runtime type checking and value narrowing for dynamically-typed data.
//!
//! Decoded configuration, JSON payloads and other loosely-typed sources all
//! arrive as a [`Value`] of unknown shape. This crate verifies such a value
//! matches an expected shape - scalar, array structure, object class, or
//! JSON-encoded string - and hands it back narrowed to that shape, or fails
//! with a precise, typed [`CheckError`].
//!
//! ```
//! use veris_checker::{json, ArrayChecker, CheckError, Value};
//!
//! let config = Value::from(json!({
//!     "name": "worker",
//!     "retries": 3,
//!     "tags": ["a", "b"],
//! }));
//!
//! let checker = ArrayChecker::new(&config);
//! assert_eq!(checker.check_index_string("name"), Ok("worker"));
//! assert_eq!(checker.check_index_integer("retries"), Ok(3));
//! assert_eq!(checker.check_index_array_string("tags"), Ok(vec!["a", "b"]));
//!
//! // Failures carry a discriminable kind and the labels to explain it.
//! assert_eq!(
//!     checker.check_index_integer("name"),
//!     Err(CheckError::type_mismatch("integer", "string")),
//! );
//! ```
//!
//! Checks narrow, they never coerce: a numeric string is not an integer and
//! an integer is not a float. Composed checks fail with whichever step failed
//! first, so a missing key is always reported as
//! [`CheckError::KeyNotFound`], never as a type mismatch.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

pub mod check;
pub mod collections;
pub mod core;
pub mod error;

pub use crate::check::{ArrayChecker, Checker, ClassChecker, JsonChecker};
pub use crate::collections::{Array, ClassDescriptor, Entries, Object, RECORD_CLASS};
pub use crate::core::convert::ValueRefExt;
pub use crate::core::key::Key;
pub use crate::core::kind::ValueKind;
pub use crate::core::value::Value;
pub use crate::error::{CheckError, CheckResult};

// Re-export serde_json's json! macro for convenient value construction.
pub use serde_json::json;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        Array, ArrayChecker, CheckError, CheckResult, Checker, ClassChecker, ClassDescriptor,
        JsonChecker, Key, Object, Value, ValueKind, ValueRefExt,
    };

    pub use crate::json;
}
