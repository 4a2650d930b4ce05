//! Core building blocks of the value model.
//!
//! - [`value`] - the [`Value`] enum, the dynamic value every check operates on
//! - [`kind`] - runtime shape classification used in error labels
//! - [`key`] - the integer-or-string array key type
//! - [`convert`] - `From` impls and the `serde_json` bridge
//! - [`display`] - human-readable rendering
//!
//! Most users interact with the re-exports from the crate root; this module
//! provides direct access for advanced use cases.

pub mod convert;
pub mod display;
pub mod key;
pub mod kind;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;

pub use convert::ValueRefExt;
pub use key::Key;
pub use kind::ValueKind;
pub use value::Value;
