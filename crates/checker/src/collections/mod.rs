//! Collection shapes: arrays and objects.

pub mod array;
pub mod object;

pub use array::{Array, Entries};
pub use object::{ClassDescriptor, Object, RECORD_CLASS};
