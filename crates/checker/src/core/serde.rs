//! Optional serde support for [`Value`].
//!
//! Values serialize through their JSON form (see
//! [`ValueRefExt::to_json`](crate::core::convert::ValueRefExt)), so class
//! identity on objects is not round-tripped; deserialized object-shaped data
//! comes back as associative arrays.

#![cfg(feature = "serde")]

use crate::core::convert::ValueRefExt;
use crate::core::value::Value;

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
