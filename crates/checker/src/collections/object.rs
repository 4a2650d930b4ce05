//! Nominally-typed objects.
//!
//! [`Object`] models object-shaped values: a [`ClassDescriptor`] naming the
//! object's class (with its parent chain) plus ordered named fields. Class
//! membership is decided by walking the descriptor chain, so an instance of a
//! subclass passes a check against any of its ancestors.
//!
//! The designated *generic record* class - the shape of ad-hoc decoded data
//! with no declared type - is a single static descriptor; [`Object::record`]
//! constructs instances of it and [`Object::is_record`] recognizes them.

use std::sync::Arc;

use im::Vector;
use once_cell::sync::Lazy;

use crate::core::value::Value;

/// Name of the designated generic record class.
pub const RECORD_CLASS: &str = "record";

static RECORD: Lazy<Arc<ClassDescriptor>> = Lazy::new(|| {
    Arc::new(ClassDescriptor {
        name: RECORD_CLASS.to_string(),
        parent: None,
    })
});

/// A class identity: a name plus an optional parent class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    name: String,
    parent: Option<Arc<ClassDescriptor>>,
}

impl ClassDescriptor {
    /// Declare a class with no parent.
    pub fn base(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            parent: None,
        })
    }

    /// Declare a class extending `parent`.
    pub fn extends(name: impl Into<String>, parent: &Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            parent: Some(Arc::clone(parent)),
        })
    }

    /// The designated generic record class.
    #[must_use]
    pub fn record() -> Arc<Self> {
        Arc::clone(&RECORD)
    }

    /// Get the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the parent class, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Iterate this class and its ancestors, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &Self> {
        let mut next = Some(self);
        std::iter::from_fn(move || {
            let current = next?;
            next = current.parent.as_deref();
            Some(current)
        })
    }
}

/// An object value: class identity plus ordered named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: Arc<ClassDescriptor>,
    fields: Vector<(String, Value)>,
}

impl Default for Object {
    fn default() -> Self {
        Self::record()
    }
}

impl Object {
    /// Create an empty generic record.
    #[must_use]
    pub fn record() -> Self {
        Self {
            class: ClassDescriptor::record(),
            fields: Vector::new(),
        }
    }

    /// Create a generic record from named fields.
    pub fn record_from<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            class: ClassDescriptor::record(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Create an instance of `class` with no fields.
    #[must_use]
    pub fn instance(class: &Arc<ClassDescriptor>) -> Self {
        Self {
            class: Arc::clone(class),
            fields: Vector::new(),
        }
    }

    /// Create an instance of `class` with named fields.
    pub fn instance_with<I, K, V>(class: &Arc<ClassDescriptor>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            class: Arc::clone(class),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Get the object's class.
    #[must_use]
    pub fn class(&self) -> &ClassDescriptor {
        &self.class
    }

    /// Get the object's class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    /// Check if this object is the designated generic record type itself
    /// (not a subtype of it).
    #[must_use]
    pub fn is_record(&self) -> bool {
        Arc::ptr_eq(&self.class, &RECORD)
    }

    /// Check if this object is an instance of `class_name`, including
    /// instances of its subclasses.
    #[must_use]
    pub fn is_instance_of(&self, class_name: &str) -> bool {
        self.class.lineage().any(|class| class.name() == class_name)
    }

    /// Get a field value by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Check if a field exists.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Set a field (returns a new object, original unchanged).
    #[must_use = "immutable methods return a new instance"]
    pub fn set(&self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let field = field.into();
        let value = value.into();
        match self.fields.iter().position(|(name, _)| *name == field) {
            Some(index) => Self {
                class: Arc::clone(&self.class),
                fields: self.fields.update(index, (field, value)),
            },
            None => {
                let mut fields = self.fields.clone();
                fields.push_back((field, value));
                Self {
                    class: Arc::clone(&self.class),
                    fields,
                }
            }
        }
    }

    /// Iterate over `(name, value)` fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Get the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
