//! Display implementations for [`Value`].

use std::fmt;

use crate::core::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),

            Value::Boolean(b) => write!(f, "{b}"),

            Value::Integer(i) => write!(f, "{i}"),

            Value::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() && fl.is_sign_positive() {
                    write!(f, "+Infinity")
                } else if fl.is_infinite() {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "{fl}")
                }
            }

            Value::Text(t) => write!(f, "{t}"),

            Value::Array(arr) if arr.is_sequential() => {
                write!(f, "[")?;
                let mut first = true;
                for value in arr.values() {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }

            Value::Array(arr) => {
                write!(f, "{{")?;
                let mut first = true;
                for (key, value) in arr.iter() {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }

            Value::Object(obj) => {
                write!(f, "{} {{", obj.class_name())?;
                let mut first = true;
                for (name, value) in obj.fields() {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
