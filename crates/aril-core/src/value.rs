//! Runtime values crossing the engine boundary
//!
//! Arguments to `evaluate` and results coming back from the engine are
//! carried as `Value`. The frontend itself never computes with these;
//! they only travel through the adapter.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A runtime value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The null value
    Nil,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 covers both int and float inputs)
    Number(f64),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<Value>),
}

impl Value {
    /// The numeric content, or a type error
    pub fn as_number(&self) -> Result<f64, CoreError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(CoreError::TypeError(format!(
                "expected a number, found {other}"
            ))),
        }
    }

    /// The boolean content, or a type error
    pub fn as_bool(&self) -> Result<bool, CoreError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(CoreError::TypeError(format!(
                "expected a boolean, found {other}"
            ))),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value in target-IR literal syntax
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(true) => write!(f, "true"),
            Value::Bool(false) => write!(f, "false"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Array(items) => {
                write!(f, "make_list(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Number(42.0).to_string(), "42");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::String("hi".to_string()).to_string(), "\"hi\"");
    }

    #[test]
    fn test_display_array() {
        let value = Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ]);
        assert_eq!(value.to_string(), "make_list(1, 2, 3)");
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Value::Number(7.0).as_number().unwrap(), 7.0);
        assert!(Value::Bool(true).as_number().is_err());
    }

    #[test]
    fn test_as_bool() {
        assert!(Value::Bool(true).as_bool().unwrap());
        assert!(Value::Number(1.0).as_bool().is_err());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3.5), Value::Number(3.5));
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(Value::from("s"), Value::String("s".to_string()));
    }
}
