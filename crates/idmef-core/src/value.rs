//! Typed scalar values.

use std::fmt;

use thiserror::Error;

use crate::registry::ScalarType;

/// Failure to coerce a textual value into a declared scalar type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("'{0}' is not an unsigned integer")]
    NotUint(String),
    #[error("'{0}' is not a declared enumeration label")]
    UnknownLabel(String),
}

/// A scalar value stored at a leaf of the object tree.
///
/// Enumeration fields store the label text as [`Value::Str`]; the label set
/// is enforced at coercion time against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Uint(u32),
}

impl Value {
    /// Coerce caller-supplied text against the declared type of a field.
    pub fn coerce(text: &str, ty: ScalarType) -> Result<Value, CoerceError> {
        match ty {
            ScalarType::Str => Ok(Value::Str(text.to_owned())),
            ScalarType::Uint32 => text
                .parse::<u32>()
                .map(Value::Uint)
                .map_err(|_| CoerceError::NotUint(text.to_owned())),
            ScalarType::Enum(labels) => {
                if labels.contains(&text) {
                    Ok(Value::Str(text.to_owned()))
                } else {
                    Err(CoerceError::UnknownLabel(text.to_owned()))
                }
            }
        }
    }

    /// Textual form, as printed in dumps and returned to callers.
    pub fn as_text(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Uint(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Uint(n) => write!(f, "{n}"),
        }
    }
}
