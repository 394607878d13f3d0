//! Value kind enumeration

use crate::value::Value;
use std::fmt;

/// The closed set of JSON value kinds.
///
/// Strict writes compare kinds rather than concrete Rust types, so integers
/// and floats are both [`ValueKind::Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// JSON `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Integer or floating point number
    Number,
    /// String value
    String,
    /// Mapping of string keys to values
    Object,
    /// Ordered sequence of values
    Array,
}

impl ValueKind {
    /// Kind of the given value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Human-readable name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        }
    }

    /// Whether values of this kind get wrapped in a proxy on read
    pub fn is_compound(self) -> bool {
        matches!(self, ValueKind::Object | ValueKind::Array)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Mapping, Sequence};

    #[test]
    fn kind_of_each_variant() {
        let cases = vec![
            (Value::Null, ValueKind::Null),
            (Value::from(true), ValueKind::Bool),
            (Value::from(3), ValueKind::Number),
            (Value::try_from(2.5).unwrap(), ValueKind::Number),
            (Value::from("x"), ValueKind::String),
            (Value::Object(Mapping::new()), ValueKind::Object),
            (Value::Array(Sequence::new()), ValueKind::Array),
        ];

        for (value, expected) in cases {
            assert_eq!(ValueKind::of(&value), expected);
        }
    }

    #[test]
    fn kind_names() {
        assert_eq!(ValueKind::Bool.to_string(), "boolean");
        assert_eq!(ValueKind::Object.name(), "object");
        assert!(ValueKind::Array.is_compound());
        assert!(!ValueKind::String.is_compound());
    }
}
