//! JSON text codec
//!
//! Thin layer over `serde_json`. Pretty output uses 4-space indentation and
//! compact output uses minimal separators; both keep key insertion order.

use crate::error::{DictWrapError, Result};
use crate::value::{Mapping, Sequence, Value};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::PrettyFormatter;

/// Indentation used for pretty rendering
pub const PRETTY_INDENT: &[u8] = b"    ";

/// Parse JSON text into a shared value tree
pub fn parse(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Render a value as JSON text
pub fn render(value: &Value, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(serde_json::to_string(value)?);
    }

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(PRETTY_INDENT));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| DictWrapError::Internal(e.to_string()))
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Object(m) => m.serialize(serializer),
            Value::Array(s) => s.serialize(serializer),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let map = self.borrow();
        let mut state = serializer.serialize_map(Some(map.len()))?;
        for (key, value) in map.iter() {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let items = self.borrow();
        let mut state = serializer.serialize_seq(Some(items.len()))?;
        for item in items.iter() {
            state.serialize_element(item)?;
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
