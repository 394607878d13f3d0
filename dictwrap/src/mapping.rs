//! Named-field proxy over a shared mapping
//!
//! Reads resolve the field name (optionally through key prefixes) and wrap
//! compound values lazily; writes go straight into the shared mapping after
//! the mutability, existence and strictness checks pass.

use crate::field::Field;
use crate::options::ProxyOptions;
use dictwrap_value::{codec, DictWrapError, Mapping, Result, Value};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Presents the keys of a shared mapping as named fields
#[derive(Debug, Clone)]
pub struct MappingProxy {
    data: Mapping,
    options: Rc<ProxyOptions>,
}

impl MappingProxy {
    /// Wrap `data` with default options
    pub fn new(data: Mapping) -> Self {
        Self::with_options(data, ProxyOptions::default())
    }

    /// Wrap `data` with the given options
    pub fn with_options(data: Mapping, options: ProxyOptions) -> Self {
        Self::from_shared(data, Rc::new(options))
    }

    pub(crate) fn from_shared(data: Mapping, options: Rc<ProxyOptions>) -> Self {
        Self { data, options }
    }

    /// Options shared with every proxy derived from this one
    pub fn options(&self) -> &ProxyOptions {
        &self.options
    }

    /// Returns true if writes must keep the stored kind
    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// Returns true if writes are allowed
    pub fn is_mutable(&self) -> bool {
        self.options.mutable
    }

    /// Prefixes tried when resolving field names
    pub fn key_prefixes(&self) -> &[String] {
        self.options.key_prefixes.as_slice()
    }

    /// Map a field name to the key it addresses.
    ///
    /// The first configured prefix whose prefixed name exists wins. When none
    /// match the name is returned unchanged, so a missing field is reported
    /// under the name the caller used.
    pub fn resolve_key(&self, name: &str) -> String {
        let map = self.data.borrow();
        self.options
            .key_prefixes
            .iter()
            .map(|prefix| format!("{prefix}{name}"))
            .find(|candidate| map.contains_key(candidate.as_str()))
            .unwrap_or_else(|| name.to_string())
    }

    /// Returns true if `name` resolves to an existing key
    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(&self.resolve_key(name))
    }

    /// Read a field
    pub fn get(&self, name: &str) -> Result<Field> {
        let key = self.resolve_key(name);
        let value = self
            .data
            .get(&key)
            .ok_or(DictWrapError::NoSuchField(key))?;
        Ok(Field::wrap_value(value, &self.options))
    }

    /// Replace the value of an existing field.
    ///
    /// Never creates keys; use [`add_field`](crate::add_field) for that.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if !self.options.mutable {
            debug!(field = name, "rejected write through immutable proxy");
            return Err(DictWrapError::Immutable("set field"));
        }

        let key = self.resolve_key(name);
        let current = self
            .data
            .get(&key)
            .ok_or_else(|| DictWrapError::NoSuchField(key.clone()))?;

        if self.options.strict {
            let expected = current.kind();
            let found = value.kind();
            if expected != found {
                debug!(field = %key, %expected, %found, "rejected strict write");
                return Err(DictWrapError::TypeMismatch {
                    field: key,
                    expected,
                    found,
                });
            }
        }

        trace!(field = %key, kind = %value.kind(), "field updated");
        self.data.insert(key, value);
        Ok(())
    }

    /// Keys of the underlying mapping, in insertion order
    pub fn field_names(&self) -> Vec<String> {
        self.data.keys()
    }

    /// Number of keys in the underlying mapping
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the mapping has no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The wrapped mapping handle (same container, no copy)
    pub fn to_plain(&self) -> Mapping {
        self.data.clone()
    }

    /// Borrow the wrapped mapping handle
    pub fn as_plain(&self) -> &Mapping {
        &self.data
    }

    /// Render the wrapped mapping as JSON text
    pub fn to_text(&self, pretty: bool) -> Result<String> {
        codec::render(&Value::Object(self.data.clone()), pretty)
    }
}

impl PartialEq for MappingProxy {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl PartialEq<Mapping> for MappingProxy {
    fn eq(&self, other: &Mapping) -> bool {
        self.data == *other
    }
}

impl PartialEq<Value> for MappingProxy {
    fn eq(&self, other: &Value) -> bool {
        other.as_mapping().is_some_and(|m| self.data == *m)
    }
}

impl PartialEq<MappingProxy> for Value {
    fn eq(&self, other: &MappingProxy) -> bool {
        other == self
    }
}

impl From<MappingProxy> for Value {
    fn from(proxy: MappingProxy) -> Self {
        Value::Object(proxy.data)
    }
}

impl fmt::Display for MappingProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_text(false).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictwrap_value::ValueKind;
    use serde_json::json;

    fn person() -> Mapping {
        Value::from(json!({
            "first_name": "Joe",
            "address": {"city": "Adair"},
            "skills": ["Magician"]
        }))
        .as_mapping()
        .cloned()
        .unwrap()
    }

    #[test]
    fn get_wraps_nested_containers() {
        let proxy = MappingProxy::new(person());
        assert_eq!(proxy.get("first_name").unwrap(), "Joe");
        assert!(proxy.get("address").unwrap().as_mapping().is_some());
        assert!(proxy.get("skills").unwrap().as_sequence().is_some());
    }

    #[test]
    fn get_missing_field_names_the_field() {
        let proxy = MappingProxy::new(person());
        let err = proxy.get("middle_name").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'MappingProxy' object has no field 'middle_name'"
        );
    }

    #[test]
    fn set_never_creates_keys() {
        let data = person();
        let proxy = MappingProxy::new(data.clone());
        assert!(matches!(
            proxy.set("middle_name", "the"),
            Err(DictWrapError::NoSuchField(name)) if name == "middle_name"
        ));
        assert!(!data.contains_key("middle_name"));
    }

    #[test]
    fn immutable_check_precedes_existence_check() {
        let proxy = MappingProxy::with_options(person(), ProxyOptions::new().with_mutable(false));
        assert!(matches!(
            proxy.set("middle_name", "the"),
            Err(DictWrapError::Immutable(_))
        ));
    }

    #[test]
    fn strict_set_reports_both_kinds() {
        let data = person();
        let proxy = MappingProxy::with_options(data.clone(), ProxyOptions::new().with_strict(true));
        let err = proxy.set("address", "1234 Failure St").unwrap_err();
        assert!(matches!(
            err,
            DictWrapError::TypeMismatch {
                expected: ValueKind::Object,
                found: ValueKind::String,
                ..
            }
        ));
        assert!(data.get("address").unwrap().as_mapping().is_some());
    }

    #[test]
    fn resolve_key_tries_prefixes_in_order() {
        let data: Mapping = [("$id", 1), ("@id", 2), ("name", 3)].into_iter().collect();
        let proxy =
            MappingProxy::with_options(data, ProxyOptions::new().with_key_prefixes(["@", "$"]));
        assert_eq!(proxy.resolve_key("id"), "@id");
        assert_eq!(proxy.resolve_key("name"), "name");
        assert_eq!(proxy.resolve_key("missing"), "missing");
        assert_eq!(proxy.get("id").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn equality_against_plain_values() {
        let data = person();
        let proxy = MappingProxy::new(data.clone());
        assert_eq!(proxy, data);
        assert_eq!(proxy, Value::Object(data.clone()));
        assert_ne!(proxy, Value::from(10));
        assert_ne!(proxy, Value::from(json!({"other": true})));
    }

    #[test]
    fn display_renders_compact_json() {
        let data: Mapping = [("a", 1)].into_iter().collect();
        assert_eq!(MappingProxy::new(data).to_string(), r#"{"a":1}"#);
    }
}
