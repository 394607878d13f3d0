//! Read results and the proxy enum returned by `wrap`

use crate::mapping::MappingProxy;
use crate::options::ProxyOptions;
use crate::sequence::SequenceProxy;
use dictwrap_value::{DictWrapError, Result, Value, ValueKind};
use std::rc::Rc;

/// Result of reading a field or an index.
///
/// Compound values come back as proxies over the same container; scalars
/// come back as plain values.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Nested mapping
    Mapping(MappingProxy),
    /// Nested sequence
    Sequence(SequenceProxy),
    /// Null, boolean, number or string
    Scalar(Value),
}

impl Field {
    /// Wrap a value read from a container, forwarding the parent's options
    pub(crate) fn wrap_value(value: Value, options: &Rc<ProxyOptions>) -> Self {
        match value {
            Value::Object(m) => Field::Mapping(MappingProxy::from_shared(m, Rc::clone(options))),
            Value::Array(s) => Field::Sequence(SequenceProxy::from_shared(s, Rc::clone(options))),
            scalar => Field::Scalar(scalar),
        }
    }

    /// Kind of the underlying value
    pub fn kind(&self) -> ValueKind {
        match self {
            Field::Mapping(_) => ValueKind::Object,
            Field::Sequence(_) => ValueKind::Array,
            Field::Scalar(value) => value.kind(),
        }
    }

    /// The mapping proxy, if this field is one
    pub fn as_mapping(&self) -> Option<&MappingProxy> {
        match self {
            Field::Mapping(proxy) => Some(proxy),
            _ => None,
        }
    }

    /// The sequence proxy, if this field is one
    pub fn as_sequence(&self) -> Option<&SequenceProxy> {
        match self {
            Field::Sequence(proxy) => Some(proxy),
            _ => None,
        }
    }

    /// The scalar value, if this field is not a container
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Field::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Take the mapping proxy, failing for any other kind
    pub fn into_mapping(self) -> Result<MappingProxy> {
        match self {
            Field::Mapping(proxy) => Ok(proxy),
            other => Err(DictWrapError::UnsupportedType {
                expected: "MappingProxy",
                found: other.type_name(),
            }),
        }
    }

    /// Take the sequence proxy, failing for any other kind
    pub fn into_sequence(self) -> Result<SequenceProxy> {
        match self {
            Field::Sequence(proxy) => Ok(proxy),
            other => Err(DictWrapError::UnsupportedType {
                expected: "SequenceProxy",
                found: other.type_name(),
            }),
        }
    }

    /// String scalar
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    /// Integer scalar that fits in an `i64`
    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Value::as_i64)
    }

    /// Numeric scalar as an `f64`
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Value::as_f64)
    }

    /// Boolean scalar
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Value::as_bool)
    }

    /// Returns true for a null scalar
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Scalar(Value::Null))
    }

    /// Read `name` from a nested mapping
    pub fn field(&self, name: &str) -> Result<Field> {
        match self {
            Field::Mapping(proxy) => proxy.get(name),
            other => Err(DictWrapError::UnsupportedType {
                expected: "MappingProxy",
                found: other.type_name(),
            }),
        }
    }

    /// Read `index` from a nested sequence
    pub fn item(&self, index: usize) -> Result<Field> {
        match self {
            Field::Sequence(proxy) => proxy.get(index),
            other => Err(DictWrapError::UnsupportedType {
                expected: "SequenceProxy",
                found: other.type_name(),
            }),
        }
    }

    /// The plain value: the shared container handle or the scalar
    pub fn into_value(self) -> Value {
        match self {
            Field::Mapping(proxy) => Value::Object(proxy.to_plain()),
            Field::Sequence(proxy) => Value::Array(proxy.to_plain()),
            Field::Scalar(value) => value,
        }
    }
}

impl PartialEq<Value> for Field {
    fn eq(&self, other: &Value) -> bool {
        match self {
            Field::Mapping(proxy) => proxy == other,
            Field::Sequence(proxy) => proxy == other,
            Field::Scalar(value) => value == other,
        }
    }
}

impl PartialEq<&str> for Field {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl From<Field> for Value {
    fn from(field: Field) -> Self {
        field.into_value()
    }
}

impl From<Proxy> for Field {
    fn from(proxy: Proxy) -> Self {
        match proxy {
            Proxy::Mapping(p) => Field::Mapping(p),
            Proxy::Sequence(p) => Field::Sequence(p),
        }
    }
}

/// A proxy over either kind of container, as produced by [`wrap`](crate::wrap)
#[derive(Debug, Clone, PartialEq)]
pub enum Proxy {
    /// Proxy over a mapping
    Mapping(MappingProxy),
    /// Proxy over a sequence
    Sequence(SequenceProxy),
}

impl Proxy {
    /// The mapping proxy, if this is one
    pub fn as_mapping(&self) -> Option<&MappingProxy> {
        match self {
            Proxy::Mapping(proxy) => Some(proxy),
            Proxy::Sequence(_) => None,
        }
    }

    /// The sequence proxy, if this is one
    pub fn as_sequence(&self) -> Option<&SequenceProxy> {
        match self {
            Proxy::Sequence(proxy) => Some(proxy),
            Proxy::Mapping(_) => None,
        }
    }

    /// Take the mapping proxy, failing for a sequence
    pub fn into_mapping(self) -> Result<MappingProxy> {
        Field::from(self).into_mapping()
    }

    /// Take the sequence proxy, failing for a mapping
    pub fn into_sequence(self) -> Result<SequenceProxy> {
        Field::from(self).into_sequence()
    }

    /// Options this proxy forwards to its children
    pub fn options(&self) -> &ProxyOptions {
        match self {
            Proxy::Mapping(proxy) => proxy.options(),
            Proxy::Sequence(proxy) => proxy.options(),
        }
    }

    /// The wrapped container handle
    pub fn to_plain(&self) -> Value {
        match self {
            Proxy::Mapping(proxy) => Value::Object(proxy.to_plain()),
            Proxy::Sequence(proxy) => Value::Array(proxy.to_plain()),
        }
    }

    /// Render the wrapped container as JSON text
    pub fn to_text(&self, pretty: bool) -> Result<String> {
        match self {
            Proxy::Mapping(proxy) => proxy.to_text(pretty),
            Proxy::Sequence(proxy) => proxy.to_text(pretty),
        }
    }
}

impl From<MappingProxy> for Proxy {
    fn from(proxy: MappingProxy) -> Self {
        Proxy::Mapping(proxy)
    }
}

impl From<SequenceProxy> for Proxy {
    fn from(proxy: SequenceProxy) -> Self {
        Proxy::Sequence(proxy)
    }
}

impl From<Proxy> for Value {
    fn from(proxy: Proxy) -> Self {
        proxy.to_plain()
    }
}

impl PartialEq<Value> for Proxy {
    fn eq(&self, other: &Value) -> bool {
        match self {
            Proxy::Mapping(proxy) => proxy == other,
            Proxy::Sequence(proxy) => proxy == other,
        }
    }
}

/// Anything the structural helpers can be pointed at.
///
/// Only mapping proxies accept structural changes; everything else reports
/// its type name in an `UnsupportedType` error.
pub trait ProxyLike {
    /// The mapping proxy, if this is one
    fn as_mapping_proxy(&self) -> Option<&MappingProxy>;
    /// Name reported in errors
    fn type_name(&self) -> &'static str;
}

impl ProxyLike for MappingProxy {
    fn as_mapping_proxy(&self) -> Option<&MappingProxy> {
        Some(self)
    }

    fn type_name(&self) -> &'static str {
        "MappingProxy"
    }
}

impl ProxyLike for SequenceProxy {
    fn as_mapping_proxy(&self) -> Option<&MappingProxy> {
        None
    }

    fn type_name(&self) -> &'static str {
        "SequenceProxy"
    }
}

impl ProxyLike for Proxy {
    fn as_mapping_proxy(&self) -> Option<&MappingProxy> {
        self.as_mapping()
    }

    fn type_name(&self) -> &'static str {
        match self {
            Proxy::Mapping(proxy) => proxy.type_name(),
            Proxy::Sequence(proxy) => proxy.type_name(),
        }
    }
}

impl ProxyLike for Field {
    fn as_mapping_proxy(&self) -> Option<&MappingProxy> {
        self.as_mapping()
    }

    fn type_name(&self) -> &'static str {
        match self {
            Field::Mapping(proxy) => proxy.type_name(),
            Field::Sequence(proxy) => proxy.type_name(),
            Field::Scalar(value) => value.kind().name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options() -> Rc<ProxyOptions> {
        Rc::new(ProxyOptions::new().with_strict(true))
    }

    #[test]
    fn wrap_value_dispatches_on_kind() {
        let nested = Value::from(json!({"a": {"b": 1}, "c": [1], "d": "x"}));
        let map = nested.as_mapping().unwrap();

        let field = Field::wrap_value(map.get("a").unwrap(), &options());
        assert!(field.as_mapping().unwrap().is_strict());

        let field = Field::wrap_value(map.get("c").unwrap(), &options());
        assert_eq!(field.kind(), ValueKind::Array);

        let field = Field::wrap_value(map.get("d").unwrap(), &options());
        assert_eq!(field, "x");
    }

    #[test]
    fn into_mapping_rejects_scalars() {
        let field = Field::Scalar(Value::from(3));
        let err = field.into_mapping().unwrap_err();
        assert!(matches!(
            err,
            DictWrapError::UnsupportedType {
                expected: "MappingProxy",
                found: "number"
            }
        ));
    }

    #[test]
    fn into_value_returns_the_shared_handle() {
        let data = Value::from(json!({"k": [1, 2]}));
        let field = Field::wrap_value(data.clone(), &options());
        assert!(field.into_value().ptr_eq(&data));
    }

    #[test]
    fn chaining_helpers_report_wrong_kind() {
        let field = Field::Scalar(Value::from("x"));
        assert!(matches!(
            field.field("name"),
            Err(DictWrapError::UnsupportedType { .. })
        ));
        assert!(matches!(
            field.item(0),
            Err(DictWrapError::UnsupportedType { .. })
        ));
    }
}
