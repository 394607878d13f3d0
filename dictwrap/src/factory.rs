//! Factory functions and structural helpers

use crate::field::{Proxy, ProxyLike};
use crate::mapping::MappingProxy;
use crate::options::ProxyOptions;
use crate::sequence::SequenceProxy;
use dictwrap_value::{codec, DictWrapError, Result, Value};
use tracing::trace;

/// Wrap a mapping or sequence in the matching proxy.
///
/// The proxy shares `data`'s container; nothing is copied.
pub fn wrap(data: &Value, options: ProxyOptions) -> Result<Proxy> {
    match data {
        Value::Object(m) => Ok(Proxy::Mapping(MappingProxy::with_options(m.clone(), options))),
        Value::Array(s) => Ok(Proxy::Sequence(SequenceProxy::with_options(s.clone(), options))),
        other => Err(DictWrapError::UnsupportedType {
            expected: "object or array",
            found: other.kind().name(),
        }),
    }
}

/// Plain value behind a proxy; plain values pass through unchanged
pub fn unwrap(value: impl Into<Value>) -> Value {
    value.into()
}

/// Parse JSON text and wrap the resulting container
pub fn from_text(text: &str, options: ProxyOptions) -> Result<Proxy> {
    let data = codec::parse(text)?;
    wrap(&data, options)
}

/// Insert `name → value` into the mapping behind `target`.
///
/// This is the only way to introduce a key. It bypasses both the mutability
/// gate and strict checking, and uses `name` verbatim.
pub fn add_field<P>(target: &P, name: &str, value: impl Into<Value>) -> Result<()>
where
    P: ProxyLike + ?Sized,
{
    let proxy = mapping_target(target)?;
    proxy.as_plain().insert(name, value);
    trace!(field = name, "field added");
    Ok(())
}

/// Delete `name` from the mapping behind `target`, returning its value
pub fn remove_field<P>(target: &P, name: &str) -> Result<Value>
where
    P: ProxyLike + ?Sized,
{
    let proxy = mapping_target(target)?;
    let removed = proxy
        .as_plain()
        .remove(name)
        .ok_or_else(|| DictWrapError::NoSuchField(name.to_string()))?;
    trace!(field = name, "field removed");
    Ok(removed)
}

fn mapping_target<P>(target: &P) -> Result<&MappingProxy>
where
    P: ProxyLike + ?Sized,
{
    target
        .as_mapping_proxy()
        .ok_or_else(|| DictWrapError::UnsupportedType {
            expected: "MappingProxy",
            found: target.type_name(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrap_rejects_scalars() {
        for scalar in [Value::Null, Value::from(1), Value::from("x"), Value::from(false)] {
            assert!(matches!(
                wrap(&scalar, ProxyOptions::default()),
                Err(DictWrapError::UnsupportedType { .. })
            ));
        }
    }

    #[test]
    fn unwrap_passes_plain_values_through() {
        assert_eq!(unwrap(Value::from(5)), Value::from(5));
        let data = Value::from(json!([1]));
        assert!(unwrap(data.clone()).ptr_eq(&data));
    }

    #[test]
    fn structural_helpers_require_a_mapping() {
        let proxy = wrap(&Value::from(json!(["a"])), ProxyOptions::default()).unwrap();
        let err = add_field(&proxy, "x", 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported type: expected MappingProxy, found SequenceProxy"
        );
        assert!(remove_field(&proxy, "x").is_err());
    }

    #[test]
    fn add_field_ignores_immutability_and_strictness() {
        let data = Value::from(json!({"a": 1}));
        let options = ProxyOptions::new().with_mutable(false).with_strict(true);
        let proxy = wrap(&data, options).unwrap();
        add_field(&proxy, "b", "two").unwrap();
        add_field(&proxy, "a", "one").unwrap();
        assert_eq!(data.to_json(), json!({"a": "one", "b": "two"}));
    }

    #[test]
    fn remove_field_uses_the_name_verbatim() {
        let data = Value::from(json!({"@timestamp": "now"}));
        let proxy = wrap(&data, ProxyOptions::new().with_key_prefixes("@")).unwrap();
        assert!(matches!(
            remove_field(&proxy, "timestamp"),
            Err(DictWrapError::NoSuchField(_))
        ));
        assert_eq!(remove_field(&proxy, "@timestamp").unwrap(), "now");
    }

    #[test]
    fn from_text_wraps_parsed_data() {
        let proxy = from_text(r#"{"name": "A"}"#, ProxyOptions::default()).unwrap();
        assert_eq!(proxy.into_mapping().unwrap().get("name").unwrap(), "A");
        assert!(from_text("3", ProxyOptions::default()).is_err());
    }
}
