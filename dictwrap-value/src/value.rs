//! Shared JSON data model
//!
//! Compound values are reference-counted handles: cloning a [`Value`] that
//! holds an object or array clones the handle, not the container. Every
//! proxy built over a handle therefore sees (and makes) the same mutations
//! as the caller who owns it.

use crate::error::{DictWrapError, Result};
use crate::kind::ValueKind;
use indexmap::IndexMap;
use serde_json::Number;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Insertion-ordered key/value storage behind a [`Mapping`]
pub type Map = IndexMap<String, Value>;

/// A JSON value whose objects and arrays are shared handles
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// JSON `null`
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer or floating point number
    Number(Number),
    /// String value
    String(String),
    /// Shared handle to a mapping
    Object(Mapping),
    /// Shared handle to a sequence
    Array(Sequence),
}

impl Value {
    /// Kind of this value
    pub fn kind(&self) -> ValueKind {
        ValueKind::of(self)
    }

    /// Returns true for `null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric payload as i64, if representable
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Numeric payload as u64, if representable
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Numeric payload as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// String payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Mapping handle, if this is an object
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Sequence handle, if this is an array
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Array(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true when both values are handles to the same container.
    ///
    /// Scalars never share identity, so this is always false for them.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Copy this value into freshly allocated containers
    pub fn deep_clone(&self) -> Value {
        match self {
            Value::Object(m) => Value::Object(m.deep_clone()),
            Value::Array(s) => Value::Array(s.deep_clone()),
            scalar => scalar.clone(),
        }
    }

    /// Convert into an owned `serde_json::Value` tree
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Object(m) => serde_json::Value::Object(
                m.borrow()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::Array(s) => {
                serde_json::Value::Array(s.borrow().iter().map(Value::to_json).collect())
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

/// Integers compare exactly; anything involving a float compares as f64.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Shared handle to an insertion-ordered string-keyed mapping
#[derive(Clone, Default)]
pub struct Mapping(Rc<RefCell<Map>>);

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an existing map
    pub fn from_map(map: Map) -> Self {
        Self(Rc::new(RefCell::new(map)))
    }

    /// Returns true when both handles point at the same mapping
    pub fn ptr_eq(&self, other: &Mapping) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns true if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Value stored at `key`; compound values come back as shared handles
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Insert or replace `key`, returning the previous value
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        self.0.borrow_mut().insert(key, value)
    }

    /// Remove `key`, keeping the order of the remaining entries
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().shift_remove(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Borrow the underlying map.
    ///
    /// The borrow must be released before the mapping is mutated again.
    pub fn borrow(&self) -> Ref<'_, Map> {
        self.0.borrow()
    }

    /// Copy into a new, disconnected mapping
    pub fn deep_clone(&self) -> Mapping {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.deep_clone()))
            .collect()
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.borrow().iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Shared handle to an ordered sequence of values
#[derive(Clone, Default)]
pub struct Sequence(Rc<RefCell<Vec<Value>>>);

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an existing vector
    pub fn from_vec(items: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(items)))
    }

    /// Returns true when both handles point at the same sequence
    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Current length
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns true if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Element at `index`; compound elements come back as shared handles
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Replace the element at `index`, returning the old one.
    ///
    /// Returns `None` and leaves the sequence untouched when out of range.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let value = value.into();
        let mut items = self.0.borrow_mut();
        let slot = items.get_mut(index)?;
        Some(std::mem::replace(slot, value))
    }

    /// Append one element
    pub fn push(&self, value: impl Into<Value>) {
        let value = value.into();
        self.0.borrow_mut().push(value);
    }

    /// Append every element of `items`
    pub fn extend(&self, items: Vec<Value>) {
        self.0.borrow_mut().extend(items);
    }

    /// Index of the first element equal to `value`
    pub fn position(&self, value: &Value) -> Option<usize> {
        self.0.borrow().iter().position(|item| item == value)
    }

    /// Returns true if any element equals `value`
    pub fn contains(&self, value: &Value) -> bool {
        self.position(value).is_some()
    }

    /// Remove the element at `index`, shifting the rest left
    pub fn remove(&self, index: usize) -> Option<Value> {
        let mut items = self.0.borrow_mut();
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Remove the first element equal to `value`
    pub fn remove_first(&self, value: &Value) -> Option<Value> {
        let index = self.position(value)?;
        self.remove(index)
    }

    /// Borrow the underlying vector.
    ///
    /// The borrow must be released before the sequence is mutated again.
    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    /// Copy into a new, disconnected sequence
    pub fn deep_clone(&self) -> Sequence {
        self.0.borrow().iter().map(Value::deep_clone).collect()
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

impl<V: Into<Value>> FromIterator<V> for Sequence {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().map(Into::into).collect())
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<f64> for Value {
    type Error = DictWrapError;

    /// Fails for NaN and infinities, which have no JSON form.
    fn try_from(n: f64) -> Result<Self> {
        Number::from_f64(n)
            .map(Value::Number)
            .ok_or(DictWrapError::NonFiniteNumber(n))
    }
}

impl TryFrom<f32> for Value {
    type Error = DictWrapError;

    fn try_from(n: f32) -> Result<Self> {
        Value::try_from(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Object(m)
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Value::Array(s)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(Mapping::from_map(map))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
