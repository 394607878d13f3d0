//! Index-based proxy over a shared sequence

use crate::field::Field;
use crate::options::ProxyOptions;
use dictwrap_value::{codec, DictWrapError, Result, Sequence, Value};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Presents a shared sequence with the same lazy wrapping as [`MappingProxy`].
///
/// Every mutation goes through the one shared handle, so the caller's
/// sequence always reflects appends, removals and replacements.
///
/// [`MappingProxy`]: crate::MappingProxy
#[derive(Debug, Clone)]
pub struct SequenceProxy {
    data: Sequence,
    options: Rc<ProxyOptions>,
}

impl SequenceProxy {
    /// Wrap `data` with default options
    pub fn new(data: Sequence) -> Self {
        Self::with_options(data, ProxyOptions::default())
    }

    /// Wrap `data` with the given options
    pub fn with_options(data: Sequence, options: ProxyOptions) -> Self {
        Self::from_shared(data, Rc::new(options))
    }

    pub(crate) fn from_shared(data: Sequence, options: Rc<ProxyOptions>) -> Self {
        Self { data, options }
    }

    /// Options shared with every proxy derived from this one
    pub fn options(&self) -> &ProxyOptions {
        &self.options
    }

    /// Returns true if the options request strict kind checks
    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// Returns true if writes are allowed
    pub fn is_mutable(&self) -> bool {
        self.options.mutable
    }

    /// Prefixes forwarded to nested mapping proxies
    pub fn key_prefixes(&self) -> &[String] {
        self.options.key_prefixes.as_slice()
    }

    /// Current length of the underlying sequence
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sequence has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if any element equals `value`
    pub fn contains(&self, value: &Value) -> bool {
        self.data.contains(value)
    }

    /// Read the element at `index`
    pub fn get(&self, index: usize) -> Result<Field> {
        let value = self
            .data
            .get(index)
            .ok_or_else(|| self.out_of_range(index))?;
        Ok(Field::wrap_value(value, &self.options))
    }

    /// Replace the element at `index`
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<()> {
        self.ensure_mutable("set item")?;
        if index >= self.data.len() {
            return Err(self.out_of_range(index));
        }
        self.data.set(index, value);
        trace!(index, "item replaced");
        Ok(())
    }

    /// Append to the underlying sequence
    pub fn append(&self, value: impl Into<Value>) -> Result<()> {
        self.ensure_mutable("append")?;
        self.data.push(value);
        trace!(len = self.data.len(), "item appended");
        Ok(())
    }

    /// Remove the first element equal to `value`
    pub fn remove_value(&self, value: impl Into<Value>) -> Result<()> {
        self.ensure_mutable("remove item")?;
        let value = value.into();
        match self.data.remove_first(&value) {
            Some(_) => {
                trace!(len = self.data.len(), "item removed");
                Ok(())
            }
            None => Err(DictWrapError::ValueNotFound(value.to_string())),
        }
    }

    /// Concatenate in place: the `+=` of a plain list.
    ///
    /// Items are collected before the sequence is written, so extending a
    /// sequence with itself appends one copy of its current elements.
    pub fn extend<I, V>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.ensure_mutable("extend")?;
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        let added = items.len();
        self.data.extend(items);
        trace!(added, len = self.data.len(), "sequence extended");
        Ok(())
    }

    /// Iterate from the first element, wrapping each one like [`get`](Self::get)
    pub fn iter(&self) -> SequenceIter {
        SequenceIter {
            data: self.data.clone(),
            options: Rc::clone(&self.options),
            index: 0,
        }
    }

    /// The wrapped sequence handle (same container, no copy)
    pub fn to_plain(&self) -> Sequence {
        self.data.clone()
    }

    /// Borrow the wrapped sequence handle
    pub fn as_plain(&self) -> &Sequence {
        &self.data
    }

    /// Render the wrapped sequence as JSON text
    pub fn to_text(&self, pretty: bool) -> Result<String> {
        codec::render(&Value::Array(self.data.clone()), pretty)
    }

    fn ensure_mutable(&self, operation: &'static str) -> Result<()> {
        if self.options.mutable {
            Ok(())
        } else {
            debug!(operation, "rejected write through immutable proxy");
            Err(DictWrapError::Immutable(operation))
        }
    }

    fn out_of_range(&self, index: usize) -> DictWrapError {
        DictWrapError::IndexOutOfRange {
            index,
            len: self.data.len(),
        }
    }
}

/// Lazy iterator over a [`SequenceProxy`].
///
/// The length is re-read on every step, so changes made to the sequence
/// while iterating are visible.
#[derive(Debug, Clone)]
pub struct SequenceIter {
    data: Sequence,
    options: Rc<ProxyOptions>,
    index: usize,
}

impl Iterator for SequenceIter {
    type Item = Field;

    fn next(&mut self) -> Option<Field> {
        let value = self.data.get(self.index)?;
        self.index += 1;
        Some(Field::wrap_value(value, &self.options))
    }
}

impl IntoIterator for &SequenceProxy {
    type Item = Field;
    type IntoIter = SequenceIter;

    fn into_iter(self) -> SequenceIter {
        self.iter()
    }
}

impl IntoIterator for SequenceProxy {
    type Item = Field;
    type IntoIter = SequenceIter;

    fn into_iter(self) -> SequenceIter {
        SequenceIter {
            data: self.data,
            options: self.options,
            index: 0,
        }
    }
}

impl PartialEq for SequenceProxy {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl PartialEq<Sequence> for SequenceProxy {
    fn eq(&self, other: &Sequence) -> bool {
        self.data == *other
    }
}

impl PartialEq<Value> for SequenceProxy {
    fn eq(&self, other: &Value) -> bool {
        other.as_sequence().is_some_and(|s| self.data == *s)
    }
}

impl PartialEq<SequenceProxy> for Value {
    fn eq(&self, other: &SequenceProxy) -> bool {
        other == self
    }
}

impl From<SequenceProxy> for Value {
    fn from(proxy: SequenceProxy) -> Self {
        Value::Array(proxy.data)
    }
}

impl fmt::Display for SequenceProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_text(false).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
