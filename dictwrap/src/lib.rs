//! dictwrap - Attribute-style access to shared JSON data
//!
//! This crate wraps nested JSON mappings and sequences in lightweight proxies
//! that read and write the caller's data in place:
//!
//! - `MappingProxy`: named-field reads/writes, key prefixes, strict kind checks
//! - `SequenceProxy`: index reads/writes, append/remove/extend, lazy iteration
//! - `wrap`/`unwrap` and the structural helpers `add_field`/`remove_field`
//! - JSON text rendering through the shared codec
//!
//! Proxies never copy. Nested containers are wrapped on demand and share the
//! same handle as the parent's data, so a write through any proxy is visible
//! everywhere.
//!
//! # Example
//!
//! ```
//! use dictwrap::{wrap, ProxyOptions, Value};
//! use serde_json::json;
//!
//! let actor = Value::from(json!({
//!     "name": "Steve Carell",
//!     "career": [{"medium": "TV", "title": "The Office"}]
//! }));
//!
//! let proxy = wrap(&actor, ProxyOptions::default())?.into_mapping()?;
//! proxy
//!     .get("career")?
//!     .item(0)?
//!     .into_mapping()?
//!     .set("title", "Despicable Me")?;
//!
//! assert_eq!(actor.to_json()["career"][0]["title"], "Despicable Me");
//! # Ok::<(), dictwrap::DictWrapError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod factory;
pub mod field;
pub mod mapping;
pub mod options;
pub mod sequence;

// Re-export commonly used types
pub use dictwrap_value::{codec, DictWrapError, Map, Mapping, Result, Sequence, Value, ValueKind};
pub use factory::{add_field, from_text, remove_field, unwrap, wrap};
pub use field::{Field, Proxy, ProxyLike};
pub use mapping::MappingProxy;
pub use options::{KeyPrefixes, ProxyOptions};
pub use sequence::{SequenceIter, SequenceProxy};
