//! dictwrap values - Shared JSON data model
//!
//! This crate provides the data layer the dictwrap proxies operate on,
//! with no proxy logic of its own. It includes:
//!
//! - `Value`, whose objects and arrays are shared `Mapping`/`Sequence` handles
//! - Value kinds used for strict-mode checks
//! - Error types
//! - JSON text parsing and rendering

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod kind;
pub mod value;

// Re-export commonly used types
pub use error::{DictWrapError, Result};
pub use kind::ValueKind;
pub use value::{Map, Mapping, Sequence, Value};
