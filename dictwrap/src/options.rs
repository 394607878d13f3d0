//! Proxy configuration
//!
//! Options are fixed when a proxy is built and forwarded unchanged to every
//! proxy derived from it.

use serde::{Deserialize, Deserializer};

/// Ordered candidate prefixes tried when resolving a field name.
///
/// Deserializes from either a single string or an array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPrefixes(Vec<String>);

impl<'de> Deserialize<'de> for KeyPrefixes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PrefixSpec {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Option::<PrefixSpec>::deserialize(deserializer)? {
            None => Self::none(),
            Some(PrefixSpec::One(prefix)) => Self(vec![prefix]),
            Some(PrefixSpec::Many(prefixes)) => Self(prefixes),
        })
    }
}

impl KeyPrefixes {
    /// No prefixes: names resolve to themselves
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if no prefixes are configured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefixes in the order they are tried
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate prefixes in resolution order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for KeyPrefixes {
    fn from(prefix: &str) -> Self {
        Self(vec![prefix.to_string()])
    }
}

impl From<String> for KeyPrefixes {
    fn from(prefix: String) -> Self {
        Self(vec![prefix])
    }
}

impl From<Vec<String>> for KeyPrefixes {
    fn from(prefixes: Vec<String>) -> Self {
        Self(prefixes)
    }
}

impl From<Vec<&str>> for KeyPrefixes {
    fn from(prefixes: Vec<&str>) -> Self {
        Self(prefixes.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for KeyPrefixes {
    fn from(prefixes: &[&str]) -> Self {
        Self(prefixes.iter().map(|p| p.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KeyPrefixes {
    fn from(prefixes: [&str; N]) -> Self {
        Self(prefixes.iter().map(|p| p.to_string()).collect())
    }
}

impl<T: Into<KeyPrefixes>> From<Option<T>> for KeyPrefixes {
    fn from(prefixes: Option<T>) -> Self {
        prefixes.map_or_else(KeyPrefixes::none, Into::into)
    }
}

/// Proxy behaviour options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyOptions {
    /// Reject writes that change the kind of the stored value
    pub strict: bool,
    /// Prefixes tried, in order, when resolving field names
    pub key_prefixes: KeyPrefixes,
    /// Allow writes, appends and removals through the proxy
    pub mutable: bool,
}

impl Default for ProxyOptions {
    fn default() -> Self {
        Self {
            strict: false,
            key_prefixes: KeyPrefixes::none(),
            mutable: true,
        }
    }
}

impl ProxyOptions {
    /// Default options: lenient, no prefixes, mutable
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict kind checking on writes
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the key prefixes (a single prefix or an ordered collection)
    pub fn with_key_prefixes(mut self, prefixes: impl Into<KeyPrefixes>) -> Self {
        self.key_prefixes = prefixes.into();
        self
    }

    /// Set whether writes are allowed
    pub fn with_mutable(mut self, mutable: bool) -> Self {
        self.mutable = mutable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lenient_and_mutable() {
        let opts = ProxyOptions::default();
        assert!(!opts.strict);
        assert!(opts.mutable);
        assert!(opts.key_prefixes.is_empty());
    }

    #[test]
    fn single_prefix_normalizes_to_list() {
        let opts = ProxyOptions::new().with_key_prefixes("@");
        assert_eq!(opts.key_prefixes.as_slice(), ["@".to_string()]);

        let opts = ProxyOptions::new().with_key_prefixes(["@", "_"]);
        assert_eq!(opts.key_prefixes.iter().collect::<Vec<_>>(), vec!["@", "_"]);

        let opts = ProxyOptions::new().with_key_prefixes(None::<&str>);
        assert!(opts.key_prefixes.is_empty());
    }

    #[test]
    fn deserializes_prefix_as_string_or_list() {
        let opts: ProxyOptions =
            serde_json::from_str(r#"{"strict": true, "key_prefixes": "@"}"#).unwrap();
        assert!(opts.strict);
        assert!(opts.mutable);
        assert_eq!(opts.key_prefixes, KeyPrefixes::from("@"));

        let opts: ProxyOptions =
            serde_json::from_str(r#"{"key_prefixes": ["@", "$"], "mutable": false}"#).unwrap();
        assert!(!opts.mutable);
        assert_eq!(opts.key_prefixes, KeyPrefixes::from(vec!["@", "$"]));

        let opts: ProxyOptions = serde_json::from_str(r#"{"key_prefixes": null}"#).unwrap();
        assert!(opts.key_prefixes.is_empty());
    }

    #[test]
    fn rejects_unknown_option_names() {
        let result = serde_json::from_str::<ProxyOptions>(r#"{"strcit": true}"#);
        assert!(result.is_err());
    }
}
