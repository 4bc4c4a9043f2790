//! The parameter bag handed to generators, and the option merger.
//!
//! # Merge Rules
//!
//! - Every key from the flags is kept
//! - Every key from the extra options is kept
//! - On a shared key the extra options win, even when their value is absent

use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

/// Named values passed to a generator.
///
/// A key can be present with an absent value: that is how a missing
/// positional argument reaches the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterBag(BTreeMap<String, Option<String>>);

impl ParameterBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key with a possibly absent value, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    /// Insert a key with a present value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Some(value.into()));
    }

    /// Get a present value by key.
    ///
    /// Returns `None` both when the key is missing and when its value is absent;
    /// use [`ParameterBag::contains_key`] to tell the two apart.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    /// Check whether a key is present, regardless of its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Option<String>> {
        self.0.iter()
    }

    /// Iterate the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render present values as `--key=value` arguments, in key order.
    ///
    /// Absent values are skipped.
    pub fn to_cli_args(&self) -> Vec<String> {
        self.0
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| format!("--{}={}", key, v)))
            .collect()
    }

    /// Render the bag as a JSON object, absent values as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Build a bag from a JSON object.
    ///
    /// Strings are kept as-is, `null` becomes an absent value and any
    /// other value is stored in its JSON text form. A non-object value
    /// yields an empty bag.
    pub fn from_json_value(value: serde_json::Value) -> Self {
        let serde_json::Value::Object(map) = value else {
            return Self::new();
        };
        map.into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::Null => None,
                    serde_json::Value::String(s) => Some(s),
                    other => Some(other.to_string()),
                };
                (key, value)
            })
            .collect()
    }
}

impl FromIterator<(String, Option<String>)> for ParameterBag {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ParameterBag {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = btree_map::Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Merge flags with action-derived extra options.
///
/// Returns a new bag; neither input is modified.
pub fn merge_options(flags: &ParameterBag, extra: &ParameterBag) -> ParameterBag {
    let mut merged = flags.clone();
    for (key, value) in extra {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
