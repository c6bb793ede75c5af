//! Compile-time constant tables.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Constant name → already-serialized literal expression
///
/// Every value is a valid source literal: strings are quoted, booleans and
/// numbers are written raw. Insertion order is kept so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentMap(IndexMap<String, String>);

impl EnvironmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string constant, quoted as a JSON string literal
    pub fn insert_str(&mut self, key: impl Into<String>, value: &str) {
        self.0.insert(key.into(), Value::from(value).to_string());
    }

    pub fn insert_bool(&mut self, key: impl Into<String>, value: bool) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Insert an arbitrary value as its JSON literal
    ///
    /// Booleans and numbers come out raw, strings quoted, arrays and objects
    /// as JSON expressions.
    pub fn insert_value(&mut self, key: impl Into<String>, value: &Value) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
