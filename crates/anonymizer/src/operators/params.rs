//! Operator parameter values and the per-call parameter mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AnonymizerError;

/// A single operator parameter value.
///
/// Key material in particular arrives in either form; [`ParamValue::as_bytes`]
/// normalizes to raw bytes (text is measured after UTF-8 encoding) before any
/// length inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Textual value.
    Text(String),
    /// Raw byte value.
    Bytes(Vec<u8>),
}

impl ParamValue {
    /// Borrow the value as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ParamValue::Text(s) => s.as_bytes(),
            ParamValue::Bytes(b) => b,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_owned())
    }
}

impl From<&[u8]> for ParamValue {
    fn from(b: &[u8]) -> Self {
        ParamValue::Bytes(b.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for ParamValue {
    fn from(b: &[u8; N]) -> Self {
        ParamValue::Bytes(b.to_vec())
    }
}

/// String-keyed parameter mapping supplied with each operator invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(HashMap<String, ParamValue>);

impl Params {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any existing value under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Look up a parameter that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`AnonymizerError::InvalidParam`] naming the missing entry.
    pub fn required(&self, name: &str) -> Result<&ParamValue, AnonymizerError> {
        self.0.get(name).ok_or_else(|| {
            AnonymizerError::invalid_param(format!("Invalid input, {name} parameter is missing"))
        })
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
