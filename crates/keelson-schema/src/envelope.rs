//! Minimal structural view of a rendered resource document.
//!
//! Only `kind`, `apiVersion`, `metadata.name`, and `metadata.annotations` are
//! read. Everything else in the document is left uninterpreted.

use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("failed to parse document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("document must be a mapping")]
    NotAMapping,
    #[error("annotation '{key}' must be a scalar value")]
    InvalidAnnotation { key: String },
}

/// Kind, API version, declared name, and annotations of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    pub kind: String,
    pub api_version: String,
    pub name: String,
    pub annotations: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    api_version: Option<String>,
    #[serde(default)]
    metadata: Option<RawMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    annotations: Option<BTreeMap<String, Value>>,
}

impl Envelope {
    /// Look up an annotation by key.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}

/// Extract the envelope of a single YAML document.
///
/// A document that parses to `null` (empty or comment-only) yields a default
/// envelope. Anything that is not a YAML mapping is an error.
pub fn parse_envelope(input: &str) -> Result<Envelope, EnvelopeError> {
    let value: Value = serde_yaml::from_str(input)?;
    if value.is_null() {
        return Ok(Envelope::default());
    }
    if !value.is_mapping() {
        return Err(EnvelopeError::NotAMapping);
    }

    let raw: RawEnvelope = serde_yaml::from_value(value)?;
    let metadata = raw.metadata.unwrap_or_default();

    let mut annotations = BTreeMap::new();
    for (key, value) in metadata.annotations.unwrap_or_default() {
        let text = scalar_to_string(&value).ok_or_else(|| EnvelopeError::InvalidAnnotation {
            key: key.clone(),
        })?;
        annotations.insert(key, text);
    }

    Ok(Envelope {
        kind: raw.kind.unwrap_or_default(),
        api_version: raw.api_version.unwrap_or_default(),
        name: metadata.name.unwrap_or_default(),
        annotations,
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
