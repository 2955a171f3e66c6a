//! The raw content document as supplied by the site author.
//!
//! Kept as an untyped JSON value: any field may be missing or carry the
//! wrong type, and [`crate::normalize`] decides what to keep.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ContentError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeDocument(Value);

impl ResumeDocument {
    /// A document with no fields at all.
    pub fn empty() -> Self {
        Self(Value::Null)
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parse the document body fetched from `path`.
    pub fn from_json(path: &str, body: &str) -> Result<Self, ContentError> {
        serde_json::from_str(body)
            .map(Self)
            .map_err(|source| ContentError::InvalidJson {
                path: path.to_string(),
                source,
            })
    }

    /// Look up a nested field by JSON pointer (`"/meta/name"`).
    /// Non-object intermediates resolve to `None`.
    pub fn get(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
