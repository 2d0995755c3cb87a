//! Resume input schema
//!
//! Mirrors the JSON layout of a resume description. Every field except
//! `header.name` may be absent or `null`; absent values become empty strings
//! and sequences. A value of the wrong JSON type is a schema error.

use crate::error::{ResumeError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// A complete resume description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default, deserialize_with = "null_as_default")]
    pub header: ResumeHeader,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contents: Vec<ContentSection>,
}

impl Resume {
    /// Parse a resume from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already-parsed JSON value
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Identity block shown at the top of a resume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeHeader {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ResumeHeader {
    /// Look up a header field by its JSON name
    pub fn field(&self, field: &str) -> Option<&str> {
        match field {
            "name" => self.name.as_deref(),
            "title" => self.title.as_deref(),
            "phone" => self.phone.as_deref(),
            "email" => self.email.as_deref(),
            "address" => self.address.as_deref(),
            _ => None,
        }
    }

    /// A header field that must be present and non-blank
    pub fn require(&self, field: &str) -> Result<&str> {
        match self.field(field) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ResumeError::Schema(format!(
                "Missing or empty field '{}' in JSON header",
                field
            ))),
        }
    }
}

/// A titled resume section such as "Experience"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Opaque identifier, never used for ordering
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<ContentEntry>,
}

/// One position within a section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
