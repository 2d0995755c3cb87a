//! Text run - a contiguous span of text sharing one style and at most one link

use serde::{Deserialize, Serialize};

/// A text run, either plain or hyperlinked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The visible text of this run
    pub text: String,
    /// Hyperlink target, present iff this run is a hyperlink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Run {
    /// Create a plain run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
        }
    }

    /// Create a hyperlink run targeting `url`
    pub fn hyperlink(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn is_hyperlink(&self) -> bool {
        self.url.is_some()
    }

    /// Hyperlink target, if any
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Length of the text in UTF-8 bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
