//! Resume - JSON resume data to DOCX
//!
//! This crate validates a resume description, builds its document model and
//! hands it to the package writer. It also renders cover letters from a
//! plain-text template and the resume header.
//!
//! # Example
//!
//! ```rust
//! use resume::ResumeAssembler;
//!
//! let json = r#"{
//!     "header": {"name": "Ada Lovelace", "title": "Analyst"},
//!     "contents": [{"title": "Experience", "id": 1, "content": [
//!         {"id": 1, "position": "Engineer", "date": "1843",
//!          "items": ["Wrote the <a href='https://example.com'>first program</a>."]}
//!     ]}]
//! }"#;
//!
//! let bytes = ResumeAssembler::default().generate_from_json(json).unwrap();
//! assert!(bytes.starts_with(b"PK"));
//! ```

mod assembler;
mod builder;
mod error;
mod schema;
pub mod cover_letter;

pub use assembler::{generate, ResumeAssembler};
pub use builder::DocumentBuilder;
pub use error::{ResumeError, Result};
pub use schema::{ContentEntry, ContentSection, Resume, ResumeHeader};

use doc_model::{DocModelError, StyleConfig};

/// Parse a style configuration from JSON
///
/// Invalid values (non-positive sizes, blank font name) and malformed JSON
/// are both reported as style errors.
pub fn style_from_json(json: &str) -> Result<StyleConfig> {
    serde_json::from_str(json)
        .map_err(|e| ResumeError::Style(DocModelError::InvalidStyle(e.to_string())))
}
