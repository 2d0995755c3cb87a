//! Error types for resume generation

use doc_model::DocModelError;
use store::DocxError;
use thiserror::Error;

/// Errors that can occur while turning resume data into a package
#[derive(Debug, Error)]
pub enum ResumeError {
    /// Input data is missing required fields or has the wrong shape
    #[error("Schema error: {0}")]
    Schema(String),

    /// Style configuration was rejected
    #[error(transparent)]
    Style(#[from] DocModelError),

    /// Package serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] DocxError),
}

impl ResumeError {
    /// Name of the stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            ResumeError::Schema(_) => "schema",
            ResumeError::Style(_) => "style",
            ResumeError::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for ResumeError {
    fn from(err: serde_json::Error) -> Self {
        ResumeError::Schema(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ResumeError>;
