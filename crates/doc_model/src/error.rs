//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DocModelError {
    #[error("Invalid style configuration: {0}")]
    InvalidStyle(String),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
