//! Store - DOCX package output
//!
//! This crate turns a `doc_model::DocumentModel` into a word-processor
//! package (a zip archive of XML parts) and can read such packages back for
//! inspection.

pub mod docx;

// Re-export DOCX functionality
pub use docx::{
    export_docx, export_docx_bytes, inspect_docx_bytes, write_package, DocxError, DocxResult,
    PackageSerializer, PackageSummary,
};
