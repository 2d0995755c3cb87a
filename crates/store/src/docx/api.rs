//! Public API for DOCX export
//!
//! This module provides the main entry points for turning a document model
//! into DOCX bytes or a DOCX file.

use crate::docx::error::DocxResult;
use crate::docx::writer::PackageSerializer;
use doc_model::{DocumentModel, StyleConfig};
use std::path::Path;

/// Export a DocumentModel to an in-memory byte vector
///
/// # Arguments
///
/// * `doc` - The document to export
/// * `style` - Font and page configuration applied to every run
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - The DOCX file content as bytes
/// * `Err(DocxError)` - If the model cannot be serialized
///
/// # Example
///
/// ```ignore
/// use store::docx::export_docx_bytes;
/// use doc_model::{DocumentModel, Header, StyleConfig};
///
/// let doc = DocumentModel::with_header(Header::new("Ada Lovelace", "Analyst"));
/// let bytes = export_docx_bytes(&doc, &StyleConfig::default())?;
/// std::fs::write("output.docx", bytes)?;
/// ```
pub fn export_docx_bytes(doc: &DocumentModel, style: &StyleConfig) -> DocxResult<Vec<u8>> {
    PackageSerializer::new(style).serialize(doc)
}

/// Export a DocumentModel to a DOCX file on disk
///
/// The package is fully built in memory before the file is created, so a
/// serialization failure never leaves a partial file behind.
///
/// # Arguments
///
/// * `doc` - The document to export
/// * `style` - Font and page configuration
/// * `path` - Path where the DOCX file will be saved
pub fn export_docx(doc: &DocumentModel, style: &StyleConfig, path: &Path) -> DocxResult<()> {
    let bytes = export_docx_bytes(doc, style)?;
    write_package(&bytes, path)
}

/// Write finished package bytes to `path`, creating parent directories
pub fn write_package(bytes: &[u8], path: &Path) -> DocxResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, bytes)?;
    tracing::info!("DOCX written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::error::DocxError;
    use doc_model::{Header, Paragraph, ParagraphStyle, Run};

    #[test]
    fn test_export_bytes_empty_doc() {
        let bytes = export_docx_bytes(&DocumentModel::new(), &StyleConfig::default()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_export_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/resume.docx");
        let doc = DocumentModel::with_header(Header::new("Ada", "Analyst"));

        export_docx(&doc, &StyleConfig::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_export_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        let doc = DocumentModel::new().with_paragraph(Paragraph::with_runs(
            ParagraphStyle::Body,
            vec![Run::hyperlink("dead link", "")],
        ));

        let err = export_docx(&doc, &StyleConfig::default(), &path).unwrap_err();
        assert!(matches!(err, DocxError::EmptyHyperlinkTarget { .. }));
        assert!(!path.exists());
    }
}
