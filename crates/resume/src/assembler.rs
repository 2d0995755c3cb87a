//! Resume generation pipeline
//!
//! Composes the document builder and the package serializer. Errors from
//! either stage propagate unchanged.

use crate::builder::DocumentBuilder;
use crate::error::Result;
use crate::schema::Resume;
use doc_model::StyleConfig;
use std::path::Path;

/// Turns resume data into DOCX bytes with a fixed style
#[derive(Debug, Clone, Default)]
pub struct ResumeAssembler {
    style: StyleConfig,
}

impl ResumeAssembler {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Build and serialize a resume
    pub fn generate(&self, resume: &Resume) -> Result<Vec<u8>> {
        generate(resume, &self.style)
    }

    /// Parse JSON, then build and serialize
    pub fn generate_from_json(&self, json: &str) -> Result<Vec<u8>> {
        let resume = Resume::from_json_str(json)?;
        self.generate(&resume)
    }

    /// Generate and write to `path`; nothing is written on failure
    pub fn generate_to_file(&self, resume: &Resume, path: &Path) -> Result<()> {
        let bytes = self.generate(resume)?;
        store::write_package(&bytes, path)?;
        Ok(())
    }
}

/// Build and serialize a resume with the given style
pub fn generate(resume: &Resume, style: &StyleConfig) -> Result<Vec<u8>> {
    let doc = DocumentBuilder::build(resume, style)?;
    let bytes = store::export_docx_bytes(&doc, style)?;

    tracing::info!(
        sections = doc.sections().len(),
        bytes = bytes.len(),
        "Resume package generated"
    );

    Ok(bytes)
}
