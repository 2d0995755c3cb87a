//! DOCX package serializer
//!
//! Renders every part in memory, checks that relationships and the content
//! type manifest agree with what is about to be archived, then zips the
//! parts. Nothing is produced unless every step succeeds.

use crate::docx::content_types::ContentTypes;
use crate::docx::document_writer::DocumentWriter;
use crate::docx::error::{DocxError, DocxResult};
use crate::docx::numbering_writer::NumberingWriter;
use crate::docx::relationships::{create_root_rels, RelationshipTable, TargetMode};
use crate::docx::styles_writer::StylesWriter;
use crate::docx::{content_type_values, namespaces, part_names, relationship_types};
use doc_model::{DocumentModel, StyleConfig};
use std::io::{Cursor, Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Serializes a DocumentModel into DOCX bytes using one StyleConfig
pub struct PackageSerializer<'a> {
    style: &'a StyleConfig,
}

impl<'a> PackageSerializer<'a> {
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// Produce the complete package
    ///
    /// Output is deterministic: the same model and style always yield the
    /// same bytes.
    pub fn serialize(&self, doc: &DocumentModel) -> DocxResult<Vec<u8>> {
        // Hyperlinks are allocated first so they occupy rId1..rIdN
        let mut doc_rels = RelationshipTable::new();
        let mut doc_writer = DocumentWriter::new(self.style, &mut doc_rels);
        let document_xml = doc_writer.write(doc)?;
        let referenced = doc_writer.referenced_ids().to_vec();

        doc_rels.add(relationship_types::STYLES, "styles.xml", TargetMode::Internal);
        doc_rels.add(relationship_types::NUMBERING, "numbering.xml", TargetMode::Internal);
        doc_rels.add(relationship_types::SETTINGS, "settings.xml", TargetMode::Internal);

        let mut content_types = ContentTypes::new();
        content_types.add_override(part_names::DOCUMENT, content_type_values::DOCUMENT);
        content_types.add_override(part_names::STYLES, content_type_values::STYLES);
        content_types.add_override(part_names::NUMBERING, content_type_values::NUMBERING);
        content_types.add_override(part_names::SETTINGS, content_type_values::SETTINGS);

        let parts: Vec<(&str, String)> = vec![
            (part_names::CONTENT_TYPES, content_types.to_xml()),
            (part_names::ROOT_RELS, create_root_rels().to_xml()),
            (part_names::DOCUMENT, document_xml),
            (part_names::STYLES, StylesWriter::new(self.style).write()),
            (part_names::NUMBERING, NumberingWriter::new(self.style).write()),
            (part_names::SETTINGS, generate_settings_xml()),
            (part_names::DOCUMENT_RELS, doc_rels.to_xml()),
        ];

        verify_relationships(&referenced, &doc_rels)?;
        verify_manifest(&content_types, &parts)?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (path, content) in &parts {
            write_part(&mut zip, path, content)?;
        }
        let bytes = zip.finish()?.into_inner();

        tracing::debug!(
            paragraphs = doc.paragraph_count(),
            hyperlinks = referenced.len(),
            bytes = bytes.len(),
            "DOCX package serialized"
        );

        Ok(bytes)
    }
}

/// Write a text part to the ZIP archive with a fixed timestamp
fn write_part<W: Write + Seek>(zip: &mut ZipWriter<W>, path: &str, content: &str) -> DocxResult<()> {
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    zip.start_file(path, options)?;
    zip.write_all(content.as_bytes())?;

    Ok(())
}

/// Every ID referenced from document.xml must exist, and every hyperlink
/// relationship must be referenced exactly once
fn verify_relationships(referenced: &[String], rels: &RelationshipTable) -> DocxResult<()> {
    for id in referenced {
        if !rels.contains(id) {
            return Err(DocxError::RelationshipMismatch(format!(
                "document references missing relationship {}",
                id
            )));
        }
    }

    for rel in rels.get_all_by_type(relationship_types::HYPERLINK) {
        let uses = referenced.iter().filter(|id| **id == rel.id).count();
        if uses != 1 {
            return Err(DocxError::RelationshipMismatch(format!(
                "hyperlink relationship {} referenced {} times",
                rel.id, uses
            )));
        }
    }

    Ok(())
}

/// Every overridden part must be present in the archive and every archived
/// part must resolve to a content type
fn verify_manifest(content_types: &ContentTypes, parts: &[(&str, String)]) -> DocxResult<()> {
    for path in content_types.override_paths() {
        if !parts.iter().any(|(name, _)| *name == path) {
            return Err(DocxError::ManifestMismatch(format!(
                "manifest lists {} but the package does not contain it",
                path
            )));
        }
    }

    for (name, _) in parts {
        if *name != part_names::CONTENT_TYPES && content_types.get_content_type(name).is_none() {
            return Err(DocxError::ManifestMismatch(format!(
                "no content type declared for {}",
                name
            )));
        }
    }

    Ok(())
}

/// Generate a minimal settings.xml
pub fn generate_settings_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="{}"><w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/></w:compat></w:settings>"#,
        namespaces::W
    )
}
