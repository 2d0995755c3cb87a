//! Relationships (.rels) file parsing and generation
//!
//! DOCX uses relationships to connect parts of the document together and to
//! point hyperlinks at their external targets. IDs are allocated as `rIdN`
//! with N increasing from 1, and entries are kept in allocation order so the
//! generated part is byte-stable.

use crate::docx::error::{DocxError, DocxResult};
use crate::docx::escape_xml;
use crate::docx::reader::XmlParser;
use crate::docx::relationship_types;
use quick_xml::events::Event;

/// A single relationship in a .rels file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Unique ID within the rels file (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative to the source part) or external URL
    pub target: String,
    /// Target mode (Internal or External)
    pub target_mode: TargetMode,
}

/// Target mode for relationships
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetMode {
    /// Internal target within the package
    #[default]
    Internal,
    /// External target (URL)
    External,
}

/// Ordered collection of relationships from one .rels part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipTable {
    relationships: Vec<Relationship>,
    /// Counter for generating new IDs
    next_id: u32,
}

impl Default for RelationshipTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationshipTable {
    /// Create a new empty relationship table
    pub fn new() -> Self {
        Self {
            relationships: Vec::new(),
            next_id: 1,
        }
    }

    /// Parse a .rels file from its XML content
    pub fn parse(content: &str) -> DocxResult<Self> {
        let mut result = Self::new();
        let mut reader = XmlParser::from_string(content);
        let mut buf = Vec::new();
        let mut max_id = 0u32;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let name = e.name();
                    if XmlParser::matches_element(name.as_ref(), "Relationship") {
                        let id = XmlParser::get_attribute(e, b"Id").ok_or_else(|| {
                            DocxError::InvalidStructure("Relationship missing Id".into())
                        })?;
                        let rel_type = XmlParser::get_attribute(e, b"Type").ok_or_else(|| {
                            DocxError::InvalidStructure("Relationship missing Type".into())
                        })?;
                        let target = XmlParser::get_attribute(e, b"Target").ok_or_else(|| {
                            DocxError::InvalidStructure("Relationship missing Target".into())
                        })?;
                        let target_mode = XmlParser::get_attribute(e, b"TargetMode")
                            .map(|m| {
                                if m == "External" {
                                    TargetMode::External
                                } else {
                                    TargetMode::Internal
                                }
                            })
                            .unwrap_or_default();

                        // Track max ID for generating new ones
                        if let Some(num) = id.strip_prefix("rId").and_then(|n| n.parse::<u32>().ok()) {
                            max_id = max_id.max(num);
                        }

                        result.relationships.push(Relationship {
                            id,
                            rel_type,
                            target,
                            target_mode,
                        });
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(DocxError::from(e)),
                _ => {}
            }
            buf.clear();
        }

        result.next_id = max_id + 1;
        Ok(result)
    }

    /// Add a relationship and return its ID
    pub fn add(&mut self, rel_type: &str, target: &str, target_mode: TargetMode) -> String {
        let id = format!("rId{}", self.next_id);
        self.next_id += 1;

        self.relationships.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
            target_mode,
        });

        id
    }

    /// Add an external hyperlink relationship and return its ID
    ///
    /// Every call allocates a fresh ID, even for a URL already present.
    pub fn add_hyperlink(&mut self, url: &str) -> String {
        self.add(relationship_types::HYPERLINK, url, TargetMode::External)
    }

    /// Get a relationship by ID
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.id == id)
    }

    /// Get all relationships of a given type, in allocation order
    pub fn get_all_by_type(&self, rel_type: &str) -> Vec<&Relationship> {
        self.relationships
            .iter()
            .filter(|r| r.rel_type == rel_type)
            .collect()
    }

    /// Check if a relationship exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// Generate XML content for the .rels file
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            crate::docx::namespaces::PKG_REL
        ));

        for rel in &self.relationships {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                rel.id,
                rel.rel_type,
                escape_xml(&rel.target)
            ));
            if rel.target_mode == TargetMode::External {
                xml.push_str(r#" TargetMode="External""#);
            }
            xml.push_str("/>");
        }

        xml.push_str("</Relationships>");
        xml
    }
}

/// Create the root .rels file for a new DOCX
pub fn create_root_rels() -> RelationshipTable {
    let mut rels = RelationshipTable::new();
    rels.add(
        relationship_types::DOCUMENT,
        "word/document.xml",
        TargetMode::Internal,
    );
    rels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationships_parsing() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com/?a=1&amp;b=2" TargetMode="External"/>
</Relationships>"#;

        let rels = RelationshipTable::parse(xml).unwrap();
        assert_eq!(rels.len(), 2);

        let r1 = rels.get("rId1").unwrap();
        assert_eq!(r1.target, "word/document.xml");
        assert_eq!(r1.target_mode, TargetMode::Internal);

        let r2 = rels.get("rId2").unwrap();
        assert_eq!(r2.target, "https://example.com/?a=1&b=2");
        assert_eq!(r2.target_mode, TargetMode::External);
    }

    #[test]
    fn test_add_relationship() {
        let mut rels = RelationshipTable::new();
        let id1 = rels.add(relationship_types::STYLES, "styles.xml", TargetMode::Internal);
        let id2 = rels.add_hyperlink("https://example.com");

        assert_eq!(id1, "rId1");
        assert_eq!(id2, "rId2");
        assert!(rels.contains("rId1"));
        assert_eq!(rels.get("rId2").unwrap().target_mode, TargetMode::External);
    }

    #[test]
    fn test_repeated_url_gets_distinct_ids() {
        let mut rels = RelationshipTable::new();
        let a = rels.add_hyperlink("https://example.com");
        let b = rels.add_hyperlink("https://example.com");
        assert_ne!(a, b);
        assert_eq!(rels.get_all_by_type(relationship_types::HYPERLINK).len(), 2);
    }

    #[test]
    fn test_root_rels_point_at_document() {
        let rels = create_root_rels();
        let doc_rels = rels.get_all_by_type(relationship_types::DOCUMENT);
        assert_eq!(doc_rels.len(), 1);
        assert_eq!(doc_rels[0].target, "word/document.xml");
    }

    #[test]
    fn test_to_xml_roundtrip_keeps_order() {
        let mut original = RelationshipTable::new();
        original.add_hyperlink("https://b.example/?q=<x>");
        original.add_hyperlink("https://a.example");
        original.add(relationship_types::STYLES, "styles.xml", TargetMode::Internal);

        let parsed = RelationshipTable::parse(&original.to_xml()).unwrap();
        assert_eq!(parsed, original);
    }
}
