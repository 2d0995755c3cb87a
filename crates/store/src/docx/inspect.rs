//! Package inspection
//!
//! Reads a generated DOCX back into a flat summary: which parts exist, the
//! manifest, the document relationships, and every paragraph's runs with
//! their resolved hyperlink targets.

use crate::docx::content_types::ContentTypes;
use crate::docx::error::{DocxError, DocxResult};
use crate::docx::part_names;
use crate::docx::reader::{DocxReader, XmlParser};
use crate::docx::relationships::RelationshipTable;
use quick_xml::events::{BytesStart, Event};
use std::io::Cursor;

/// A run as found in document.xml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectedRun {
    pub text: String,
    /// Relationship ID of the enclosing `w:hyperlink`, if any
    pub rel_id: Option<String>,
    /// Hyperlink target resolved through the relationships part
    pub url: Option<String>,
    /// `w:rFonts/@w:ascii`
    pub font: Option<String>,
    /// `w:sz/@w:val`
    pub size_half_points: Option<u32>,
}

/// A paragraph as found in document.xml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectedParagraph {
    pub style_id: Option<String>,
    pub runs: Vec<InspectedRun>,
}

impl InspectedParagraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Page margins in twips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectedMargins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

/// Everything a test or a caller needs to check a generated package
#[derive(Debug, Clone)]
pub struct PackageSummary {
    /// Part names in the archive
    pub parts: Vec<String>,
    pub content_types: ContentTypes,
    pub document_rels: RelationshipTable,
    pub paragraphs: Vec<InspectedParagraph>,
    pub margins: Option<InspectedMargins>,
}

impl PackageSummary {
    /// Relationship IDs referenced by hyperlink runs, in document order
    pub fn hyperlink_ids(&self) -> Vec<&str> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs.iter())
            .filter_map(|r| r.rel_id.as_deref())
            .collect()
    }

    /// Paragraphs with the given style ID
    pub fn paragraphs_with_style<'s>(
        &'s self,
        style_id: &'s str,
    ) -> impl Iterator<Item = &'s InspectedParagraph> + 's {
        self.paragraphs
            .iter()
            .filter(move |p| p.style_id.as_deref() == Some(style_id))
    }
}

/// Read a DOCX package from memory and summarize it
pub fn inspect_docx_bytes(bytes: &[u8]) -> DocxResult<PackageSummary> {
    let mut reader = DocxReader::new(Cursor::new(bytes))?;
    if !reader.is_valid_docx() {
        return Err(DocxError::InvalidStructure(
            "package lacks [Content_Types].xml or word/document.xml".to_string(),
        ));
    }

    let parts = reader.file_names();
    let content_types = ContentTypes::parse(&reader.read_file_as_string(part_names::CONTENT_TYPES)?)?;
    let document_rels = if reader.file_exists(part_names::DOCUMENT_RELS) {
        RelationshipTable::parse(&reader.read_file_as_string(part_names::DOCUMENT_RELS)?)?
    } else {
        RelationshipTable::new()
    };

    let document_xml = reader.read_file_as_string(part_names::DOCUMENT)?;
    let (mut paragraphs, margins) = parse_document(&document_xml)?;

    for run in paragraphs.iter_mut().flat_map(|p| p.runs.iter_mut()) {
        if let Some(ref id) = run.rel_id {
            let rel = document_rels.get(id).ok_or_else(|| {
                DocxError::RelationshipMismatch(format!("run references unknown relationship {}", id))
            })?;
            run.url = Some(rel.target.clone());
        }
    }

    Ok(PackageSummary {
        parts,
        content_types,
        document_rels,
        paragraphs,
        margins,
    })
}

fn parse_document(content: &str) -> DocxResult<(Vec<InspectedParagraph>, Option<InspectedMargins>)> {
    let mut reader = XmlParser::from_string(content);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut margins = None;
    let mut current_para: Option<InspectedParagraph> = None;
    let mut current_run: Option<InspectedRun> = None;
    let mut current_link: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let name_ref = name.as_ref();

                if XmlParser::matches_element(name_ref, "p") {
                    current_para = Some(InspectedParagraph::default());
                } else if XmlParser::matches_element(name_ref, "hyperlink") {
                    current_link = XmlParser::get_r_attribute(e, "id");
                } else if XmlParser::matches_element(name_ref, "r") {
                    current_run = Some(InspectedRun {
                        rel_id: current_link.clone(),
                        ..Default::default()
                    });
                } else if XmlParser::matches_element(name_ref, "t") {
                    in_text = true;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let name_ref = name.as_ref();

                if XmlParser::matches_element(name_ref, "p") {
                    paragraphs.push(InspectedParagraph::default());
                } else if XmlParser::matches_element(name_ref, "pgMar") {
                    margins = Some(parse_margins(e));
                } else if XmlParser::matches_element(name_ref, "pStyle") {
                    if let Some(ref mut para) = current_para {
                        para.style_id = XmlParser::get_w_attribute(e, "val");
                    }
                } else if let Some(ref mut run) = current_run {
                    if XmlParser::matches_element(name_ref, "rFonts") {
                        run.font = XmlParser::get_w_attribute(e, "ascii");
                    } else if XmlParser::matches_element(name_ref, "sz") {
                        run.size_half_points =
                            XmlParser::get_w_attribute(e, "val").and_then(|v| v.parse().ok());
                    } else if XmlParser::matches_element(name_ref, "tab") {
                        run.text.push('\t');
                    } else if XmlParser::matches_element(name_ref, "br") {
                        run.text.push('\n');
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let name_ref = name.as_ref();

                if XmlParser::matches_element(name_ref, "p") {
                    if let Some(para) = current_para.take() {
                        paragraphs.push(para);
                    }
                } else if XmlParser::matches_element(name_ref, "hyperlink") {
                    current_link = None;
                } else if XmlParser::matches_element(name_ref, "r") {
                    if let (Some(run), Some(para)) = (current_run.take(), current_para.as_mut()) {
                        para.runs.push(run);
                    }
                } else if XmlParser::matches_element(name_ref, "t") {
                    in_text = false;
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some(ref mut run) = current_run {
                        let text = e.unescape().map_err(|e| DocxError::XmlParse(e.to_string()))?;
                        run.text.push_str(&text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocxError::from(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok((paragraphs, margins))
}

fn parse_margins(e: &BytesStart) -> InspectedMargins {
    let twips = |name: &str| -> u32 {
        XmlParser::get_w_attribute(e, name)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };
    InspectedMargins {
        top: twips("top"),
        bottom: twips("bottom"),
        left: twips("left"),
        right: twips("right"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_zip_input() {
        assert!(matches!(
            inspect_docx_bytes(b"not a zip"),
            Err(DocxError::Zip(_))
        ));
    }

    #[test]
    fn test_parse_document_runs() {
        let xml = r#"<?xml version="1.0"?>
<w:document xmlns:w="w" xmlns:r="r"><w:body><w:p><w:pPr><w:pStyle w:val="ListBullet"/></w:pPr><w:r><w:rPr><w:rFonts w:ascii="Arial"/><w:sz w:val="16"/></w:rPr><w:t xml:space="preserve">Led </w:t></w:r><w:hyperlink r:id="rId1"><w:r><w:t>R&amp;D</w:t></w:r></w:hyperlink></w:p><w:p/><w:sectPr><w:pgMar w:top="720" w:right="1440" w:bottom="720" w:left="1440"/></w:sectPr></w:body></w:document>"#;

        let (paras, margins) = parse_document(xml).unwrap();
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].style_id.as_deref(), Some("ListBullet"));
        assert_eq!(paras[0].text(), "Led R&D");
        assert_eq!(paras[0].runs[0].font.as_deref(), Some("Arial"));
        assert_eq!(paras[0].runs[0].size_half_points, Some(16));
        assert_eq!(paras[0].runs[1].rel_id.as_deref(), Some("rId1"));
        assert!(paras[1].runs.is_empty());
        assert_eq!(
            margins,
            Some(InspectedMargins {
                top: 720,
                bottom: 720,
                left: 1440,
                right: 1440
            })
        );
    }
}
