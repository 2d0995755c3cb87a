//! Document.xml writer
//!
//! Converts a DocumentModel to DOCX document.xml format. Every run carries
//! explicit font properties from the StyleConfig; each hyperlink run gets its
//! own relationship in the document's relationship table.

use crate::docx::error::{DocxError, DocxResult};
use crate::docx::numbering_writer::BULLET_NUM_ID;
use crate::docx::relationships::RelationshipTable;
use crate::docx::{escape_xml, is_xml_char, namespaces};
use doc_model::{
    inches_to_twips, points_to_twips, DocumentModel, Paragraph, ParagraphStyle, Run, StyleConfig,
};

/// Letter page size in twips (8.5in x 11in)
const PAGE_WIDTH_TWIPS: u32 = 12240;
const PAGE_HEIGHT_TWIPS: u32 = 15840;

/// Hyperlink colour (Office theme "Hyperlink")
pub(crate) const HYPERLINK_COLOR: &str = "0563C1";

/// Writer for document.xml
pub struct DocumentWriter<'a> {
    style: &'a StyleConfig,
    rels: &'a mut RelationshipTable,
    /// Relationship IDs referenced from the document, in order of use
    referenced: Vec<String>,
}

impl<'a> DocumentWriter<'a> {
    /// Create a new document writer allocating hyperlinks into `rels`
    pub fn new(style: &'a StyleConfig, rels: &'a mut RelationshipTable) -> Self {
        Self {
            style,
            rels,
            referenced: Vec::new(),
        }
    }

    /// Relationship IDs written so far
    pub fn referenced_ids(&self) -> &[String] {
        &self.referenced
    }

    /// Generate document.xml content
    pub fn write(&mut self, doc: &DocumentModel) -> DocxResult<String> {
        let mut xml = String::new();

        // XML declaration
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');

        // Document element with namespaces
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));
        xml.push_str("<w:body>");

        for para in doc.paragraphs() {
            self.write_paragraph(&mut xml, para)?;
        }

        self.write_section_properties(&mut xml);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");

        Ok(xml)
    }

    /// Write a paragraph element
    fn write_paragraph(&mut self, xml: &mut String, para: &Paragraph) -> DocxResult<()> {
        xml.push_str("<w:p>");

        self.write_paragraph_properties(xml, para);

        for run in &para.runs {
            match run.url() {
                Some(url) => self.write_hyperlink(xml, run, url)?,
                None => self.write_run(xml, run, false),
            }
        }

        xml.push_str("</w:p>");
        Ok(())
    }

    /// Write paragraph properties
    fn write_paragraph_properties(&self, xml: &mut String, para: &Paragraph) {
        let props = &para.properties;

        // Only write pPr if there's something to write
        if para.style.is_none() && props.is_empty() {
            return;
        }

        xml.push_str("<w:pPr>");

        if let Some(style) = para.style {
            xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style.style_id()));
            if style == ParagraphStyle::Bullet {
                xml.push_str(&format!(
                    r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="{}"/></w:numPr>"#,
                    BULLET_NUM_ID
                ));
            }
        }

        if !props.is_empty() {
            xml.push_str("<w:spacing");
            if let Some(before) = props.space_before {
                xml.push_str(&format!(r#" w:before="{}""#, points_to_twips(before)));
            }
            if let Some(after) = props.space_after {
                xml.push_str(&format!(r#" w:after="{}""#, points_to_twips(after)));
            }
            xml.push_str("/>");
        }

        xml.push_str("</w:pPr>");
    }

    /// Write a hyperlink element wrapping a single run
    fn write_hyperlink(&mut self, xml: &mut String, run: &Run, url: &str) -> DocxResult<()> {
        if !url.chars().any(|c| is_xml_char(c) && !c.is_whitespace()) {
            return Err(DocxError::EmptyHyperlinkTarget {
                text: run.text.clone(),
            });
        }

        let rel_id = self.rels.add_hyperlink(url);
        xml.push_str(&format!(r#"<w:hyperlink r:id="{}" w:history="1">"#, rel_id));
        self.referenced.push(rel_id);

        self.write_run(xml, run, true);

        xml.push_str("</w:hyperlink>");
        Ok(())
    }

    /// Write a run element
    fn write_run(&self, xml: &mut String, run: &Run, is_link: bool) {
        xml.push_str("<w:r>");

        self.write_run_properties(xml, is_link);

        // Text content - tabs and line breaks become their own elements
        let lines: Vec<&str> = run.text.split('\n').collect();
        for (line_idx, line) in lines.iter().enumerate() {
            let parts: Vec<&str> = line.split('\t').collect();
            for (i, segment) in parts.iter().enumerate() {
                if !segment.is_empty() {
                    // Write text with xml:space="preserve" for leading/trailing spaces
                    let needs_preserve = segment.starts_with(char::is_whitespace)
                        || segment.ends_with(char::is_whitespace);
                    if needs_preserve {
                        xml.push_str(r#"<w:t xml:space="preserve">"#);
                    } else {
                        xml.push_str("<w:t>");
                    }
                    xml.push_str(&escape_xml(segment));
                    xml.push_str("</w:t>");
                }
                if i < parts.len() - 1 {
                    xml.push_str("<w:tab/>");
                }
            }
            if line_idx < lines.len() - 1 {
                xml.push_str("<w:br/>");
            }
        }

        xml.push_str("</w:r>");
    }

    /// Write run properties: font family and size always, link styling when linked
    fn write_run_properties(&self, xml: &mut String, is_link: bool) {
        let font = escape_xml(self.style.font_name());
        let half_pts = self.style.font_size_half_points();

        xml.push_str("<w:rPr>");
        if is_link {
            xml.push_str(r#"<w:rStyle w:val="Hyperlink"/>"#);
        }
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
            font
        ));
        if is_link {
            xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, HYPERLINK_COLOR));
        }
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
        if is_link {
            xml.push_str(r#"<w:u w:val="single"/>"#);
        }
        xml.push_str("</w:rPr>");
    }

    /// Write the single section's page size and margins
    fn write_section_properties(&self, xml: &mut String) {
        let margins = self.style.margins();
        xml.push_str("<w:sectPr>");
        xml.push_str(&format!(
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            PAGE_WIDTH_TWIPS, PAGE_HEIGHT_TWIPS
        ));
        xml.push_str(&format!(
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="720" w:footer="720" w:gutter="0"/>"#,
            inches_to_twips(margins.top),
            inches_to_twips(margins.right),
            inches_to_twips(margins.bottom),
            inches_to_twips(margins.left),
        ));
        xml.push_str("</w:sectPr>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Entry, Header, Section};

    fn write(doc: &DocumentModel) -> (String, RelationshipTable) {
        let style = StyleConfig::resume_default();
        let mut rels = RelationshipTable::new();
        let xml = DocumentWriter::new(&style, &mut rels).write(doc).unwrap();
        (xml, rels)
    }

    #[test]
    fn test_document_writer_basic() {
        let (xml, rels) = write(&DocumentModel::new());
        assert!(xml.contains("w:document"));
        assert!(xml.contains("<w:body>"));
        assert!(xml.contains(r#"<w:pgMar w:top="720" w:right="1440" w:bottom="720" w:left="1440""#));
        assert!(rels.is_empty());
    }

    #[test]
    fn test_every_run_has_font_properties() {
        let doc = DocumentModel::with_header(Header::new("Ada & Co", "Engineer"));
        let (xml, _) = write(&doc);
        assert_eq!(xml.matches("<w:r>").count(), 2);
        assert_eq!(xml.matches(r#"<w:rFonts w:ascii="Arial""#).count(), 2);
        assert_eq!(xml.matches(r#"<w:sz w:val="16"/>"#).count(), 2);
        assert!(xml.contains("<w:t>Ada &amp; Co</w:t>"));
        assert!(xml.contains(r#"<w:pStyle w:val="Title"/>"#));
    }

    #[test]
    fn test_hyperlinks_get_sequential_ids() {
        let bullet = Paragraph::with_runs(
            ParagraphStyle::Bullet,
            vec![
                Run::plain("Led development with "),
                Run::hyperlink("Example", "https://example.com"),
                Run::plain("."),
            ],
        );
        let heading = Paragraph::with_runs(
            ParagraphStyle::Heading2,
            vec![Run::hyperlink("Example", "https://example.com")],
        );
        let doc = DocumentModel::new().with_section(
            Section::new("Experience", 1, Paragraph::plain(ParagraphStyle::Heading1, "Experience"))
                .with_entry(Entry::new(heading, vec![bullet])),
        );

        let style = StyleConfig::resume_default();
        let mut rels = RelationshipTable::new();
        let mut writer = DocumentWriter::new(&style, &mut rels);
        let xml = writer.write(&doc).unwrap();
        assert_eq!(writer.referenced_ids(), ["rId1", "rId2"]);

        assert!(xml.contains(r#"<w:hyperlink r:id="rId1" w:history="1">"#));
        assert!(xml.contains(r#"<w:hyperlink r:id="rId2" w:history="1">"#));
        assert!(xml.contains(r#"<w:t xml:space="preserve">Led development with </w:t>"#));
        assert!(xml.contains(r#"<w:numId w:val="1"/>"#));
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.get("rId2").unwrap().target, "https://example.com");
    }

    #[test]
    fn test_empty_hyperlink_target_fails() {
        let doc = DocumentModel::new().with_paragraph(Paragraph::with_runs(
            ParagraphStyle::Body,
            vec![Run::hyperlink("nowhere", "")],
        ));
        let style = StyleConfig::resume_default();
        let mut rels = RelationshipTable::new();
        let err = DocumentWriter::new(&style, &mut rels).write(&doc).unwrap_err();
        assert!(matches!(err, DocxError::EmptyHyperlinkTarget { ref text } if text == "nowhere"));
    }

    #[test]
    fn test_control_character_target_fails() {
        let doc = DocumentModel::new().with_paragraph(Paragraph::with_runs(
            ParagraphStyle::Body,
            vec![Run::hyperlink("bell", "\u{7} \u{1}")],
        ));
        let style = StyleConfig::resume_default();
        let mut rels = RelationshipTable::new();
        let err = DocumentWriter::new(&style, &mut rels).write(&doc).unwrap_err();
        assert!(matches!(err, DocxError::EmptyHyperlinkTarget { .. }));
    }

    #[test]
    fn test_forbidden_characters_are_dropped_from_text() {
        let doc = DocumentModel::new()
            .with_paragraph(Paragraph::plain(ParagraphStyle::Body, "Ada\u{c}X"));
        let style = StyleConfig::resume_default();
        let mut rels = RelationshipTable::new();
        let xml = DocumentWriter::new(&style, &mut rels).write(&doc).unwrap();

        assert!(xml.contains("<w:t>AdaX</w:t>"));
        assert!(!xml.contains('\u{c}'));
    }

    #[test]
    fn test_tabs_breaks_and_spacing() {
        let doc = DocumentModel::new().with_paragraph(
            Paragraph::plain(ParagraphStyle::Body, "a\tb\nc")
                .with_space_before(12.0)
                .with_space_after(6.0),
        );
        let (xml, _) = write(&doc);
        assert!(xml.contains("<w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t>"));
        assert!(xml.contains(r#"<w:spacing w:before="240" w:after="120"/>"#));
    }
}
