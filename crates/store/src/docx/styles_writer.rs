//! Styles.xml writer
//!
//! Generates styles.xml for the fixed set of resume paragraph styles plus the
//! Hyperlink character style. Fonts and sizes derive from the StyleConfig.

use crate::docx::document_writer::HYPERLINK_COLOR;
use crate::docx::numbering_writer::BULLET_NUM_ID;
use crate::docx::{escape_xml, namespaces};
use doc_model::{ParagraphStyle, StyleConfig};

/// Writer for styles.xml
pub struct StylesWriter<'a> {
    style: &'a StyleConfig,
}

impl<'a> StylesWriter<'a> {
    /// Create a new styles writer
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// Generate styles.xml content
    pub fn write(&self) -> String {
        let mut xml = String::new();

        // XML declaration
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');

        xml.push_str(&format!(
            r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_doc_defaults(&mut xml);

        for style in ParagraphStyle::all() {
            self.write_paragraph_style(&mut xml, style);
        }
        self.write_hyperlink_style(&mut xml);

        xml.push_str("</w:styles>");
        xml
    }

    /// Write document defaults
    fn write_doc_defaults(&self, xml: &mut String) {
        let font = escape_xml(self.style.font_name());
        let half_pts = self.style.font_size_half_points();

        xml.push_str("<w:docDefaults>");

        xml.push_str("<w:rPrDefault>");
        xml.push_str("<w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
            font
        ));
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
        xml.push_str("</w:rPr>");
        xml.push_str("</w:rPrDefault>");

        xml.push_str("<w:pPrDefault>");
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:spacing w:after="0" w:line="240" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr>");
        xml.push_str("</w:pPrDefault>");

        xml.push_str("</w:docDefaults>");
    }

    /// Write a single paragraph style definition
    fn write_paragraph_style(&self, xml: &mut String, style: ParagraphStyle) {
        let is_default = style == ParagraphStyle::Body;

        xml.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="{}""#,
            style.style_id()
        ));
        if is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        xml.push_str(&format!(r#"<w:name w:val="{}"/>"#, style.display_name()));
        if !is_default {
            xml.push_str(&format!(
                r#"<w:basedOn w:val="{}"/>"#,
                ParagraphStyle::Body.style_id()
            ));
            xml.push_str(&format!(
                r#"<w:next w:val="{}"/>"#,
                ParagraphStyle::Body.style_id()
            ));
        }
        xml.push_str("<w:qFormat/>");

        let (space_before, space_after, outline_level) = match style {
            ParagraphStyle::Title => (0, 60, None),
            ParagraphStyle::Subtitle => (0, 120, None),
            ParagraphStyle::Heading1 => (240, 60, Some(0)),
            ParagraphStyle::Heading2 => (120, 40, Some(1)),
            ParagraphStyle::Body | ParagraphStyle::Bullet => (0, 0, None),
        };

        xml.push_str("<w:pPr>");
        if style == ParagraphStyle::Bullet {
            xml.push_str(&format!(
                r#"<w:numPr><w:numId w:val="{}"/></w:numPr>"#,
                BULLET_NUM_ID
            ));
        }
        if matches!(style, ParagraphStyle::Heading1 | ParagraphStyle::Heading2) {
            xml.push_str("<w:keepNext/>");
        }
        xml.push_str(&format!(
            r#"<w:spacing w:before="{}" w:after="{}"/>"#,
            space_before, space_after
        ));
        if let Some(level) = outline_level {
            xml.push_str(&format!(r#"<w:outlineLvl w:val="{}"/>"#, level));
        }
        xml.push_str("</w:pPr>");

        self.write_character_properties(xml, style);

        xml.push_str("</w:style>");
    }

    /// Heading sizes scale from the base font size
    fn write_character_properties(&self, xml: &mut String, style: ParagraphStyle) {
        let base = self.style.font_size();
        let size = match style {
            ParagraphStyle::Title => Some(base * 2.5),
            ParagraphStyle::Subtitle => Some(base * 1.5),
            ParagraphStyle::Heading1 => Some(base * 1.75),
            ParagraphStyle::Heading2 => Some(base * 1.25),
            ParagraphStyle::Body | ParagraphStyle::Bullet => None,
        };
        let bold = matches!(style, ParagraphStyle::Heading1 | ParagraphStyle::Heading2);

        if size.is_none() && !bold {
            return;
        }

        xml.push_str("<w:rPr>");
        if bold {
            xml.push_str("<w:b/>");
            xml.push_str("<w:bCs/>");
        }
        if let Some(size) = size {
            let half_pts = (size * 2.0).round() as u32;
            xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
            xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
        }
        xml.push_str("</w:rPr>");
    }

    /// Write the Hyperlink character style
    fn write_hyperlink_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="character" w:styleId="Hyperlink">"#);
        xml.push_str(r#"<w:name w:val="Hyperlink"/>"#);
        xml.push_str(r#"<w:uiPriority w:val="99"/>"#);
        xml.push_str("<w:unhideWhenUsed/>");
        xml.push_str("<w:rPr>");
        xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, HYPERLINK_COLOR));
        xml.push_str(r#"<w:u w:val="single"/>"#);
        xml.push_str("</w:rPr>");
        xml.push_str("</w:style>");
    }
}
