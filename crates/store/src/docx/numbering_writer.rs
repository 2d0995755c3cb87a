//! Numbering.xml writer
//!
//! Resumes use a single list: a one-level bullet list referenced by every
//! `ListBullet` paragraph.

use crate::docx::{escape_xml, namespaces};
use doc_model::StyleConfig;

/// Numbering instance used by bullet paragraphs
pub const BULLET_NUM_ID: u32 = 1;
/// Abstract numbering definition behind `BULLET_NUM_ID`
const BULLET_ABSTRACT_NUM_ID: u32 = 0;

/// Bullet character
const BULLET_TEXT: &str = "\u{2022}";

/// Left indent and hanging indent of the bullet level, in twips
const BULLET_INDENT: u32 = 360;
const BULLET_HANGING: u32 = 360;

/// Writer for numbering.xml
pub struct NumberingWriter<'a> {
    style: &'a StyleConfig,
}

impl<'a> NumberingWriter<'a> {
    /// Create a new numbering writer
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// Generate numbering.xml content
    pub fn write(&self) -> String {
        let mut xml = String::new();

        // XML declaration
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');

        xml.push_str(&format!(
            r#"<w:numbering xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_bullet_abstract_num(&mut xml);

        xml.push_str(&format!(r#"<w:num w:numId="{}">"#, BULLET_NUM_ID));
        xml.push_str(&format!(
            r#"<w:abstractNumId w:val="{}"/>"#,
            BULLET_ABSTRACT_NUM_ID
        ));
        xml.push_str("</w:num>");

        xml.push_str("</w:numbering>");
        xml
    }

    /// Write the bullet abstract numbering definition
    fn write_bullet_abstract_num(&self, xml: &mut String) {
        xml.push_str(&format!(
            r#"<w:abstractNum w:abstractNumId="{}">"#,
            BULLET_ABSTRACT_NUM_ID
        ));
        xml.push_str(r#"<w:multiLevelType w:val="singleLevel"/>"#);

        xml.push_str(r#"<w:lvl w:ilvl="0">"#);
        xml.push_str(r#"<w:start w:val="1"/>"#);
        xml.push_str(r#"<w:numFmt w:val="bullet"/>"#);
        xml.push_str(&format!(r#"<w:lvlText w:val="{}"/>"#, BULLET_TEXT));
        xml.push_str(r#"<w:lvlJc w:val="left"/>"#);
        xml.push_str(r#"<w:suff w:val="tab"/>"#);

        xml.push_str("<w:pPr>");
        xml.push_str(&format!(
            r#"<w:ind w:left="{}" w:hanging="{}"/>"#,
            BULLET_INDENT, BULLET_HANGING
        ));
        xml.push_str("</w:pPr>");

        let font = escape_xml(self.style.font_name());
        xml.push_str("<w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:hint="default"/>"#,
            font
        ));
        xml.push_str("</w:rPr>");

        xml.push_str("</w:lvl>");
        xml.push_str("</w:abstractNum>");
    }
}
