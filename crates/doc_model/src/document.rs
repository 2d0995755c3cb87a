//! Document root - header, sections and free body paragraphs

use crate::{Paragraph, ParagraphStyle, Section};
use serde::{Deserialize, Serialize};

/// Resume header: the person's name and professional title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub title: String,
}

impl Header {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }
}

/// The complete in-memory document handed to the package writer
///
/// Built once through the `with_*` methods and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentModel {
    header_paragraphs: Vec<Paragraph>,
    sections: Vec<Section>,
    body: Vec<Paragraph>,
}

impl DocumentModel {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document opening with a name (Title) and title (Subtitle)
    ///
    /// Header text is plain; it is never scanned for markup.
    pub fn with_header(header: Header) -> Self {
        let header_paragraphs = vec![
            Paragraph::plain(ParagraphStyle::Title, header.name),
            Paragraph::plain(ParagraphStyle::Subtitle, header.title),
        ];
        Self {
            header_paragraphs,
            sections: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Append a section
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a free paragraph after all sections
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.body.push(paragraph);
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn body(&self) -> &[Paragraph] {
        &self.body
    }

    /// Every paragraph in document order
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.header_paragraphs
            .iter()
            .chain(self.sections.iter().flat_map(Section::paragraphs))
            .chain(self.body.iter())
    }

    /// Number of paragraphs in the document
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Number of hyperlink runs across all paragraphs
    pub fn hyperlink_count(&self) -> usize {
        self.paragraphs().map(|p| p.hyperlinks().count()).sum()
    }
}
