//! Sections and entries of a resume

use crate::Paragraph;
use serde::{Deserialize, Serialize};

/// One resume entry: a heading line followed by bullet paragraphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Position and date line
    pub heading: Paragraph,
    /// One paragraph per item
    pub bullets: Vec<Paragraph>,
}

impl Entry {
    pub fn new(heading: Paragraph, bullets: Vec<Paragraph>) -> Self {
        Self { heading, bullets }
    }

    /// Heading followed by bullets
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        std::iter::once(&self.heading).chain(self.bullets.iter())
    }
}

/// A titled resume section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section title, rendered as a heading paragraph
    pub title: String,
    /// Opaque identifier carried over from the input; never used for ordering
    pub order_key: i64,
    /// The heading paragraph for `title`
    pub heading: Paragraph,
    /// Entries in input order
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(title: impl Into<String>, order_key: i64, heading: Paragraph) -> Self {
        Self {
            title: title.into(),
            order_key,
            heading,
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Section heading, then each entry's paragraphs in order
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        std::iter::once(&self.heading).chain(self.entries.iter().flat_map(Entry::paragraphs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParagraphStyle;

    #[test]
    fn test_section_paragraph_order() {
        let entry = Entry::new(
            Paragraph::plain(ParagraphStyle::Heading2, "Engineer"),
            vec![
                Paragraph::plain(ParagraphStyle::Bullet, "one"),
                Paragraph::plain(ParagraphStyle::Bullet, "two"),
            ],
        );
        let section = Section::new(
            "Experience",
            5,
            Paragraph::plain(ParagraphStyle::Heading1, "Experience"),
        )
        .with_entry(entry);

        let texts: Vec<String> = section.paragraphs().map(Paragraph::text).collect();
        assert_eq!(texts, vec!["Experience", "Engineer", "one", "two"]);
    }

    #[test]
    fn test_entry_without_bullets() {
        let entry = Entry::new(Paragraph::plain(ParagraphStyle::Heading2, "Volunteer"), vec![]);
        assert_eq!(entry.paragraphs().count(), 1);
    }
}
