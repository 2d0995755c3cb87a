//! Resume to DocumentModel conversion

use crate::error::{ResumeError, Result};
use crate::schema::{ContentEntry, ContentSection, Resume};
use doc_model::{
    DocumentModel, Entry, Header, MarkupParser, Paragraph, ParagraphStyle, Run, Section,
    StyleConfig,
};

/// Builds the paragraph tree of a resume
///
/// Sections and entries keep their input order. Entry positions and bullet
/// items are scanned for hyperlink markup; the header, section titles and
/// dates are always plain text.
pub struct DocumentBuilder;

impl DocumentBuilder {
    pub fn build(resume: &Resume, style: &StyleConfig) -> Result<DocumentModel> {
        let name = resume
            .header
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                ResumeError::Schema("Missing or empty field 'name' in JSON header".to_string())
            })?;
        let title = resume.header.title.as_deref().unwrap_or_default();

        let mut doc = DocumentModel::with_header(Header::new(name, title));
        for section in &resume.contents {
            doc = doc.with_section(build_section(section));
        }

        tracing::debug!(
            sections = doc.sections().len(),
            paragraphs = doc.paragraph_count(),
            hyperlinks = doc.hyperlink_count(),
            font = style.font_name(),
            "Resume document built"
        );

        Ok(doc)
    }
}

fn build_section(section: &ContentSection) -> Section {
    let heading = Paragraph::plain(ParagraphStyle::Heading1, section.title.as_str());
    section
        .content
        .iter()
        .fold(Section::new(section.title.as_str(), section.id, heading), |acc, entry| {
            acc.with_entry(build_entry(entry))
        })
}

fn build_entry(entry: &ContentEntry) -> Entry {
    let bullets = entry
        .items
        .iter()
        .map(|item| Paragraph::with_runs(ParagraphStyle::Bullet, MarkupParser::parse(item)))
        .collect();

    Entry::new(entry_heading(&entry.position, &entry.date), bullets)
}

/// `position - (date)`, with the position scanned for markup
fn entry_heading(position: &str, date: &str) -> Paragraph {
    let mut runs = MarkupParser::parse(position);

    if !date.is_empty() {
        let suffix = if runs.is_empty() {
            format!("({})", date)
        } else {
            format!(" - ({})", date)
        };

        // Merge into a trailing plain run so plain runs stay maximal
        match runs.last_mut() {
            Some(last) if !last.is_hyperlink() => last.text.push_str(&suffix),
            _ => runs.push(Run::plain(suffix)),
        }
    }

    Paragraph::with_runs(ParagraphStyle::Heading2, runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ResumeHeader;

    fn resume_with(entry: ContentEntry) -> Resume {
        Resume {
            header: ResumeHeader {
                name: Some("Ada".to_string()),
                title: Some("Analyst".to_string()),
                ..Default::default()
            },
            contents: vec![ContentSection {
                title: "Experience".to_string(),
                id: 7,
                content: vec![entry],
            }],
        }
    }

    #[test]
    fn test_entry_heading_variants() {
        assert_eq!(entry_heading("Engineer", "2020").text(), "Engineer - (2020)");
        assert_eq!(entry_heading("Engineer", "").text(), "Engineer");
        assert_eq!(entry_heading("", "2020").text(), "(2020)");
        assert!(entry_heading("", "").runs.is_empty());
    }

    #[test]
    fn test_entry_heading_after_link() {
        let heading = entry_heading("<a href='https://acme.test'>Acme</a>", "2021");
        assert_eq!(
            heading.runs,
            vec![
                Run::hyperlink("Acme", "https://acme.test"),
                Run::plain(" - (2021)"),
            ]
        );
    }

    #[test]
    fn test_entry_heading_merges_plain_suffix() {
        let heading = entry_heading("Lead at <a href='u'>X</a> Labs", "2019");
        assert_eq!(heading.runs.len(), 3);
        assert_eq!(heading.runs[2], Run::plain(" Labs - (2019)"));
    }

    #[test]
    fn test_build_keeps_structure() {
        let resume = resume_with(ContentEntry {
            id: 1,
            position: "Engineer".to_string(),
            date: "2020".to_string(),
            items: vec![
                "One".to_string(),
                "Two <a href='https://t.test'>link</a>".to_string(),
            ],
        });

        let doc = DocumentBuilder::build(&resume, &StyleConfig::resume_default()).unwrap();
        let section = &doc.sections()[0];
        assert_eq!(section.title, "Experience");
        assert_eq!(section.order_key, 7);
        assert_eq!(section.entries.len(), 1);
        assert_eq!(section.entries[0].bullets.len(), 2);
        assert_eq!(doc.hyperlink_count(), 1);
        assert_eq!(doc.paragraph_count(), 2 + 1 + 1 + 2);
    }

    #[test]
    fn test_empty_items_produce_heading_only() {
        let resume = resume_with(ContentEntry {
            position: "Engineer".to_string(),
            ..Default::default()
        });
        let doc = DocumentBuilder::build(&resume, &StyleConfig::resume_default()).unwrap();
        assert!(doc.sections()[0].entries[0].bullets.is_empty());
    }

    #[test]
    fn test_blank_name_is_schema_error() {
        let mut resume = resume_with(ContentEntry::default());
        resume.header.name = Some("   ".to_string());
        let err = DocumentBuilder::build(&resume, &StyleConfig::resume_default()).unwrap_err();
        assert!(matches!(err, ResumeError::Schema(_)));
    }
}
