//! Cover letter generation
//!
//! A plain-text template with `$name`-style placeholders is filled from the
//! resume header plus the target position and company, then laid out one
//! Body paragraph per non-blank line.

use crate::error::Result;
use crate::schema::ResumeHeader;
use doc_model::{DocumentModel, Paragraph, ParagraphStyle, StyleConfig};

const PLACEHOLDER_PATTERN: &str = r"\$([A-Za-z_]+)";

const SALUTATION: &str = "Dear Hiring Manager,";
const CLOSING: &str = "Sincerely,";

/// Space used around letter blocks, in points
const BLOCK_SPACING: f32 = 12.0;
/// Space after address-block lines, in points
const ADDRESS_SPACING: f32 = 6.0;

/// Values substituted into a cover letter template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverLetterData {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Already formatted, e.g. "May 24, 2025"
    pub date: String,
    pub position: String,
    pub company: String,
}

impl CoverLetterData {
    /// Collect letter data from a resume header
    ///
    /// Fails with a schema error naming the first required field that is
    /// missing or blank.
    pub fn from_header(
        header: &ResumeHeader,
        position: impl Into<String>,
        company: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self> {
        let name = header.require("name")?;
        let phone = header.require("phone")?;
        let email = header.require("email")?;
        let address = header.require("address")?;

        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            date: date.into(),
            position: position.into(),
            company: company.into(),
        })
    }

    /// Value for a placeholder key, without the leading `$`
    pub fn placeholder(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "address" => &self.address,
            "phone" => &self.phone,
            "email" => &self.email,
            "date" => &self.date,
            "position" => &self.position,
            "company" => &self.company,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn contact_line(&self) -> String {
        format!("{} | {}", self.phone, self.email)
    }
}

/// Substitute known placeholders; unknown ones are left as written
pub fn render_template(template: &str, data: &CoverLetterData) -> String {
    let Some(re) = regex_lite::Regex::new(PLACEHOLDER_PATTERN).ok() else {
        return template.to_string();
    };

    re.replace_all(template, |caps: &regex_lite::Captures| {
        let key = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        match data.placeholder(key) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

/// Render the template and lay it out as a document
pub fn build_cover_letter(template: &str, data: &CoverLetterData) -> DocumentModel {
    let rendered = render_template(template, data);
    let contact = data.contact_line();

    let mut doc = DocumentModel::new();
    let mut previous: Option<&str> = None;

    for line in rendered.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let para = Paragraph::plain(ParagraphStyle::Body, line);

        let para = if line == SALUTATION {
            para
        } else if line == CLOSING {
            para.with_space_before(BLOCK_SPACING)
        } else if line == data.name && previous == Some(CLOSING) {
            para
        } else if line == data.name
            || line == data.address
            || line == contact
            || line == data.date
        {
            para.with_space_after(ADDRESS_SPACING)
        } else {
            para.with_space_before(BLOCK_SPACING)
                .with_space_after(BLOCK_SPACING)
        };

        doc = doc.with_paragraph(para);
        previous = Some(line);
    }

    tracing::debug!(paragraphs = doc.paragraph_count(), "Cover letter built");
    doc
}

/// Render, lay out and serialize a cover letter
pub fn generate_cover_letter(
    template: &str,
    data: &CoverLetterData,
    style: &StyleConfig,
) -> Result<Vec<u8>> {
    let doc = build_cover_letter(template, data);
    let bytes = store::export_docx_bytes(&doc, style)?;
    tracing::info!(bytes = bytes.len(), company = %data.company, "Cover letter generated");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeError;

    fn data() -> CoverLetterData {
        CoverLetterData {
            name: "Ada Lovelace".to_string(),
            address: "12 St James's Square, London".to_string(),
            phone: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
            date: "May 24, 2025".to_string(),
            position: "Analyst".to_string(),
            company: "Engines Ltd".to_string(),
        }
    }

    const TEMPLATE: &str = "$name\n$address\n$phone | $email\n\n$date\n\nDear Hiring Manager,\n\n  I am applying for $position at $company.  \n\nSincerely,\n$name\n";

    #[test]
    fn test_render_substitutes_known_placeholders() {
        let out = render_template("Hi $company, re: $position ($unknown) $", &data());
        assert_eq!(out, "Hi Engines Ltd, re: Analyst ($unknown) $");
    }

    #[test]
    fn test_layout_spacing() {
        let doc = build_cover_letter(TEMPLATE, &data());
        let paras = doc.body();

        let summary: Vec<_> = paras
            .iter()
            .map(|p| (p.text(), p.properties.space_before, p.properties.space_after))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Ada Lovelace".to_string(), None, Some(6.0)),
                ("12 St James's Square, London".to_string(), None, Some(6.0)),
                ("555-0100 | ada@example.com".to_string(), None, Some(6.0)),
                ("May 24, 2025".to_string(), None, Some(6.0)),
                ("Dear Hiring Manager,".to_string(), None, None),
                (
                    "I am applying for Analyst at Engines Ltd.".to_string(),
                    Some(12.0),
                    Some(12.0)
                ),
                ("Sincerely,".to_string(), Some(12.0), None),
                ("Ada Lovelace".to_string(), None, None),
            ]
        );
        assert!(paras.iter().all(|p| p.style == Some(ParagraphStyle::Body)));
    }

    #[test]
    fn test_from_header_requires_contact_fields() {
        let header = ResumeHeader {
            name: Some("Ada".to_string()),
            phone: Some("555".to_string()),
            email: Some("".to_string()),
            address: Some("London".to_string()),
            ..Default::default()
        };

        let err =
            CoverLetterData::from_header(&header, "Analyst", "Engines", "today").unwrap_err();
        assert!(matches!(err, ResumeError::Schema(ref m) if m.contains("'email'")));
    }

    #[test]
    fn test_generate_cover_letter_bytes() {
        let bytes =
            generate_cover_letter(TEMPLATE, &data(), &StyleConfig::cover_letter_default()).unwrap();
        let summary = store::inspect_docx_bytes(&bytes).unwrap();
        assert_eq!(summary.paragraphs.len(), 8);
        assert!(summary.hyperlink_ids().is_empty());
    }
}
