//! Output path templating

use chrono::NaiveDateTime;
use std::path::PathBuf;

const DATETIME_PLACEHOLDER: &str = "{datetime}";

/// Resume file names carry year and month
pub const RESUME_DATE_FORMAT: &str = "%Y-%m";
/// Cover letter file names carry the full date
pub const COVER_LETTER_DATE_FORMAT: &str = "%Y-%m-%d";
/// Date printed inside a cover letter, e.g. "May 24, 2025"
pub const LETTER_DATE_FORMAT: &str = "%B %d, %Y";

/// Replace every `{datetime}` in `template` with `now` rendered by `format`
pub fn render_output_path(template: &str, now: NaiveDateTime, format: &str) -> PathBuf {
    PathBuf::from(template.replace(DATETIME_PLACEHOLDER, &now.format(format).to_string()))
}

/// Current local time, the reference for every date the CLI prints
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn may_24() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 24)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_resume_output_path() {
        assert_eq!(
            render_output_path("{datetime}_resume.docx", may_24(), RESUME_DATE_FORMAT),
            PathBuf::from("2025-05_resume.docx")
        );
    }

    #[test]
    fn test_cover_letter_output_path() {
        assert_eq!(
            render_output_path(
                "out/{datetime}_cover_letter.docx",
                may_24(),
                COVER_LETTER_DATE_FORMAT
            ),
            PathBuf::from("out/2025-05-24_cover_letter.docx")
        );
    }

    #[test]
    fn test_template_without_placeholder_is_unchanged() {
        assert_eq!(
            render_output_path("resume.docx", may_24(), RESUME_DATE_FORMAT),
            PathBuf::from("resume.docx")
        );
    }

    #[test]
    fn test_letter_date_format() {
        assert_eq!(may_24().format(LETTER_DATE_FORMAT).to_string(), "May 24, 2025");
    }
}
