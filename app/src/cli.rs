//! Command-line definition

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resumegen")]
#[command(version)]
#[command(about = "Convert JSON resumes into formatted Word documents", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a resume from a local file or a URL
    #[command(group(ArgGroup::new("source").required(true).args(["file", "url"])))]
    Resume {
        /// Path to a JSON resume file
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// URL to fetch JSON resume data from
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Output path ({datetime} becomes the current year and month)
        #[arg(short, long, default_value = "{datetime}_resume.docx")]
        output: String,

        /// Style configuration JSON (font and margins)
        #[arg(long, value_name = "PATH")]
        style: Option<PathBuf>,
    },

    /// Generate a cover letter from a template and a resume header
    CoverLetter {
        /// JSON file whose header holds name, phone, email and address
        #[arg(long, value_name = "PATH")]
        json: PathBuf,

        /// Cover letter template with $placeholders
        #[arg(long, default_value = "templates/cover_letter.txt")]
        template: PathBuf,

        /// Position applied for
        #[arg(long, default_value = "Principal Software Engineer")]
        position: String,

        /// Company applied to
        #[arg(long)]
        company: String,

        /// Output path ({datetime} becomes the current date)
        #[arg(short, long, default_value = "{datetime}_cover_letter.docx")]
        output: String,

        /// Style configuration JSON (font and margins)
        #[arg(long, value_name = "PATH")]
        style: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["resumegen", "resume"]).is_err());
        assert!(Cli::try_parse_from([
            "resumegen", "resume", "--file", "a.json", "--url", "https://x.test"
        ])
        .is_err());

        let cli = Cli::try_parse_from(["resumegen", "resume", "--file", "a.json"]).unwrap();
        match cli.command {
            Commands::Resume { file, url, output, .. } => {
                assert_eq!(file, Some(PathBuf::from("a.json")));
                assert_eq!(url, None);
                assert_eq!(output, "{datetime}_resume.docx");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cover_letter_defaults() {
        let cli = Cli::try_parse_from([
            "resumegen",
            "cover-letter",
            "--json",
            "r.json",
            "--company",
            "Acme",
        ])
        .unwrap();

        match cli.command {
            Commands::CoverLetter {
                template,
                position,
                output,
                ..
            } => {
                assert_eq!(template, PathBuf::from("templates/cover_letter.txt"));
                assert_eq!(position, "Principal Software Engineer");
                assert_eq!(output, "{datetime}_cover_letter.docx");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cover_letter_requires_company() {
        assert!(Cli::try_parse_from(["resumegen", "cover-letter", "--json", "r.json"]).is_err());
    }
}
