//! Subcommand implementations

use crate::input;
use crate::output::{self, COVER_LETTER_DATE_FORMAT, LETTER_DATE_FORMAT, RESUME_DATE_FORMAT};
use anyhow::{Context, Result};
use doc_model::StyleConfig;
use resume::cover_letter::{generate_cover_letter, CoverLetterData};
use resume::{Resume, ResumeAssembler};
use std::path::{Path, PathBuf};

/// Where resume JSON comes from
pub enum ResumeSource<'a> {
    File(&'a Path),
    Url(&'a str),
}

/// Load resume data, generate the package and save it
pub async fn run_resume(
    source: ResumeSource<'_>,
    output_template: &str,
    style_path: Option<&Path>,
) -> Result<PathBuf> {
    let style = input::load_style(style_path, StyleConfig::resume_default())?;

    let value = match source {
        ResumeSource::File(path) => input::load_json(path)?,
        ResumeSource::Url(url) => input::fetch_json(url).await?,
    };
    let resume = Resume::from_json_value(value)?;

    let output_path =
        output::render_output_path(output_template, output::local_now(), RESUME_DATE_FORMAT);
    ResumeAssembler::new(style)
        .generate_to_file(&resume, &output_path)
        .with_context(|| format!("Failed to generate resume {}", output_path.display()))?;

    tracing::info!("Resume saved to {}", output_path.display());
    Ok(output_path)
}

/// Arguments of the cover letter command
pub struct CoverLetterArgs<'a> {
    pub json: &'a Path,
    pub template: &'a Path,
    pub position: &'a str,
    pub company: &'a str,
    pub output: &'a str,
    pub style: Option<&'a Path>,
}

/// Fill the template from the resume header and save the letter
pub fn run_cover_letter(args: CoverLetterArgs<'_>) -> Result<PathBuf> {
    let style = input::load_style(args.style, StyleConfig::cover_letter_default())?;
    let template = input::load_template(args.template)?;
    let resume = Resume::from_json_value(input::load_json(args.json)?)?;

    let now = output::local_now();
    let data = CoverLetterData::from_header(
        &resume.header,
        args.position,
        args.company,
        now.format(LETTER_DATE_FORMAT).to_string(),
    )?;

    let output_path = output::render_output_path(args.output, now, COVER_LETTER_DATE_FORMAT);
    let bytes = generate_cover_letter(&template, &data, &style)?;
    store::write_package(&bytes, &output_path)?;

    tracing::info!("Cover letter saved to {}", output_path.display());
    Ok(output_path)
}
