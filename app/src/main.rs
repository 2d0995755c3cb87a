//! resumegen - Convert JSON resumes into Word documents
//!
//! Command-line front end: acquires resume data from a file or URL, picks
//! the output path, and reports failures to the console.

mod cli;
mod commands;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{CoverLetterArgs, ResumeSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing; RUST_LOG wins over the verbosity flag
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resume {
            file,
            url,
            output,
            style,
        } => {
            let source = match (file.as_deref(), url.as_deref()) {
                (Some(path), _) => ResumeSource::File(path),
                (None, Some(url)) => ResumeSource::Url(url),
                (None, None) => anyhow::bail!("Either --file or --url must be provided"),
            };
            commands::run_resume(source, &output, style.as_deref()).await?;
        }
        Commands::CoverLetter {
            json,
            template,
            position,
            company,
            output,
            style,
        } => {
            commands::run_cover_letter(CoverLetterArgs {
                json: &json,
                template: &template,
                position: &position,
                company: &company,
                output: &output,
                style: style.as_deref(),
            })?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        tracing::error!("Application failed: {:#}", err);
        std::process::exit(1);
    }
}
