//! Loading resume data, templates and style files

use anyhow::{Context, Result};
use doc_model::StyleConfig;
use std::path::Path;

/// Desktop browser identity; some hosts refuse requests without one
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Read and parse a JSON file
pub fn load_json(path: &Path) -> Result<serde_json::Value> {
    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from));

    parsed
        .inspect_err(|e| tracing::error!("Failed to load JSON from {}: {}", path.display(), e))
        .with_context(|| format!("Failed to load JSON from {}", path.display()))
}

/// Fetch and parse JSON over HTTP; non-2xx responses are errors
pub async fn fetch_json(url: &str) -> Result<serde_json::Value> {
    let fetched = async {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await
    }
    .await;

    fetched
        .inspect_err(|e| tracing::error!("Failed to fetch JSON from {}: {}", url, e))
        .with_context(|| format!("Failed to fetch JSON from {}", url))
}

/// Read a text template
pub fn load_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .inspect_err(|e| tracing::error!("Failed to read template from {}: {}", path.display(), e))
        .with_context(|| format!("Failed to read template from {}", path.display()))
}

/// Style from `path`, or `default` when no path was given
pub fn load_style(path: Option<&Path>, default: StyleConfig) -> Result<StyleConfig> {
    let Some(path) = path else {
        return Ok(default);
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read style from {}", path.display()))?;
    let style = resume::style_from_json(&text)
        .with_context(|| format!("Invalid style in {}", path.display()))?;

    tracing::debug!(
        font = style.font_name(),
        size = style.font_size(),
        "Loaded style from {}",
        path.display()
    );
    Ok(style)
}
