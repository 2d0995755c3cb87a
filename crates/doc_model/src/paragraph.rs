//! Paragraph - an ordered sequence of runs with an optional style

use crate::Run;
use serde::{Deserialize, Serialize};

/// Named paragraph styles understood by the package writer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParagraphStyle {
    Title,
    Subtitle,
    Heading1,
    Heading2,
    Body,
    Bullet,
}

impl ParagraphStyle {
    /// Style ID used in styles.xml
    pub fn style_id(&self) -> &'static str {
        match self {
            ParagraphStyle::Title => "Title",
            ParagraphStyle::Subtitle => "Subtitle",
            ParagraphStyle::Heading1 => "Heading1",
            ParagraphStyle::Heading2 => "Heading2",
            ParagraphStyle::Body => "Normal",
            ParagraphStyle::Bullet => "ListBullet",
        }
    }

    /// Human-readable style name
    pub fn display_name(&self) -> &'static str {
        match self {
            ParagraphStyle::Title => "Title",
            ParagraphStyle::Subtitle => "Subtitle",
            ParagraphStyle::Heading1 => "heading 1",
            ParagraphStyle::Heading2 => "heading 2",
            ParagraphStyle::Body => "Normal",
            ParagraphStyle::Bullet => "List Bullet",
        }
    }

    /// All styles, in the order they are declared in styles.xml
    pub fn all() -> [ParagraphStyle; 6] {
        [
            ParagraphStyle::Body,
            ParagraphStyle::Title,
            ParagraphStyle::Subtitle,
            ParagraphStyle::Heading1,
            ParagraphStyle::Heading2,
            ParagraphStyle::Bullet,
        ]
    }
}

/// Direct paragraph spacing, in points
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphProperties {
    /// Space before paragraph in points
    pub space_before: Option<f32>,
    /// Space after paragraph in points
    pub space_after: Option<f32>,
}

impl ParagraphProperties {
    pub fn is_empty(&self) -> bool {
        self.space_before.is_none() && self.space_after.is_none()
    }
}

/// A paragraph of runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph style, `None` means the document default
    pub style: Option<ParagraphStyle>,
    /// Direct spacing overrides
    #[serde(default)]
    pub properties: ParagraphProperties,
    /// Runs in reading order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph with the given style
    pub fn new(style: ParagraphStyle) -> Self {
        Self {
            style: Some(style),
            properties: ParagraphProperties::default(),
            runs: Vec::new(),
        }
    }

    /// Create a paragraph holding a single plain run
    ///
    /// Empty text produces a paragraph with no runs.
    pub fn plain(style: ParagraphStyle, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut para = Self::new(style);
        if !text.is_empty() {
            para.runs.push(Run::plain(text));
        }
        para
    }

    /// Create a paragraph from prepared runs
    pub fn with_runs(style: ParagraphStyle, runs: Vec<Run>) -> Self {
        Self {
            style: Some(style),
            properties: ParagraphProperties::default(),
            runs,
        }
    }

    pub fn with_space_before(mut self, points: f32) -> Self {
        self.properties.space_before = Some(points);
        self
    }

    pub fn with_space_after(mut self, points: f32) -> Self {
        self.properties.space_after = Some(points);
        self
    }

    /// Visible text of all runs concatenated
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Iterate over hyperlink runs only
    pub fn hyperlinks(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter().filter(|r| r.is_hyperlink())
    }
}
