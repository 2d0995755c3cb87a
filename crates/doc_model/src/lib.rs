//! Document Model - Resume document tree and text segmentation
//!
//! This crate provides the in-memory model a resume is rendered into before
//! packaging: an immutable style configuration, styled text runs, paragraphs,
//! entries and sections, plus the restricted hyperlink markup parser that
//! splits source strings into runs.

mod error;
mod style;
mod run;
mod paragraph;
mod section;
mod document;
pub mod markup;

pub use error::*;
pub use style::*;
pub use run::*;
pub use paragraph::*;
pub use section::*;
pub use document::*;
pub use markup::{Degradation, DegradationKind, MarkupParser, ParsedMarkup};
