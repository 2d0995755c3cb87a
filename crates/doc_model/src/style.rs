//! Style configuration - font and page geometry shared by every run
//!
//! A `StyleConfig` is validated once at construction and is read-only
//! afterwards, so one value can be shared across any number of generation
//! calls (including concurrent ones).

use crate::error::{DocModelError, Result};
use serde::{Deserialize, Serialize};

/// Twips per inch (1 inch = 72 points = 1440 twips)
pub const TWIPS_PER_INCH: f32 = 1440.0;

/// Largest `w:sz` value Word accepts (1638 pt)
pub const MAX_FONT_HALF_POINTS: u32 = 3276;

/// Largest page margin Word accepts (22 inches)
pub const MAX_MARGIN_TWIPS: u32 = 31680;

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Margins {
    /// Create margins from individual values (inches)
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The same margin on every side
    pub fn uniform(inches: f32) -> Self {
        Self::new(inches, inches, inches, inches)
    }

    fn validate(&self) -> Result<()> {
        for (side, value) in [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(DocModelError::InvalidStyle(format!(
                    "margin '{}' must be a positive number of inches, got {}",
                    side, value
                )));
            }
            let twips = (f64::from(value) * f64::from(TWIPS_PER_INCH)).round();
            if twips < 1.0 || twips > f64::from(MAX_MARGIN_TWIPS) {
                return Err(DocModelError::InvalidStyle(format!(
                    "margin '{}' must be between 1 and {} twips, got {} inches",
                    side, MAX_MARGIN_TWIPS, value
                )));
            }
        }
        Ok(())
    }
}

/// Serialized form of a style configuration, validated on conversion
#[derive(Debug, Clone, Deserialize)]
struct RawStyleConfig {
    font_name: String,
    font_size: f32,
    margins: Margins,
}

impl TryFrom<RawStyleConfig> for StyleConfig {
    type Error = DocModelError;

    fn try_from(raw: RawStyleConfig) -> Result<Self> {
        StyleConfig::new(raw.font_name, raw.font_size, raw.margins)
    }
}

/// Immutable font and page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStyleConfig")]
pub struct StyleConfig {
    font_name: String,
    font_size: f32,
    margins: Margins,
}

impl StyleConfig {
    /// Create a validated style configuration
    ///
    /// The font name must be non-blank. The font size (points) must round
    /// to between 1 and `MAX_FONT_HALF_POINTS` half-points, and every margin
    /// (inches) to between 1 and `MAX_MARGIN_TWIPS` twips.
    pub fn new(font_name: impl Into<String>, font_size: f32, margins: Margins) -> Result<Self> {
        let font_name = font_name.into();
        if font_name.trim().is_empty() {
            return Err(DocModelError::InvalidStyle(
                "font name must not be empty".to_string(),
            ));
        }
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(DocModelError::InvalidStyle(format!(
                "font size must be a positive number of points, got {}",
                font_size
            )));
        }
        let half_points = (f64::from(font_size) * 2.0).round();
        if half_points < 1.0 || half_points > f64::from(MAX_FONT_HALF_POINTS) {
            return Err(DocModelError::InvalidStyle(format!(
                "font size must be between 0.5 and {} points, got {}",
                MAX_FONT_HALF_POINTS / 2,
                font_size
            )));
        }
        margins.validate()?;

        Ok(Self {
            font_name,
            font_size,
            margins,
        })
    }

    /// Compact resume layout: Arial 8pt, half-inch top/bottom margins
    pub fn resume_default() -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_size: 8.0,
            margins: Margins::new(0.5, 0.5, 1.0, 1.0),
        }
    }

    /// Letter layout: Arial 11pt, one-inch margins
    pub fn cover_letter_default() -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_size: 11.0,
            margins: Margins::uniform(1.0),
        }
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Font size in points
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Font size in half-points, the unit used by `w:sz`
    pub fn font_size_half_points(&self) -> u32 {
        (self.font_size * 2.0).round() as u32
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::resume_default()
    }
}

/// Convert inches to twips (1/20 of a point)
pub fn inches_to_twips(inches: f32) -> u32 {
    (inches * TWIPS_PER_INCH).round() as u32
}

/// Convert points to twips
pub fn points_to_twips(points: f32) -> u32 {
    (points * 20.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_default() {
        let style = StyleConfig::resume_default();
        assert_eq!(style.font_name(), "Arial");
        assert_eq!(style.font_size(), 8.0);
        assert_eq!(style.font_size_half_points(), 16);
        assert_eq!(style.margins().top, 0.5);
        assert_eq!(style.margins().left, 1.0);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(StyleConfig::new("Arial", 0.0, Margins::uniform(1.0)).is_err());
        assert!(StyleConfig::new("Arial", -3.0, Margins::uniform(1.0)).is_err());
        assert!(StyleConfig::new("Arial", f32::NAN, Margins::uniform(1.0)).is_err());
        assert!(StyleConfig::new("Arial", 10.0, Margins::new(1.0, 0.0, 1.0, 1.0)).is_err());
        assert!(StyleConfig::new("  ", 10.0, Margins::uniform(1.0)).is_err());
    }

    #[test]
    fn test_font_size_limits() {
        let margins = Margins::uniform(1.0);
        assert!(StyleConfig::new("Arial", 0.2, margins).is_err());
        assert!(StyleConfig::new("Arial", 1639.0, margins).is_err());
        assert!(StyleConfig::new("Arial", 1.0e30, margins).is_err());

        let smallest = StyleConfig::new("Arial", 0.5, margins).unwrap();
        assert_eq!(smallest.font_size_half_points(), 1);
        let largest = StyleConfig::new("Arial", 1638.0, margins).unwrap();
        assert_eq!(largest.font_size_half_points(), MAX_FONT_HALF_POINTS);
    }

    #[test]
    fn test_margin_limits() {
        assert!(StyleConfig::new("Arial", 10.0, Margins::uniform(0.0001)).is_err());
        assert!(StyleConfig::new("Arial", 10.0, Margins::new(1.0, 23.0, 1.0, 1.0)).is_err());
        assert!(StyleConfig::new("Arial", 10.0, Margins::uniform(f32::MAX)).is_err());

        let widest = StyleConfig::new("Arial", 10.0, Margins::uniform(22.0)).unwrap();
        assert_eq!(inches_to_twips(widest.margins().top), MAX_MARGIN_TWIPS);
        let narrowest = StyleConfig::new("Arial", 10.0, Margins::uniform(1.0 / 1440.0)).unwrap();
        assert_eq!(inches_to_twips(narrowest.margins().left), 1);
    }

    #[test]
    fn test_error_names_the_bad_margin() {
        let err = StyleConfig::new("Arial", 10.0, Margins::new(1.0, 1.0, -1.0, 1.0)).unwrap_err();
        assert!(err.to_string().contains("left"));
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(inches_to_twips(1.0), 1440);
        assert_eq!(inches_to_twips(0.5), 720);
        assert_eq!(points_to_twips(12.0), 240);

        let style = StyleConfig::new("Georgia", 10.5, Margins::uniform(1.0)).unwrap();
        assert_eq!(style.font_size_half_points(), 21);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"font_name":"Calibri","font_size":11,"margins":{"top":1,"bottom":1,"left":0.75,"right":0.75}}"#;
        let style: StyleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(style.font_name(), "Calibri");
        assert_eq!(style.margins().left, 0.75);

        let bad = r#"{"font_name":"Calibri","font_size":0,"margins":{"top":1,"bottom":1,"left":1,"right":1}}"#;
        assert!(serde_json::from_str::<StyleConfig>(bad).is_err());

        let tiny = r#"{"font_name":"Calibri","font_size":0.2,"margins":{"top":1,"bottom":1,"left":1,"right":1}}"#;
        assert!(serde_json::from_str::<StyleConfig>(tiny).is_err());
    }
}
