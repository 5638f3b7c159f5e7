//! Image Variant Module
//!
//! One rendition of an image, identified by URL with optional explicit dimensions.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Matches `-<width>x<height>.<ext>` at the end of a URL path.
static SIZE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-(\d+)x(\d+)\.[A-Za-z0-9]+$").expect("size suffix pattern is valid")
});

// == Image Variant ==
/// A single size rendition of a featured image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageVariant {
    /// Public URL of this rendition
    pub source_url: String,
    /// Explicit width in pixels, if the backend reported one
    #[serde(default, deserialize_with = "lenient_u32")]
    pub width: Option<u32>,
    /// Explicit height in pixels, if the backend reported one
    #[serde(default, deserialize_with = "lenient_u32")]
    pub height: Option<u32>,
}

impl ImageVariant {
    /// Creates a variant with no explicit dimensions.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            width: None,
            height: None,
        }
    }

    /// Creates a variant with explicit dimensions.
    pub fn with_dimensions(source_url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source_url: source_url.into(),
            width: Some(width),
            height: Some(height),
        }
    }

    // == Effective Dimensions ==
    /// Returns `(width, height)` used for selection.
    ///
    /// Explicit dimensions win when both are present. Otherwise both come from
    /// the filename pattern, and an unparsable URL yields `(0, 0)`.
    pub fn dimensions(&self) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(width), Some(height)) => (width, height),
            _ => dimensions_from_url(&self.source_url).unwrap_or((0, 0)),
        }
    }

    /// Returns the pixel area of this variant.
    pub fn area(&self) -> u64 {
        let (width, height) = self.dimensions();
        u64::from(width) * u64::from(height)
    }
}

// == URL Parsing ==
/// Extracts `(width, height)` from a `-<w>x<h>.` pattern preceding the extension.
///
/// Query strings and fragments are ignored. Returns None when the pattern is
/// absent or the numbers overflow.
pub fn dimensions_from_url(url: &str) -> Option<(u32, u32)> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let captures = SIZE_SUFFIX.captures(path)?;
    let width = captures.get(1)?.as_str().parse().ok()?;
    let height = captures.get(2)?.as_str().parse().ok()?;
    Some((width, height))
}

/// Accepts a count or dimension as a number, a numeric string, or null.
///
/// Anything else collapses to None instead of failing the whole payload.
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_from_url() {
        assert_eq!(
            dimensions_from_url("https://cdn.example.com/uploads/banner-800x600.jpg"),
            Some((800, 600))
        );
        assert_eq!(dimensions_from_url("banner-1x2.webp?ver=3"), Some((1, 2)));
    }

    #[test]
    fn test_dimensions_from_url_no_pattern() {
        assert_eq!(dimensions_from_url("https://cdn.example.com/banner.jpg"), None);
        assert_eq!(dimensions_from_url("banner-800x600"), None);
        assert_eq!(dimensions_from_url(""), None);
    }

    #[test]
    fn test_pattern_must_precede_extension() {
        assert_eq!(dimensions_from_url("/2024/10/photo-300x200-edited.png"), None);
        assert_eq!(
            dimensions_from_url("/300x200/photo-1024x768.png"),
            Some((1024, 768))
        );
    }

    #[test]
    fn test_area_from_url() {
        let variant = ImageVariant::new(".../banner-800x600.jpg");
        assert_eq!(variant.dimensions(), (800, 600));
        assert_eq!(variant.area(), 480_000);
    }

    #[test]
    fn test_area_unparsable_is_zero() {
        assert_eq!(ImageVariant::new(".../banner.jpg").area(), 0);
    }

    #[test]
    fn test_explicit_dimensions_win() {
        let variant = ImageVariant::with_dimensions("photo-10x10.jpg", 1200, 800);
        assert_eq!(variant.area(), 960_000);
    }

    #[test]
    fn test_partial_explicit_dimensions_fall_back_to_url() {
        let variant = ImageVariant {
            source_url: "photo-10x20.jpg".to_string(),
            width: Some(500),
            height: None,
        };
        assert_eq!(variant.dimensions(), (10, 20));
    }

    #[test]
    fn test_area_does_not_overflow() {
        let variant = ImageVariant::with_dimensions("huge.jpg", u32::MAX, u32::MAX);
        assert_eq!(variant.area(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_deserialize_string_dimensions() {
        let json = r#"{"sourceUrl": "a.jpg", "width": "300", "height": "200"}"#;
        let variant: ImageVariant = serde_json::from_str(json).unwrap();
        assert_eq!(variant.width, Some(300));
        assert_eq!(variant.height, Some(200));
    }

    #[test]
    fn test_deserialize_loose_dimensions() {
        let json = r#"{"sourceUrl": "a.jpg", "width": 300, "height": "wide"}"#;
        let variant: ImageVariant = serde_json::from_str(json).unwrap();
        assert_eq!(variant.width, Some(300));
        assert_eq!(variant.height, None);

        let json = r#"{"sourceUrl": "a.jpg", "width": null}"#;
        let variant: ImageVariant = serde_json::from_str(json).unwrap();
        assert!(variant.width.is_none());
        assert!(variant.height.is_none());
    }
}
