//! Image-Size Selector
//!
//! Picks the rendition with the largest pixel area.

use super::ImageVariant;

/// Returns the variant with the largest area, or None for an empty slice.
///
/// Ties keep the earliest variant in input order. Variants whose size cannot
/// be determined count as area 0, so a slice of only unparsable URLs yields
/// its first element.
pub fn select_largest(variants: &[ImageVariant]) -> Option<&ImageVariant> {
    let mut iter = variants.iter();
    let first = iter.next()?;

    let (largest, _) = iter.fold((first, first.area()), |(best, best_area), current| {
        let area = current.area();
        if area > best_area {
            (current, area)
        } else {
            (best, best_area)
        }
    });

    Some(largest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(select_largest(&[]).is_none());
    }

    #[test]
    fn test_single_variant() {
        let variants = vec![ImageVariant::new("a.jpg")];
        assert_eq!(select_largest(&variants), Some(&variants[0]));
    }

    #[test]
    fn test_picks_largest_area() {
        let variants = vec![
            ImageVariant::new("a-100x100.jpg"),
            ImageVariant::new("a-400x300.jpg"),
        ];
        assert_eq!(select_largest(&variants).unwrap().source_url, "a-400x300.jpg");
    }

    #[test]
    fn test_tie_keeps_first() {
        let variants = vec![
            ImageVariant::new("a-100x100.jpg"),
            ImageVariant::new("b-300x400.jpg"),
            ImageVariant::new("c-400x300.jpg"),
        ];
        assert_eq!(select_largest(&variants).unwrap().source_url, "b-300x400.jpg");
    }

    #[test]
    fn test_all_unparsable_returns_first() {
        let variants = vec![
            ImageVariant::new("one.jpg"),
            ImageVariant::new("two.jpg"),
        ];
        assert_eq!(select_largest(&variants).unwrap().source_url, "one.jpg");
    }

    #[test]
    fn test_mixed_explicit_and_url_dimensions() {
        let variants = vec![
            ImageVariant::new("thumb-150x150.jpg"),
            ImageVariant::with_dimensions("full.jpg", 2048, 1365),
            ImageVariant::new("large-1024x683.jpg"),
        ];
        assert_eq!(select_largest(&variants).unwrap().source_url, "full.jpg");
    }
}
