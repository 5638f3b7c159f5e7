//! Post View Models
//!
//! Shapes posts for the listing cards and the detail page.

use serde::Serialize;

use crate::content::{CategoryRef, Post};
use crate::media::select_largest;
use crate::views::format_display_date;

/// Excerpt shown on a card when the post has none.
pub const DEFAULT_CARD_EXCERPT: &str = "Read about this exciting blog.";
/// Content shown on the detail page when the post has none.
pub const DEFAULT_CONTENT: &str = "No Content";
/// Excerpt shown on the detail page when a featured image exists but no excerpt.
pub const DEFAULT_DETAIL_EXCERPT: &str = "No excerpt";
/// Alt text used with the fallback image.
pub const DEFAULT_IMAGE_ALT: &str = "Blog post image";

// == Post Card ==
/// One entry of the posts listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub date: String,
    pub image_url: String,
    pub image_alt: String,
    /// First category, shown as a badge
    pub category: Option<CategoryRef>,
}

impl PostCard {
    /// Builds a card. Cards use the first size rendition, not the largest.
    pub fn from_post(post: &Post, fallback_image_url: &str) -> Self {
        let image = post.featured_image.as_ref();
        let image_url = image
            .and_then(|img| img.sizes.first())
            .map(|variant| variant.source_url.as_str())
            .filter(|url| !url.is_empty())
            .unwrap_or(fallback_image_url);
        let image_alt = image
            .and_then(|img| img.alt_text.as_deref())
            .unwrap_or(DEFAULT_IMAGE_ALT);

        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post
                .excerpt
                .clone()
                .unwrap_or_else(|| DEFAULT_CARD_EXCERPT.to_string()),
            date: format_display_date(&post.date),
            image_url: image_url.to_string(),
            image_alt: image_alt.to_string(),
            category: post.categories.first().cloned(),
        }
    }
}

/// Builds cards for a whole listing, preserving order.
pub fn post_cards(posts: &[Post], fallback_image_url: &str) -> Vec<PostCard> {
    posts
        .iter()
        .map(|post| PostCard::from_post(post, fallback_image_url))
        .collect()
}

// == Post Detail ==
/// The single post page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub image_alt: String,
    /// Formatted modification date, or the publication date if never modified
    pub modified: String,
    pub categories: Vec<CategoryRef>,
    pub comment_count: u32,
}

impl PostDetail {
    /// Builds the detail view, displaying the largest image rendition.
    pub fn from_post(post: &Post, fallback_image_url: &str) -> Self {
        let (excerpt, image_url, image_alt) = match &post.featured_image {
            None => (
                post.excerpt.clone().unwrap_or_default(),
                fallback_image_url.to_string(),
                DEFAULT_IMAGE_ALT.to_string(),
            ),
            Some(image) => {
                let url = select_largest(&image.sizes)
                    .map(|variant| variant.source_url.as_str())
                    .filter(|url| !url.is_empty())
                    .unwrap_or(fallback_image_url);
                (
                    post.excerpt
                        .clone()
                        .unwrap_or_else(|| DEFAULT_DETAIL_EXCERPT.to_string()),
                    url.to_string(),
                    image
                        .alt_text
                        .clone()
                        .unwrap_or_else(|| DEFAULT_IMAGE_ALT.to_string()),
                )
            }
        };

        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            content: post
                .content
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
            excerpt,
            image_url,
            image_alt,
            modified: format_display_date(post.modified.as_deref().unwrap_or(&post.date)),
            categories: post.categories.clone(),
            comment_count: post.comment_count.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FeaturedImage;
    use crate::media::ImageVariant;

    const FALLBACK: &str = "https://cdn.example.com/default-banner.png";

    fn bare_post() -> Post {
        Post {
            id: Some("cG9zdDo0Mg==".to_string()),
            title: "Breathing Basics".to_string(),
            slug: "breathing-basics".to_string(),
            date: "2024-10-22T05:33:19".to_string(),
            modified: None,
            excerpt: None,
            content: None,
            featured_image: None,
            categories: Vec::new(),
            comment_count: None,
        }
    }

    fn with_image(sizes: Vec<ImageVariant>) -> Post {
        Post {
            featured_image: Some(FeaturedImage {
                alt_text: Some("Calm lake".to_string()),
                file: None,
                sizes,
            }),
            ..bare_post()
        }
    }

    #[test]
    fn test_card_defaults() {
        let card = PostCard::from_post(&bare_post(), FALLBACK);

        assert_eq!(card.excerpt, DEFAULT_CARD_EXCERPT);
        assert_eq!(card.image_url, FALLBACK);
        assert_eq!(card.image_alt, DEFAULT_IMAGE_ALT);
        assert_eq!(card.date, "22 Oct 2024");
        assert!(card.category.is_none());
    }

    #[test]
    fn test_card_uses_first_size() {
        let mut post = with_image(vec![
            ImageVariant::new("https://cdn.example.com/lake-150x150.jpg"),
            ImageVariant::new("https://cdn.example.com/lake-1024x683.jpg"),
        ]);
        post.categories = vec![
            CategoryRef {
                name: "Wellness".to_string(),
                slug: "wellness".to_string(),
            },
            CategoryRef {
                name: "Sleep".to_string(),
                slug: "sleep".to_string(),
            },
        ];

        let card = PostCard::from_post(&post, FALLBACK);
        assert_eq!(card.image_url, "https://cdn.example.com/lake-150x150.jpg");
        assert_eq!(card.image_alt, "Calm lake");
        assert_eq!(card.category.unwrap().name, "Wellness");
    }

    #[test]
    fn test_detail_without_image() {
        let detail = PostDetail::from_post(&bare_post(), FALLBACK);

        assert_eq!(detail.content, DEFAULT_CONTENT);
        assert_eq!(detail.excerpt, "");
        assert_eq!(detail.image_url, FALLBACK);
        assert_eq!(detail.modified, "22 Oct 2024");
        assert_eq!(detail.comment_count, 0);
    }

    #[test]
    fn test_detail_picks_largest_image() {
        let mut post = with_image(vec![
            ImageVariant::new("https://cdn.example.com/lake-150x150.jpg"),
            ImageVariant::new("https://cdn.example.com/lake-1024x683.jpg"),
            ImageVariant::new("https://cdn.example.com/lake-768x512.jpg"),
        ]);
        post.modified = Some("2024-11-02T08:00:00".to_string());
        post.comment_count = Some(7);

        let detail = PostDetail::from_post(&post, FALLBACK);
        assert_eq!(detail.image_url, "https://cdn.example.com/lake-1024x683.jpg");
        assert_eq!(detail.image_alt, "Calm lake");
        assert_eq!(detail.excerpt, DEFAULT_DETAIL_EXCERPT);
        assert_eq!(detail.modified, "02 Nov 2024");
        assert_eq!(detail.comment_count, 7);
    }

    #[test]
    fn test_detail_image_without_sizes_uses_fallback() {
        let detail = PostDetail::from_post(&with_image(Vec::new()), FALLBACK);
        assert_eq!(detail.image_url, FALLBACK);
    }

    #[test]
    fn test_detail_empty_url_uses_fallback() {
        let detail = PostDetail::from_post(&with_image(vec![ImageVariant::new("")]), FALLBACK);
        assert_eq!(detail.image_url, FALLBACK);
    }

    #[test]
    fn test_post_cards_preserve_order() {
        let mut second = bare_post();
        second.slug = "second".to_string();
        let cards = post_cards(&[bare_post(), second], FALLBACK);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].slug, "second");
    }
}
