//! Content Models
//!
//! Strongly typed posts, categories and pagination info, validated from the
//! backend's loosely shaped GraphQL responses at one boundary.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::media::{lenient_u32, ImageVariant};

// == Domain Types ==

/// A blog post as delivered by the content backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Backend identifier (only requested for single-post lookups)
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    /// Publication date as reported by the backend
    pub date: String,
    /// Last modification date
    pub modified: Option<String>,
    /// Rendered excerpt markup
    pub excerpt: Option<String>,
    /// Rendered content markup
    pub content: Option<String>,
    pub featured_image: Option<FeaturedImage>,
    pub categories: Vec<CategoryRef>,
    pub comment_count: Option<u32>,
}

/// Featured image with all of its size renditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedImage {
    pub alt_text: Option<String>,
    /// Original media file path
    pub file: Option<String>,
    pub sizes: Vec<ImageVariant>,
}

/// Category reference attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
}

/// A category from the categories listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Number of posts in the category
    pub count: Option<u32>,
}

/// Cursor pagination info for connection queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub start_cursor: Option<String>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// One page of posts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostList {
    pub posts: Vec<Post>,
    pub page_info: PageInfo,
}

// == Content Payload ==
/// Typed result of one backend query, as stored in the content cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ContentPayload {
    Posts(PostList),
    Post(Post),
    Categories(Vec<Category>),
    PostSlugs(Vec<String>),
}

impl ContentPayload {
    /// Short name of the payload variant, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentPayload::Posts(_) => "posts",
            ContentPayload::Post(_) => "post",
            ContentPayload::Categories(_) => "categories",
            ContentPayload::PostSlugs(_) => "post_slugs",
        }
    }
}

// == Wire Types ==
// Raw GraphQL shapes. Every field is optional here; conversion decides what
// is required and what gets a default.

#[derive(Debug, Deserialize)]
pub(crate) struct PostsData {
    pub posts: Option<PostConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SinglePostData {
    pub post: Option<PostNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesData {
    pub categories: Option<Connection<CategoryNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostConnection {
    #[serde(default)]
    pub nodes: Vec<PostNode>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostNode {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub modified: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<FeaturedImageEdge>,
    pub categories: Option<Connection<CategoryRef>>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub comment_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeaturedImageEdge {
    pub node: Option<MediaItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MediaItem {
    pub alt_text: Option<String>,
    pub media_details: Option<MediaDetails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaDetails {
    pub file: Option<String>,
    pub sizes: Option<Vec<ImageVariant>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryNode {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub count: Option<u32>,
}

// == Conversions ==

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl PostNode {
    /// Validates a raw node. Returns None when the node has no slug.
    pub(crate) fn into_post(self) -> Option<Post> {
        let slug = non_empty(self.slug)?;

        let featured_image = self
            .featured_image
            .and_then(|edge| edge.node)
            .map(|media| {
                let (file, sizes) = match media.media_details {
                    Some(details) => (details.file, details.sizes.unwrap_or_default()),
                    None => (None, Vec::new()),
                };
                FeaturedImage {
                    alt_text: non_empty(media.alt_text),
                    file,
                    sizes,
                }
            });

        Some(Post {
            id: self.id,
            title: self.title.unwrap_or_default(),
            slug,
            date: self.date.unwrap_or_default(),
            modified: non_empty(self.modified),
            excerpt: non_empty(self.excerpt),
            content: non_empty(self.content),
            featured_image,
            categories: self.categories.map(|c| c.nodes).unwrap_or_default(),
            comment_count: self.comment_count,
        })
    }
}

impl PostConnection {
    /// Converts the connection, dropping nodes that fail validation.
    pub(crate) fn into_post_list(self) -> PostList {
        let posts = self
            .nodes
            .into_iter()
            .filter_map(|node| {
                let post = node.into_post();
                if post.is_none() {
                    warn!("Dropping post without a slug from listing");
                }
                post
            })
            .collect();

        PostList {
            posts,
            page_info: self.page_info.unwrap_or_default(),
        }
    }
}

impl CategoryNode {
    /// Validates a raw category. Returns None when name or slug is missing.
    pub(crate) fn into_category(self) -> Option<Category> {
        let name = non_empty(self.name)?;
        let slug = non_empty(self.slug)?;
        Some(Category {
            id: self.id.unwrap_or_else(|| slug.clone()),
            name,
            slug,
            description: non_empty(self.description),
            count: self.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS_JSON: &str = r#"{
        "posts": {
            "nodes": [
                {
                    "date": "2024-10-22T05:33:19",
                    "excerpt": "<p>Short intro</p>",
                    "slug": "mindful-mornings",
                    "title": "Mindful Mornings",
                    "featuredImage": {
                        "node": {
                            "mediaDetails": {
                                "file": "2024/10/sunrise.jpg",
                                "sizes": [
                                    {"sourceUrl": "https://cms.example.com/sunrise-150x150.jpg", "width": "150", "height": "150"},
                                    {"sourceUrl": "https://cms.example.com/sunrise-1024x683.jpg", "width": "1024", "height": "683"}
                                ]
                            },
                            "altText": "Sunrise over hills"
                        }
                    },
                    "categories": {"nodes": [{"name": "Wellness", "slug": "wellness"}]},
                    "commentCount": null
                },
                {"title": "Broken", "slug": null}
            ],
            "pageInfo": {
                "endCursor": "YXJyYXljb25uZWN0aW9uOjE=",
                "hasNextPage": true,
                "hasPreviousPage": false,
                "startCursor": "YXJyYXljb25uZWN0aW9uOjA="
            }
        }
    }"#;

    #[test]
    fn test_posts_conversion() {
        let data: PostsData = serde_json::from_str(POSTS_JSON).unwrap();
        let list = data.posts.unwrap().into_post_list();

        assert_eq!(list.posts.len(), 1);
        assert!(list.page_info.has_next_page);
        assert_eq!(
            list.page_info.end_cursor.as_deref(),
            Some("YXJyYXljb25uZWN0aW9uOjE=")
        );

        let post = &list.posts[0];
        assert_eq!(post.slug, "mindful-mornings");
        assert_eq!(post.categories[0].name, "Wellness");
        assert!(post.comment_count.is_none());

        let image = post.featured_image.as_ref().unwrap();
        assert_eq!(image.alt_text.as_deref(), Some("Sunrise over hills"));
        assert_eq!(image.file.as_deref(), Some("2024/10/sunrise.jpg"));
        assert_eq!(image.sizes.len(), 2);
        assert_eq!(image.sizes[1].width, Some(1024));
    }

    #[test]
    fn test_single_post_without_image() {
        let json = r#"{"post": {
            "id": "cG9zdDox",
            "title": "Plain",
            "slug": "plain",
            "date": "2024-01-01T00:00:00",
            "modified": "",
            "content": null,
            "featuredImage": null,
            "categories": null,
            "commentCount": 3
        }}"#;
        let data: SinglePostData = serde_json::from_str(json).unwrap();
        let post = data.post.unwrap().into_post().unwrap();

        assert_eq!(post.id.as_deref(), Some("cG9zdDox"));
        assert!(post.modified.is_none());
        assert!(post.content.is_none());
        assert!(post.featured_image.is_none());
        assert!(post.categories.is_empty());
        assert_eq!(post.comment_count, Some(3));
    }

    #[test]
    fn test_null_post() {
        let data: SinglePostData = serde_json::from_str(r#"{"post": null}"#).unwrap();
        assert!(data.post.is_none());
    }

    #[test]
    fn test_featured_image_without_details() {
        let node = PostNode {
            slug: Some("s".to_string()),
            featured_image: Some(FeaturedImageEdge {
                node: Some(MediaItem {
                    alt_text: Some("  ".to_string()),
                    media_details: None,
                }),
            }),
            ..PostNode::default()
        };
        let image = node.into_post().unwrap().featured_image.unwrap();
        assert!(image.alt_text.is_none());
        assert!(image.sizes.is_empty());
    }

    #[test]
    fn test_category_conversion() {
        let json = r#"{"categories": {"nodes": [
            {"id": "dGVybTox", "name": "Wellness", "slug": "wellness", "description": null, "count": 4},
            {"id": "dGVybToy", "name": null, "slug": "ghost", "count": null}
        ]}}"#;
        let data: CategoriesData = serde_json::from_str(json).unwrap();
        let categories: Vec<Category> = data
            .categories
            .unwrap()
            .nodes
            .into_iter()
            .filter_map(CategoryNode::into_category)
            .collect();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].count, Some(4));
    }

    #[test]
    fn test_string_counts_are_accepted() {
        let json = r#"{"post": {"slug": "chatty", "commentCount": "3"}}"#;
        let data: SinglePostData = serde_json::from_str(json).unwrap();
        let post = data.post.unwrap().into_post().unwrap();
        assert_eq!(post.comment_count, Some(3));

        let json = r#"{"categories": {"nodes": [
            {"name": "Wellness", "slug": "wellness", "count": "4"},
            {"name": "Travel", "slug": "travel", "count": "lots"}
        ]}}"#;
        let data: CategoriesData = serde_json::from_str(json).unwrap();
        let categories: Vec<Category> = data
            .categories
            .unwrap()
            .nodes
            .into_iter()
            .filter_map(CategoryNode::into_category)
            .collect();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].count, Some(4));
        assert!(categories[1].count.is_none());
    }

    #[test]
    fn test_payload_kind() {
        assert_eq!(ContentPayload::PostSlugs(vec![]).kind(), "post_slugs");
        assert_eq!(ContentPayload::Categories(vec![]).kind(), "categories");
    }
}
