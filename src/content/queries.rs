//! GraphQL Queries
//!
//! Query documents sent to the content backend.

/// Posts listing, newest first, one cursor page at a time.
pub const POSTS_QUERY: &str = r#"
query getAllPosts($first: Int!, $after: String) {
  posts(first: $first, after: $after, where: { orderby: { field: DATE, order: DESC } }) {
    nodes {
      date
      excerpt(format: RENDERED)
      slug
      title
      featuredImage {
        node {
          mediaDetails {
            file
            sizes {
              sourceUrl
              width
              height
            }
          }
          altText
        }
      }
      categories {
        nodes {
          name
          slug
        }
      }
      commentCount
    }
    pageInfo {
      endCursor
      hasNextPage
      hasPreviousPage
      startCursor
    }
  }
}
"#;

/// Single post looked up by slug.
pub const POST_BY_SLUG_QUERY: &str = r#"
query getSinglePost($id: ID!) {
  post(id: $id, idType: SLUG) {
    id
    content(format: RENDERED)
    date
    excerpt(format: RENDERED)
    modified
    slug
    title(format: RENDERED)
    featuredImage {
      node {
        mediaDetails {
          sizes {
            sourceUrl
            width
            height
          }
        }
        altText
      }
    }
    categories {
      nodes {
        name
        slug
      }
    }
    commentCount
  }
}
"#;

/// Category listing.
pub const CATEGORIES_QUERY: &str = r#"
query getAllCategories($first: Int!) {
  categories(first: $first) {
    nodes {
      count
      description
      id
      name
      slug
    }
  }
}
"#;
