//! GraphQL Content Client
//!
//! `ContentSource` implementation that talks to a headless CMS over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::content::models::{CategoriesData, CategoryNode, PostsData, SinglePostData};
use crate::content::queries::{CATEGORIES_QUERY, POSTS_QUERY, POST_BY_SLUG_QUERY};
use crate::content::{Category, ContentSource, Post, PostList};
use crate::error::{BlogError, Result};

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

// == GraphQL Client ==
/// HTTP client for the content backend's GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
}

impl GraphQlClient {
    /// Creates a client for `endpoint` with the given request timeout.
    ///
    /// # Errors
    /// Returns `BlogError::Internal` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| BlogError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Returns the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // == Execute ==
    /// Runs one query and decodes its `data` member.
    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let request = GraphQlRequest { query, variables };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Content backend request failed");
                if e.is_timeout() {
                    BlogError::ContentFetch("request timed out".to_string())
                } else {
                    BlogError::ContentFetch(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "Content backend returned an error status");
            return Err(BlogError::ContentFetch(format!("backend responded with {status}")));
        }

        let body: GraphQlResponse<T> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to decode content backend response");
            BlogError::ContentFetch(format!("malformed response: {e}"))
        })?;

        if !body.errors.is_empty() {
            let messages: Vec<&str> = body.errors.iter().map(|e| e.message.as_str()).collect();
            warn!(errors = ?messages, "Content backend reported query errors");
            return Err(BlogError::ContentFetch(messages.join("; ")));
        }

        body.data
            .ok_or_else(|| BlogError::ContentFetch("response contained no data".to_string()))
    }
}

#[async_trait]
impl ContentSource for GraphQlClient {
    async fn list_posts(&self, first: u32, after: Option<&str>) -> Result<PostList> {
        debug!(first, after, "Querying posts");

        let data: PostsData = self
            .execute(POSTS_QUERY, json!({ "first": first, "after": after }))
            .await?;

        let connection = data
            .posts
            .ok_or_else(|| BlogError::ContentFetch("posts missing from response".to_string()))?;

        Ok(connection.into_post_list())
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        debug!(slug, "Querying post by slug");

        let data: SinglePostData = self
            .execute(POST_BY_SLUG_QUERY, json!({ "id": slug }))
            .await?;

        match data.post {
            None => Ok(None),
            Some(node) => node
                .into_post()
                .map(Some)
                .ok_or_else(|| BlogError::ContentFetch(format!("post '{slug}' has no slug"))),
        }
    }

    async fn list_categories(&self, first: u32) -> Result<Vec<Category>> {
        debug!(first, "Querying categories");

        let data: CategoriesData = self
            .execute(CATEGORIES_QUERY, json!({ "first": first }))
            .await?;

        let connection = data.categories.ok_or_else(|| {
            BlogError::ContentFetch("categories missing from response".to_string())
        })?;

        Ok(connection
            .nodes
            .into_iter()
            .filter_map(CategoryNode::into_category)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GraphQlRequest {
            query: POST_BY_SLUG_QUERY,
            variables: json!({ "id": "hello-world" }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["variables"]["id"], "hello-world");
        assert!(value["query"].as_str().unwrap().contains("idType: SLUG"));
    }

    #[test]
    fn test_response_envelope_with_errors() {
        let json = r#"{"data": null, "errors": [{"message": "Internal server error"}]}"#;
        let body: GraphQlResponse<SinglePostData> = serde_json::from_str(json).unwrap();
        assert!(body.data.is_none());
        assert_eq!(body.errors[0].message, "Internal server error");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_fetch_error() {
        let client = GraphQlClient::new("http://127.0.0.1:9/graphql", 2).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/graphql");
        let result = client.list_categories(10).await;
        assert!(matches!(result, Err(BlogError::ContentFetch(_))));
    }
}
