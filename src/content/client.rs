//! `ContentSource` backed by the CMS GraphQL API

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::graphql::GraphQLClient;
use super::models::{
    AdjacentPosts, Category, Comment, CommentSubmission, Connection, Edge, Post, PostSummary,
};
use super::queries::{self, WIDGET_LIMIT};
use super::source::ContentSource;
use crate::config::ContentConfig;
use crate::error::Result;

#[derive(Deserialize)]
struct PostsConnectionData {
    #[serde(rename = "postsConnection")]
    posts_connection: Connection<Post>,
}

#[derive(Deserialize)]
struct PostData {
    post: Option<Post>,
}

#[derive(Deserialize)]
struct PostsData {
    posts: Vec<PostSummary>,
}

#[derive(Deserialize)]
struct CategoriesData {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct CommentsData {
    comments: Vec<Comment>,
}

#[derive(Deserialize)]
struct AdjacentData {
    next: Vec<PostSummary>,
    previous: Vec<PostSummary>,
}

/// Keep the final `limit` items, matching the `last:` argument of the query
fn keep_last<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.drain(..items.len().saturating_sub(limit));
    items
}

/// Content client for a GraphCMS endpoint
#[derive(Debug, Clone)]
pub struct ContentClient {
    graphql: GraphQLClient,
    http: Client,
    comments_url: String,
}

impl ContentClient {
    /// Create a client from an explicit configuration. Nothing is validated
    /// here; an empty endpoint fails on the first request.
    pub fn new(config: &ContentConfig) -> Self {
        let http = Client::new();
        Self {
            graphql: GraphQLClient::new(http.clone(), config.endpoint.clone()),
            http,
            comments_url: config.comments_url.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.graphql.endpoint()
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn list_posts(&self) -> Result<Vec<Edge<Post>>> {
        let data: PostsConnectionData = self.graphql.request(&queries::POSTS, json!({})).await?;
        Ok(data.posts_connection.edges)
    }

    async fn get_post(&self, slug: &str) -> Result<Option<Post>> {
        let data: PostData = self
            .graphql
            .request(&queries::POST_DETAILS, json!({ "slug": slug }))
            .await?;
        Ok(data.post)
    }

    async fn list_recent_posts(&self) -> Result<Vec<PostSummary>> {
        let data: PostsData = self
            .graphql
            .request(&queries::RECENT_POSTS, json!({}))
            .await?;
        Ok(keep_last(data.posts, WIDGET_LIMIT))
    }

    async fn list_similar_posts(
        &self,
        categories: &[String],
        exclude_slug: &str,
    ) -> Result<Vec<PostSummary>> {
        let data: PostsData = self
            .graphql
            .request(
                &queries::SIMILAR_POSTS,
                json!({ "categories": categories, "slug": exclude_slug }),
            )
            .await?;
        Ok(keep_last(data.posts, WIDGET_LIMIT))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let data: CategoriesData = self
            .graphql
            .request(&queries::CATEGORIES, json!({}))
            .await?;
        Ok(data.categories)
    }

    async fn list_category_posts(&self, slug: &str) -> Result<Vec<Edge<Post>>> {
        let data: PostsConnectionData = self
            .graphql
            .request(&queries::CATEGORY_POSTS, json!({ "slug": slug }))
            .await?;
        Ok(data.posts_connection.edges)
    }

    async fn submit_comment(&self, comment: &CommentSubmission) -> Result<serde_json::Value> {
        tracing::debug!("Submitting comment for {} -> {}", comment.slug, self.comments_url);

        let response = self
            .http
            .post(&self.comments_url)
            .json(comment)
            .send()
            .await?;

        // The handler's status is not interpreted; its JSON is the answer
        tracing::debug!("Comment endpoint answered {}", response.status());
        Ok(response.json().await?)
    }

    async fn list_comments(&self, slug: &str) -> Result<Vec<Comment>> {
        let data: CommentsData = self
            .graphql
            .request(&queries::COMMENTS, json!({ "slug": slug }))
            .await?;
        Ok(data.comments)
    }

    async fn get_adjacent_posts(
        &self,
        created_at: &DateTime<Utc>,
        slug: &str,
    ) -> Result<AdjacentPosts> {
        let data: AdjacentData = self
            .graphql
            .request(
                &queries::ADJACENT_POSTS,
                json!({ "slug": slug, "createdAt": created_at }),
            )
            .await?;
        Ok(AdjacentPosts {
            next: data.next.into_iter().next(),
            previous: data.previous.into_iter().next(),
        })
    }

    async fn list_featured_posts(&self) -> Result<Vec<PostSummary>> {
        let data: PostsData = self
            .graphql
            .request(&queries::FEATURED_POSTS, json!({}))
            .await?;
        Ok(data.posts)
    }
}
