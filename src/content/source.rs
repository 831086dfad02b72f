//! The data-fetching boundary used by pages and commands

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::models::{
    AdjacentPosts, Category, Comment, CommentSubmission, Edge, Post, PostSummary,
};
use crate::error::Result;

/// Read (and one write) operations against the blog's content backend.
///
/// Each call is an independent round trip. Absence is reported as `None`
/// or an empty list, never as an error.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All posts, wrapped in pagination edges
    async fn list_posts(&self) -> Result<Vec<Edge<Post>>>;

    /// One post with its rich content, or `None` if no post has `slug`
    async fn get_post(&self, slug: &str) -> Result<Option<Post>>;

    /// The three most recent posts, oldest first
    async fn list_recent_posts(&self) -> Result<Vec<PostSummary>>;

    /// Up to three posts sharing a category with `categories`, other than `exclude_slug`
    async fn list_similar_posts(
        &self,
        categories: &[String],
        exclude_slug: &str,
    ) -> Result<Vec<PostSummary>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Posts filed under the category `slug`
    async fn list_category_posts(&self, slug: &str) -> Result<Vec<Edge<Post>>>;

    /// Forward a comment to the submission endpoint and return its JSON reply
    async fn submit_comment(&self, comment: &CommentSubmission) -> Result<serde_json::Value>;

    async fn list_comments(&self, slug: &str) -> Result<Vec<Comment>>;

    /// Chronological neighbours of the post `slug` created at `created_at`
    async fn get_adjacent_posts(
        &self,
        created_at: &DateTime<Utc>,
        slug: &str,
    ) -> Result<AdjacentPosts>;

    async fn list_featured_posts(&self) -> Result<Vec<PostSummary>>;
}
