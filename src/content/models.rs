//! Post, author, category and comment models
//!
//! These are read-only projections of the CMS schema. Wire names are
//! camelCase; nothing here is validated or derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A hosted image asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

/// A post author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Image>,
}

/// A category facet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Not selected by the category list query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub slug: String,
}

/// Structured rich text, kept as the raw AST the CMS returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    pub raw: serde_json::Value,
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,

    pub title: String,

    pub slug: String,

    #[serde(default)]
    pub excerpt: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Whether the post is promoted
    #[serde(default)]
    pub featured_post: bool,

    #[serde(default)]
    pub featured_image: Option<Image>,

    #[serde(default)]
    pub author: Option<Author>,

    #[serde(default)]
    pub categories: Vec<Category>,

    /// Only present on the detail query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<RichText>,

    /// Fields the models do not name
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Post {
    /// Category slugs, in the order the CMS returned them
    pub fn category_slugs(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.slug.clone()).collect()
    }
}

/// Reduced post projection used by the widget queries
/// (recent, similar, adjacent and featured)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub title: String,

    pub slug: String,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub featured_image: Option<Image>,

    /// Only selected by the featured query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

/// A reader comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub comment: String,
}

/// Payload sent to the comment submission endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSubmission {
    pub name: String,
    pub email: String,
    pub comment: String,
    /// Slug of the post being commented on
    pub slug: String,
}

/// A pagination edge wrapping one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Edge<T> {
    pub fn into_node(self) -> T {
        self.node
    }
}

/// An `edges` container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

/// Chronological neighbours of a post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacentPosts {
    pub next: Option<PostSummary>,
    pub previous: Option<PostSummary>,
}
