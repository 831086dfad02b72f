//! In-memory `ContentSource` for tests that must not touch the network

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

use super::models::{
    AdjacentPosts, Author, Category, Comment, CommentSubmission, Edge, Image, Post, PostSummary,
    RichText,
};
use super::source::ContentSource;
use crate::error::{ContentError, Result};

/// Canned content. Queries filter these lists the way the CMS would.
#[derive(Default)]
pub struct StaticSource {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub comments: HashMap<String, Vec<Comment>>,
    /// When set, every call fails with `EmptyResponse`
    pub failing: bool,
    pub submitted: Mutex<Vec<CommentSubmission>>,
}

impl StaticSource {
    /// Three posts: `first` (react), `second` (react, webdev, featured) and `third` (webdev)
    pub fn sample() -> Self {
        let react = category("React", "react");
        let webdev = category("Web Development", "webdev");

        let mut first = post("first", "First Post", 1, vec![react.clone()]);
        first.content = Some(RichText {
            raw: json!({ "children": [
                { "type": "paragraph", "children": [{ "text": "Hello " }, { "text": "world", "bold": true }] }
            ] }),
        });
        let mut second = post("second", "Second Post", 2, vec![react.clone(), webdev.clone()]);
        second.featured_post = true;
        let third = post("third", "Third Post", 3, vec![webdev.clone()]);

        let mut comments = HashMap::new();
        comments.insert(
            "first".to_string(),
            vec![Comment {
                name: "Bob".to_string(),
                created_at: day(4),
                comment: "Nice <b>post</b>".to_string(),
            }],
        );

        Self {
            posts: vec![first, second, third],
            categories: vec![react, webdev],
            comments,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            Err(ContentError::EmptyResponse)
        } else {
            Ok(())
        }
    }

    fn sorted(&self) -> Vec<&Post> {
        let mut posts: Vec<_> = self.posts.iter().collect();
        posts.sort_by_key(|p| p.created_at);
        posts
    }
}

pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 9, d, 10, 0, 0).unwrap()
}

pub fn category(name: &str, slug: &str) -> Category {
    Category {
        id: Some(format!("cat-{slug}")),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub fn post(slug: &str, title: &str, d: u32, categories: Vec<Category>) -> Post {
    Post {
        id: format!("id-{slug}"),
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: Some(format!("About {title}")),
        created_at: day(d),
        featured_post: false,
        featured_image: Some(Image {
            url: format!("https://media.graphcms.com/{slug}.png"),
        }),
        author: Some(Author {
            id: Some("author-1".to_string()),
            name: "Ada".to_string(),
            bio: Some("Writes about the web".to_string()),
            photo: Some(Image {
                url: "https://media.graphcms.com/ada.png".to_string(),
            }),
        }),
        categories,
        content: None,
        extra: HashMap::new(),
    }
}

fn summarize(post: &Post) -> PostSummary {
    PostSummary {
        title: post.title.clone(),
        slug: post.slug.clone(),
        created_at: post.created_at,
        featured_image: post.featured_image.clone(),
        author: None,
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    async fn list_posts(&self) -> Result<Vec<Edge<Post>>> {
        self.check()?;
        Ok(self
            .posts
            .iter()
            .cloned()
            .map(|node| Edge { node })
            .collect())
    }

    async fn get_post(&self, slug: &str) -> Result<Option<Post>> {
        self.check()?;
        Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_recent_posts(&self) -> Result<Vec<PostSummary>> {
        self.check()?;
        let sorted = self.sorted();
        let skip = sorted.len().saturating_sub(3);
        Ok(sorted.into_iter().skip(skip).map(summarize).collect())
    }

    async fn list_similar_posts(
        &self,
        categories: &[String],
        exclude_slug: &str,
    ) -> Result<Vec<PostSummary>> {
        self.check()?;
        let similar: Vec<_> = self
            .posts
            .iter()
            .filter(|p| p.slug != exclude_slug)
            .filter(|p| p.categories.iter().any(|c| categories.contains(&c.slug)))
            .collect();
        let skip = similar.len().saturating_sub(3);
        Ok(similar.into_iter().skip(skip).map(summarize).collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn list_category_posts(&self, slug: &str) -> Result<Vec<Edge<Post>>> {
        self.check()?;
        Ok(self
            .posts
            .iter()
            .filter(|p| p.categories.iter().any(|c| c.slug == slug))
            .cloned()
            .map(|node| Edge { node })
            .collect())
    }

    async fn submit_comment(&self, comment: &CommentSubmission) -> Result<serde_json::Value> {
        self.check()?;
        self.submitted.lock().unwrap().push(comment.clone());
        Ok(json!({ "createComment": { "name": comment.name } }))
    }

    async fn list_comments(&self, slug: &str) -> Result<Vec<Comment>> {
        self.check()?;
        Ok(self.comments.get(slug).cloned().unwrap_or_default())
    }

    async fn get_adjacent_posts(
        &self,
        created_at: &DateTime<Utc>,
        slug: &str,
    ) -> Result<AdjacentPosts> {
        self.check()?;
        let sorted = self.sorted();
        let next = sorted
            .iter()
            .find(|p| p.slug != slug && p.created_at >= *created_at)
            .map(|p| summarize(p));
        let previous = sorted
            .iter()
            .rev()
            .find(|p| p.slug != slug && p.created_at <= *created_at)
            .map(|p| summarize(p));
        Ok(AdjacentPosts { next, previous })
    }

    async fn list_featured_posts(&self) -> Result<Vec<PostSummary>> {
        self.check()?;
        Ok(self
            .posts
            .iter()
            .filter(|p| p.featured_post)
            .map(|p| PostSummary {
                author: p.author.clone(),
                ..summarize(p)
            })
            .collect())
    }
}
