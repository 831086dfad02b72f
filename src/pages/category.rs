//! Category listing page

use crate::config::SiteConfig;
use crate::content::{Category, ContentSource, Edge, Post};
use crate::error::Result;
use crate::views::{categories_widget, post_card, render_layout};

/// Posts filed under one category
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub slug: String,
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
}

impl CategoryPage {
    pub async fn load(source: &dyn ContentSource, slug: &str) -> Result<Self> {
        let (edges, categories) = tokio::try_join!(
            source.list_category_posts(slug),
            source.list_categories(),
        )?;

        Ok(Self {
            slug: slug.to_string(),
            posts: edges.into_iter().map(Edge::into_node).collect(),
            categories,
        })
    }

    /// Display name of the category, falling back to its slug
    pub fn name(&self) -> &str {
        self.categories
            .iter()
            .find(|c| c.slug == self.slug)
            .map(|c| c.name.as_str())
            .unwrap_or(&self.slug)
    }

    pub fn render(&self, config: &SiteConfig) -> String {
        let mut main = String::new();
        if self.posts.is_empty() {
            main.push_str(r#"<p class="empty">No posts in this category yet.</p>"#);
        }
        for post in &self.posts {
            main.push_str(&post_card(config, post));
        }

        let sidebar = categories_widget(config, &self.categories);
        render_layout(config, self.name(), &main, &sidebar)
    }
}
