//! Home page: post list, featured strip and sidebar

use crate::config::SiteConfig;
use crate::content::{Category, ContentSource, Edge, Post, PostSummary};
use crate::error::Result;
use crate::views::{categories_widget, featured_posts, post_card, post_widget, render_layout};

/// Everything the home page shows
#[derive(Debug, Clone)]
pub struct HomePage {
    pub posts: Vec<Post>,
    pub featured: Vec<PostSummary>,
    pub categories: Vec<Category>,
    pub recent: Vec<PostSummary>,
}

impl HomePage {
    /// Fetch the four independent lists concurrently
    pub async fn load(source: &dyn ContentSource) -> Result<Self> {
        let (edges, featured, categories, recent) = tokio::try_join!(
            source.list_posts(),
            source.list_featured_posts(),
            source.list_categories(),
            source.list_recent_posts(),
        )?;

        Ok(Self {
            posts: edges.into_iter().map(Edge::into_node).collect(),
            featured,
            categories,
            recent,
        })
    }

    pub fn render(&self, config: &SiteConfig) -> String {
        let mut main = featured_posts(config, &self.featured);
        for post in &self.posts {
            main.push_str(&post_card(config, post));
        }

        let mut sidebar = post_widget(config, "Recent Posts", &self.recent);
        sidebar.push_str(&categories_widget(config, &self.categories));

        render_layout(config, "", &main, &sidebar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::StaticSource;
    use crate::error::ContentError;

    #[tokio::test]
    async fn test_load_home() {
        let source = StaticSource::sample();
        let page = HomePage::load(&source).await.unwrap();

        assert_eq!(page.posts.len(), 3);
        assert_eq!(page.featured.len(), 1);
        assert_eq!(page.featured[0].slug, "second");
        assert_eq!(page.categories.len(), 2);
        assert_eq!(page.recent.len(), 3);
    }

    #[tokio::test]
    async fn test_render_home() {
        let source = StaticSource::sample();
        let page = HomePage::load(&source).await.unwrap();
        let html = page.render(&SiteConfig::default());

        assert!(html.contains("featured-posts"));
        assert!(html.contains(r#"<a href="/post/third">Third Post</a>"#));
        assert!(html.contains("Recent Posts"));
        assert!(html.contains(r#"<a href="/category/webdev">Web Development</a>"#));
    }

    #[tokio::test]
    async fn test_load_home_propagates_errors() {
        let source = StaticSource::failing();
        let err = HomePage::load(&source).await.unwrap_err();
        assert!(matches!(err, ContentError::EmptyResponse));
    }
}
