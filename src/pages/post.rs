//! Post detail page

use crate::config::SiteConfig;
use crate::content::{AdjacentPosts, Category, Comment, ContentSource, Post, PostSummary};
use crate::error::Result;
use crate::views::{
    adjacent_nav, author_card, categories_widget, comment_form, comments_list, post_detail,
    post_widget, render_layout,
};

/// A post with everything shown around it
#[derive(Debug, Clone)]
pub struct PostPage {
    pub post: Post,
    pub adjacent: AdjacentPosts,
    pub similar: Vec<PostSummary>,
    pub comments: Vec<Comment>,
    pub categories: Vec<Category>,
}

impl PostPage {
    /// Fetch the post, then its neighbours, related posts, comments and
    /// the category list. `None` when no post has `slug`.
    pub async fn load(source: &dyn ContentSource, slug: &str) -> Result<Option<Self>> {
        let Some(post) = source.get_post(slug).await? else {
            return Ok(None);
        };

        let category_slugs = post.category_slugs();
        let (adjacent, similar, comments, categories) = tokio::try_join!(
            source.get_adjacent_posts(&post.created_at, &post.slug),
            source.list_similar_posts(&category_slugs, &post.slug),
            source.list_comments(&post.slug),
            source.list_categories(),
        )?;

        Ok(Some(Self {
            post,
            adjacent,
            similar,
            comments,
            categories,
        }))
    }

    pub fn render(&self, config: &SiteConfig) -> String {
        let mut main = post_detail(config, &self.post);
        if let Some(author) = &self.post.author {
            main.push_str(&author_card(author));
        }
        main.push_str(&adjacent_nav(config, &self.adjacent));
        main.push_str(&comment_form(config, &self.post.slug));
        main.push_str(&comments_list(config, &self.comments));

        let mut sidebar = post_widget(config, "Related Posts", &self.similar);
        sidebar.push_str(&categories_widget(config, &self.categories));

        render_layout(config, &self.post.title, &main, &sidebar)
    }
}
