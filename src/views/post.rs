//! Post card, post detail and author views

use crate::config::SiteConfig;
use crate::content::{Author, Post};
use crate::helpers::{html_escape, image_tag, link_to, post_url, time_tag, truncate};

use super::rich_text::render_rich_text;

/// Maximum excerpt length on a card
const EXCERPT_LENGTH: usize = 200;

/// A post in the home or category listing
pub fn post_card(config: &SiteConfig, post: &Post) -> String {
    let url = post_url(config, &post.slug);
    let mut html = String::from(r#"<article class="post-card">"#);

    if let Some(image) = &post.featured_image {
        html.push_str(&image_tag(&image.url, &post.title, Some("post-card-image")));
    }

    html.push_str(&format!(
        r#"<h2 class="post-card-title">{}</h2>"#,
        link_to(&url, &post.title)
    ));

    html.push_str(r#"<div class="post-meta">"#);
    if let Some(author) = &post.author {
        html.push_str(&author_badge(author));
    }
    html.push_str(&time_tag(&post.created_at, &config.date_format));
    html.push_str("</div>");

    if let Some(excerpt) = &post.excerpt {
        html.push_str(&format!(
            r#"<p class="post-card-excerpt">{}</p>"#,
            html_escape(&truncate(excerpt, EXCERPT_LENGTH, None))
        ));
    }

    html.push_str(&format!(
        r#"<a class="post-card-more" href="{}">Continue Reading</a>"#,
        html_escape(&url)
    ));
    html.push_str("</article>");
    html
}

/// The full post with rendered rich content
pub fn post_detail(config: &SiteConfig, post: &Post) -> String {
    let mut html = String::from(r#"<article class="post-detail">"#);

    if let Some(image) = &post.featured_image {
        html.push_str(&image_tag(&image.url, &post.title, Some("post-detail-image")));
    }

    html.push_str(r#"<div class="post-meta">"#);
    if let Some(author) = &post.author {
        html.push_str(&author_badge(author));
    }
    html.push_str(&time_tag(&post.created_at, &config.date_format));
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<h1 class="post-detail-title">{}</h1>"#,
        html_escape(&post.title)
    ));

    if let Some(content) = &post.content {
        html.push_str(r#"<div class="post-content">"#);
        html.push_str(&render_rich_text(&content.raw));
        html.push_str("</div>");
    }

    html.push_str("</article>");
    html
}

/// Author box shown under a post
pub fn author_card(author: &Author) -> String {
    let mut html = String::from(r#"<section class="author-card">"#);

    if let Some(photo) = &author.photo {
        html.push_str(&image_tag(&photo.url, &author.name, Some("author-photo")));
    }
    html.push_str(&format!(
        r#"<h3 class="author-name">{}</h3>"#,
        html_escape(&author.name)
    ));
    if let Some(bio) = &author.bio {
        html.push_str(&format!(r#"<p class="author-bio">{}</p>"#, html_escape(bio)));
    }

    html.push_str("</section>");
    html
}

fn author_badge(author: &Author) -> String {
    let mut html = String::from(r#"<span class="post-author">"#);
    if let Some(photo) = &author.photo {
        html.push_str(&image_tag(&photo.url, &author.name, Some("post-author-photo")));
    }
    html.push_str(&html_escape(&author.name));
    html.push_str("</span>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::StaticSource;

    #[test]
    fn test_post_card() {
        let source = StaticSource::sample();
        let html = post_card(&SiteConfig::default(), &source.posts[0]);
        assert!(html.contains(r#"<a href="/post/first">First Post</a>"#));
        assert!(html.contains("Ada"));
        assert!(html.contains("Sep 01, 2021"));
        assert!(html.contains("About First Post"));
        assert!(html.contains("Continue Reading"));
    }

    #[test]
    fn test_post_detail_renders_content() {
        let source = StaticSource::sample();
        let html = post_detail(&SiteConfig::default(), &source.posts[0]);
        assert!(html.contains(r#"<h1 class="post-detail-title">First Post</h1>"#));
        assert!(html.contains("<p>Hello <b>world</b></p>"));
    }

    #[test]
    fn test_post_detail_without_content() {
        let source = StaticSource::sample();
        let html = post_detail(&SiteConfig::default(), &source.posts[2]);
        assert!(!html.contains("post-content"));
    }

    #[test]
    fn test_author_card() {
        let source = StaticSource::sample();
        let author = source.posts[0].author.as_ref().unwrap();
        let html = author_card(author);
        assert!(html.contains(r#"<h3 class="author-name">Ada</h3>"#));
        assert!(html.contains("Writes about the web"));
    }
}
