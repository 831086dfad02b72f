//! Sidebar and post-footer widgets

use crate::config::SiteConfig;
use crate::content::{AdjacentPosts, Category, Comment, PostSummary};
use crate::helpers::{
    category_url, encode_segment, format_date, html_escape, image_tag, link_to, post_url,
    url_for,
};

/// "Recent Posts" / "Related Posts" widget
pub fn post_widget(config: &SiteConfig, title: &str, posts: &[PostSummary]) -> String {
    let mut html = format!(
        r#"<section class="widget post-widget"><h3 class="widget-title">{}</h3>"#,
        html_escape(title)
    );

    for post in posts {
        html.push_str(r#"<div class="post-widget-item">"#);
        if let Some(image) = &post.featured_image {
            html.push_str(&image_tag(&image.url, &post.title, Some("post-widget-image")));
        }
        html.push_str(&format!(
            r#"<p class="post-widget-date">{}</p>"#,
            format_date(&post.created_at, &config.date_format)
        ));
        html.push_str(&link_to(&post_url(config, &post.slug), &post.title));
        html.push_str("</div>");
    }

    html.push_str("</section>");
    html
}

/// All categories as links
pub fn categories_widget(config: &SiteConfig, categories: &[Category]) -> String {
    let mut html =
        String::from(r#"<section class="widget categories"><h3 class="widget-title">Categories</h3>"#);

    for category in categories {
        html.push_str(&format!(
            r#"<span class="category-link">{}</span>"#,
            link_to(&category_url(config, &category.slug), &category.name)
        ));
    }

    html.push_str("</section>");
    html
}

/// Previous / next navigation; a missing side renders nothing
pub fn adjacent_nav(config: &SiteConfig, adjacent: &AdjacentPosts) -> String {
    if adjacent.previous.is_none() && adjacent.next.is_none() {
        return String::new();
    }

    let mut html = String::from(r#"<nav class="adjacent-posts">"#);

    if let Some(previous) = &adjacent.previous {
        html.push_str(&adjacent_item(config, "previous", "Previous Post", previous));
    }
    if let Some(next) = &adjacent.next {
        html.push_str(&adjacent_item(config, "next", "Next Post", next));
    }

    html.push_str("</nav>");
    html
}

fn adjacent_item(config: &SiteConfig, class: &str, label: &str, post: &PostSummary) -> String {
    format!(
        r#"<a class="adjacent-{}" href="{}"><span class="adjacent-label">{}</span><span class="adjacent-title">{}</span><span class="adjacent-date">{}</span></a>"#,
        class,
        html_escape(&post_url(config, &post.slug)),
        label,
        html_escape(&post.title),
        format_date(&post.created_at, &config.date_format)
    )
}

/// Comment list; empty when there are no comments
pub fn comments_list(config: &SiteConfig, comments: &[Comment]) -> String {
    if comments.is_empty() {
        return String::new();
    }

    let mut html = format!(
        r#"<section class="comments"><h3 class="widget-title">{} Comments</h3>"#,
        comments.len()
    );

    for comment in comments {
        html.push_str(&format!(
            r#"<div class="comment"><p class="comment-meta"><span class="comment-author">{}</span> on {}</p><p class="comment-body">{}</p></div>"#,
            html_escape(&comment.name),
            format_date(&comment.created_at, &config.date_format),
            html_escape(&comment.comment)
        ));
    }

    html.push_str("</section>");
    html
}

/// Form that posts a new comment back to the server
pub fn comment_form(config: &SiteConfig, slug: &str) -> String {
    let action = url_for(config, &format!("post/{}/comments", encode_segment(slug)));
    format!(
        r#"<section class="comment-form"><h3 class="widget-title">Leave a Reply</h3><form method="post" action="{}"><textarea name="comment" placeholder="Comment" required></textarea><input type="text" name="name" placeholder="Name" required><input type="email" name="email" placeholder="Email" required><button type="submit">Post Comment</button></form></section>"#,
        html_escape(&action)
    )
}

/// Strip of featured posts for the home page
pub fn featured_posts(config: &SiteConfig, posts: &[PostSummary]) -> String {
    if posts.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<section class="featured-posts">"#);

    for post in posts {
        html.push_str(&format!(
            r#"<a class="featured-post" href="{}">"#,
            html_escape(&post_url(config, &post.slug))
        ));
        if let Some(image) = &post.featured_image {
            html.push_str(&image_tag(&image.url, &post.title, Some("featured-post-image")));
        }
        html.push_str(&format!(
            r#"<span class="featured-post-date">{}</span><span class="featured-post-title">{}</span>"#,
            format_date(&post.created_at, &config.date_format),
            html_escape(&post.title)
        ));
        if let Some(author) = &post.author {
            html.push_str(&format!(
                r#"<span class="featured-post-author">{}</span>"#,
                html_escape(&author.name)
            ));
        }
        html.push_str("</a>");
    }

    html.push_str("</section>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::{category, day};
    use crate::content::Author;

    fn summary(slug: &str, d: u32) -> PostSummary {
        PostSummary {
            title: format!("Post {slug}"),
            slug: slug.to_string(),
            created_at: day(d),
            featured_image: None,
            author: None,
        }
    }

    #[test]
    fn test_post_widget() {
        let html = post_widget(
            &SiteConfig::default(),
            "Recent Posts",
            &[summary("a", 1), summary("b", 2)],
        );
        assert!(html.contains("Recent Posts"));
        assert!(html.contains(r#"<a href="/post/a">Post a</a>"#));
        assert!(html.contains("Sep 02, 2021"));
    }

    #[test]
    fn test_categories_widget() {
        let html = categories_widget(
            &SiteConfig::default(),
            &[category("React", "react"), category("Web Development", "webdev")],
        );
        assert!(html.contains(r#"<a href="/category/react">React</a>"#));
        assert!(html.contains(r#"<a href="/category/webdev">Web Development</a>"#));
    }

    #[test]
    fn test_adjacent_nav_sides() {
        let config = SiteConfig::default();
        assert_eq!(adjacent_nav(&config, &AdjacentPosts::default()), "");

        let only_previous = AdjacentPosts {
            next: None,
            previous: Some(summary("a", 1)),
        };
        let html = adjacent_nav(&config, &only_previous);
        assert!(html.contains("adjacent-previous"));
        assert!(!html.contains("adjacent-next"));
    }

    #[test]
    fn test_comments_list_escapes() {
        let comments = vec![Comment {
            name: "Bob".to_string(),
            created_at: day(3),
            comment: "<i>hi</i>".to_string(),
        }];
        let html = comments_list(&SiteConfig::default(), &comments);
        assert!(html.contains("1 Comments"));
        assert!(html.contains("&lt;i&gt;hi&lt;/i&gt;"));
        assert_eq!(comments_list(&SiteConfig::default(), &[]), "");
    }

    #[test]
    fn test_comment_form_action() {
        let html = comment_form(&SiteConfig::default(), "hello-world");
        assert!(html.contains(r#"action="/post/hello-world/comments""#));
    }

    #[test]
    fn test_featured_posts() {
        let mut post = summary("f", 5);
        post.author = Some(Author {
            id: None,
            name: "Ada".to_string(),
            bio: None,
            photo: None,
        });
        let html = featured_posts(&SiteConfig::default(), &[post]);
        assert!(html.contains(r#"href="/post/f""#));
        assert!(html.contains("featured-post-author"));
        assert_eq!(featured_posts(&SiteConfig::default(), &[]), "");
    }
}
