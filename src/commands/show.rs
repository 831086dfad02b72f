//! Show one post with its comments and neighbours

use anyhow::Result;
use std::fmt::Write;

use super::list::write_summaries;
use crate::config::SiteConfig;
use crate::content::ContentSource;
use crate::helpers::format_date;
use crate::pages::PostPage;

/// Print the post `slug`
pub async fn run(source: &dyn ContentSource, config: &SiteConfig, slug: &str, json: bool) -> Result<()> {
    print!("{}", render(source, config, slug, json).await?);
    Ok(())
}

pub async fn render(
    source: &dyn ContentSource,
    config: &SiteConfig,
    slug: &str,
    json: bool,
) -> Result<String> {
    let Some(page) = PostPage::load(source, slug).await? else {
        anyhow::bail!("No post with slug '{}'", slug);
    };

    if json {
        let value = serde_json::json!({
            "post": page.post,
            "comments": page.comments,
            "adjacent": page.adjacent,
            "similar": page.similar,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    let post = &page.post;
    let mut out = String::new();
    writeln!(out, "{}", post.title)?;
    writeln!(
        out,
        "  {} by {}",
        format_date(&post.created_at, &config.date_format),
        post.author.as_ref().map(|a| a.name.as_str()).unwrap_or("unknown")
    )?;
    if !post.categories.is_empty() {
        let names: Vec<_> = post.categories.iter().map(|c| c.name.as_str()).collect();
        writeln!(out, "  Categories: {}", names.join(", "))?;
    }
    if let Some(excerpt) = &post.excerpt {
        writeln!(out, "  {}", excerpt)?;
    }

    writeln!(out, "Comments ({}):", page.comments.len())?;
    for comment in &page.comments {
        writeln!(
            out,
            "  {} on {}: {}",
            comment.name,
            format_date(&comment.created_at, &config.date_format),
            comment.comment
        )?;
    }

    if let Some(previous) = &page.adjacent.previous {
        writeln!(out, "Previous: {} [{}]", previous.title, previous.slug)?;
    }
    if let Some(next) = &page.adjacent.next {
        writeln!(out, "Next: {} [{}]", next.title, next.slug)?;
    }

    write_summaries(&mut out, config, "Similar posts", &page.similar)?;

    Ok(out)
}
