//! List blog content

use anyhow::Result;
use std::fmt::Write;

use crate::config::SiteConfig;
use crate::content::{ContentSource, Edge, PostSummary};
use crate::helpers::format_date;

/// Print content of the given type
pub async fn run(
    source: &dyn ContentSource,
    config: &SiteConfig,
    content_type: &str,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    print!("{}", render(source, config, content_type, category, json).await?);
    Ok(())
}

/// Fetch and format content of the given type
pub async fn render(
    source: &dyn ContentSource,
    config: &SiteConfig,
    content_type: &str,
    category: Option<&str>,
    json: bool,
) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let edges = match category {
                Some(slug) => source.list_category_posts(slug).await?,
                None => source.list_posts().await?,
            };
            if json {
                return Ok(to_json(&edges)?);
            }
            let posts: Vec<_> = edges.into_iter().map(Edge::into_node).collect();
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                let categories: Vec<_> = post.categories.iter().map(|c| c.slug.as_str()).collect();
                writeln!(
                    out,
                    "  {} - {} [{}]{}",
                    format_date(&post.created_at, &config.date_format),
                    post.title,
                    post.slug,
                    if categories.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", categories.join(", "))
                    }
                )?;
            }
        }
        "recent" => {
            let posts = source.list_recent_posts().await?;
            if json {
                return Ok(to_json(&posts)?);
            }
            write_summaries(&mut out, config, "Recent posts", &posts)?;
        }
        "featured" => {
            let posts = source.list_featured_posts().await?;
            if json {
                return Ok(to_json(&posts)?);
            }
            write_summaries(&mut out, config, "Featured posts", &posts)?;
        }
        "category" | "categories" => {
            let categories = source.list_categories().await?;
            if json {
                return Ok(to_json(&categories)?);
            }
            writeln!(out, "Categories ({}):", categories.len())?;
            for category in categories {
                writeln!(out, "  {} [{}]", category.name, category.slug)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, recent, featured, category",
                content_type
            );
        }
    }

    Ok(out)
}

pub(crate) fn write_summaries(
    out: &mut String,
    config: &SiteConfig,
    heading: &str,
    posts: &[PostSummary],
) -> std::fmt::Result {
    writeln!(out, "{} ({}):", heading, posts.len())?;
    for post in posts {
        writeln!(
            out,
            "  {} - {} [{}]",
            format_date(&post.created_at, &config.date_format),
            post.title,
            post.slug
        )?;
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}
