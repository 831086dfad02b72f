//! Rendering of CMS rich text (`content.raw`) to HTML
//!
//! The raw value is a tree of element nodes (`type` + `children`) with text
//! leaves (`text` plus mark flags such as `bold`). Unknown element types
//! render their children without a wrapper so no text is lost.

use serde_json::Value;

use crate::helpers::{html_escape, image_tag};

/// Render a raw rich-text document
pub fn render_rich_text(raw: &Value) -> String {
    let mut html = String::new();
    render_children(raw, &mut html);
    html
}

fn render_children(node: &Value, out: &mut String) {
    if let Some(children) = node.get("children").and_then(Value::as_array) {
        for child in children {
            render_node(child, out);
        }
    }
}

fn render_node(node: &Value, out: &mut String) {
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        out.push_str(&render_text(node, text));
        return;
    }

    let kind = node.get("type").and_then(Value::as_str).unwrap_or_default();

    let tag = match kind {
        "paragraph" => "p",
        "heading-one" => "h1",
        "heading-two" => "h2",
        "heading-three" => "h3",
        "heading-four" => "h4",
        "heading-five" => "h5",
        "heading-six" => "h6",
        "block-quote" => "blockquote",
        "bulleted-list" => "ul",
        "numbered-list" => "ol",
        "list-item" => "li",
        "code-block" => "pre",
        "image" => {
            out.push_str(&render_image(node));
            return;
        }
        "link" => {
            out.push_str(&render_link(node));
            return;
        }
        _ => {
            render_children(node, out);
            return;
        }
    };

    out.push('<');
    out.push_str(tag);
    out.push('>');
    if tag == "pre" {
        out.push_str("<code>");
        render_children(node, out);
        out.push_str("</code>");
    } else {
        render_children(node, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Text leaf with its marks, innermost first
fn render_text(node: &Value, text: &str) -> String {
    let mut html = html_escape(text);
    let marks = [
        ("code", "code"),
        ("bold", "b"),
        ("italic", "em"),
        ("underline", "u"),
    ];

    for (flag, tag) in marks {
        if node.get(flag).and_then(Value::as_bool).unwrap_or(false) {
            html = format!("<{tag}>{html}</{tag}>");
        }
    }

    html
}

/// Only web, mail and relative targets are linked; anything else becomes `#`
fn safe_href(href: &str) -> &str {
    let scheme_end = href.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if href[i..].starts_with(':') => {
            let scheme = href[..i].to_ascii_lowercase();
            if matches!(scheme.as_str(), "http" | "https" | "mailto") {
                href
            } else {
                "#"
            }
        }
        _ => href,
    }
}

fn render_link(node: &Value) -> String {
    let href = node
        .get("href")
        .and_then(Value::as_str)
        .map(safe_href)
        .unwrap_or("#");
    let new_tab = node
        .get("openInNewTab")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut inner = String::new();
    render_children(node, &mut inner);

    let target = if new_tab {
        r#" target="_blank" rel="noopener""#
    } else {
        ""
    };
    format!(r#"<a href="{}"{}>{}</a>"#, html_escape(href), target, inner)
}

fn render_image(node: &Value) -> String {
    let src = node.get("src").and_then(Value::as_str).unwrap_or_default();
    let alt = node
        .get("altText")
        .or_else(|| node.get("title"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    image_tag(src, alt, Some("content-image"))
}
