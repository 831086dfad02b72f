//! HTML helper functions

/// Generate an anchor tag. `text` is escaped; absolute http(s) links open in
/// a new tab.
///
/// # Examples
/// ```ignore
/// link_to("/post/a", "A & B") // -> <a href="/post/a">A &amp; B</a>
/// ```
pub fn link_to(href: &str, text: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            html_escape(href),
            html_escape(text)
        )
    } else {
        format!(r#"<a href="{}">{}</a>"#, html_escape(href), html_escape(text))
    }
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}"{}>"#,
        html_escape(src),
        html_escape(alt),
        class_attr
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.len()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_to() {
        assert_eq!(link_to("/post/a", "A & B"), r#"<a href="/post/a">A &amp; B</a>"#);
        assert!(link_to("https://graphcms.com", "CMS").contains(r#"target="_blank""#));
    }

    #[test]
    fn test_image_tag() {
        assert_eq!(
            image_tag("/a.png", "Say \"hi\"", Some("cover")),
            r#"<img src="/a.png" alt="Say &quot;hi&quot;" class="cover">"#
        );
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>'x'</b>"), "&lt;b&gt;&#39;x&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
    }
}
