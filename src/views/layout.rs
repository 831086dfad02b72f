//! Page shell shared by every rendered page

use crate::config::SiteConfig;
use crate::helpers::html_escape;

use super::header::render_header;

/// Wrap `main` (and an optional `sidebar`) in the full HTML document
pub fn render_layout(config: &SiteConfig, title: &str, main: &str, sidebar: &str) -> String {
    let page_title = if title.is_empty() {
        html_escape(&config.title)
    } else {
        format!("{} | {}", html_escape(title), html_escape(&config.title))
    };

    let description = if config.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<meta name="description" content="{}">"#,
            html_escape(&config.description)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
{}
</head>
<body>
{}
<div class="container"><main class="main">{}</main><aside class="sidebar">{}</aside></div>
</body>
</html>
"#,
        page_title,
        description,
        render_header(config),
        main,
        sidebar
    )
}
