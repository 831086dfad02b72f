//! Site header with the fixed category navigation

use serde::Serialize;

use crate::config::SiteConfig;
use crate::helpers::{category_url, html_escape, url_for};

/// A category shortcut shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavCategory {
    pub id: u32,
    pub name: &'static str,
    pub slug: &'static str,
}

/// Header shortcuts. Hardcoded, not fetched from the CMS.
pub const NAV_CATEGORIES: [NavCategory; 2] = [
    NavCategory {
        id: 1,
        name: "react",
        slug: "react",
    },
    NavCategory {
        id: 2,
        name: "web development",
        slug: "webdev",
    },
];

/// Render the header: a home link titled with the site title, then the shortcuts
pub fn render_header(config: &SiteConfig) -> String {
    let mut html = String::from(r#"<header class="header"><div class="header-inner">"#);

    html.push_str(&format!(
        r#"<a class="header-home" href="{}"><span class="header-title">{}</span></a>"#,
        html_escape(&url_for(config, "/")),
        html_escape(&config.title)
    ));

    html.push_str(r#"<nav class="header-nav">"#);
    for category in &NAV_CATEGORIES {
        html.push_str(&format!(
            r#"<a class="header-category" data-id="{}" href="{}">{}</a>"#,
            category.id,
            html_escape(&category_url(config, category.slug)),
            html_escape(category.name)
        ));
    }
    html.push_str("</nav></div></header>");

    html
}
