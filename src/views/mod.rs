//! HTML views
//!
//! Plain functions from content models to HTML fragments. Every piece of
//! CMS text goes through `html_escape`.

mod header;
mod layout;
mod post;
mod rich_text;
mod widgets;

pub use header::{render_header, NavCategory, NAV_CATEGORIES};
pub use layout::render_layout;
pub use post::{author_card, post_card, post_detail};
pub use rich_text::render_rich_text;
pub use widgets::{
    adjacent_nav, categories_widget, comment_form, comments_list, featured_posts, post_widget,
};
