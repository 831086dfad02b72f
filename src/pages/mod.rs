//! Pages: fetch what a route needs through `ContentSource`, then render it

mod category;
mod home;
mod post;

pub use category::CategoryPage;
pub use home::HomePage;
pub use post::PostPage;
