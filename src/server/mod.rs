//! HTTP server rendering blog pages on request

use anyhow::Result;
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{CommentSubmission, ContentSource};
use crate::error::ContentError;
use crate::helpers::post_url;
use crate::pages::{CategoryPage, HomePage, PostPage};
use crate::Blog;

/// Server state
struct ServerState {
    config: SiteConfig,
    source: Arc<dyn ContentSource>,
}

/// Fields posted by the comment form
#[derive(Debug, Deserialize)]
struct CommentForm {
    name: String,
    email: String,
    comment: String,
}

/// Build the router over any content source
pub fn router(config: SiteConfig, source: Arc<dyn ContentSource>) -> Router {
    let state = Arc::new(ServerState { config, source });

    Router::new()
        .route("/", get(home_handler))
        .route("/post/:slug", get(post_handler))
        .route("/post/:slug/comments", post(comment_handler))
        .route("/category/:slug", get(category_handler))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server against the configured CMS
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let client = blog.client();
    if client.endpoint().is_empty() {
        tracing::warn!("No content endpoint configured; every page will fail until one is set");
    }

    let app = router(blog.config.clone(), Arc::new(client));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn home_handler(State(state): State<Arc<ServerState>>) -> Response {
    match HomePage::load(state.source.as_ref()).await {
        Ok(page) => Html(page.render(&state.config)).into_response(),
        Err(e) => content_error(e),
    }
}

async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match PostPage::load(state.source.as_ref(), &slug).await {
        Ok(Some(page)) => Html(page.render(&state.config)).into_response(),
        Ok(None) => not_found().await.into_response(),
        Err(e) => content_error(e),
    }
}

async fn category_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match CategoryPage::load(state.source.as_ref(), &slug).await {
        Ok(page) => Html(page.render(&state.config)).into_response(),
        Err(e) => content_error(e),
    }
}

/// Forward the form to the comment endpoint and send the reader back to the post
async fn comment_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
    Form(form): Form<CommentForm>,
) -> Response {
    let submission = CommentSubmission {
        name: form.name,
        email: form.email,
        comment: form.comment,
        slug,
    };

    match state.source.submit_comment(&submission).await {
        Ok(reply) => {
            tracing::debug!("Comment on {} acknowledged: {}", submission.slug, reply);
            Redirect::to(&post_url(&state.config, &submission.slug)).into_response()
        }
        Err(e) => content_error(e),
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

fn content_error(e: ContentError) -> Response {
    tracing::error!("Content request failed: {}", e);
    (StatusCode::BAD_GATEWAY, format!("Content API error: {}", e)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::StaticSource;

    /// Serve `source` on an ephemeral port and return the base URL
    async fn spawn_server(source: Arc<dyn ContentSource>) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(SiteConfig::default(), source);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn no_redirects() -> reqwest::Client {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_home_page() {
        let base = spawn_server(Arc::new(StaticSource::sample())).await;
        let response = reqwest::get(&base).await.unwrap();
        assert_eq!(response.status(), 200);
        let body = response.text().await.unwrap();
        assert!(body.contains("First Post"));
        assert!(body.contains(r#"href="/category/webdev""#));
    }

    #[tokio::test]
    async fn test_post_page_and_missing_post() {
        let base = spawn_server(Arc::new(StaticSource::sample())).await;

        let response = reqwest::get(format!("{base}/post/first")).await.unwrap();
        assert_eq!(response.status(), 200);
        assert!(response.text().await.unwrap().contains("<p>Hello <b>world</b></p>"));

        let response = reqwest::get(format!("{base}/post/nope")).await.unwrap();
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_category_page() {
        let base = spawn_server(Arc::new(StaticSource::sample())).await;
        let response = reqwest::get(format!("{base}/category/react")).await.unwrap();
        assert_eq!(response.status(), 200);
        let body = response.text().await.unwrap();
        assert!(body.contains("<title>React | GraphCMS</title>"));
        assert!(!body.contains("Third Post</a></h2>"));
    }

    #[tokio::test]
    async fn test_comment_form_submits_and_redirects() {
        let source = Arc::new(StaticSource::sample());
        let base = spawn_server(source.clone()).await;

        let response = no_redirects()
            .post(format!("{base}/post/first/comments"))
            .form(&[
                ("name", "Bob"),
                ("email", "bob@example.com"),
                ("comment", "Loved it"),
            ])
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 303);
        assert_eq!(response.headers()["location"], "/post/first");

        let submitted = source.submitted.lock().unwrap();
        assert_eq!(
            submitted[0],
            CommentSubmission {
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                comment: "Loved it".to_string(),
                slug: "first".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_content_errors_are_bad_gateway() {
        let base = spawn_server(Arc::new(StaticSource::failing())).await;
        let response = reqwest::get(&base).await.unwrap();
        assert_eq!(response.status(), 502);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let base = spawn_server(Arc::new(StaticSource::sample())).await;
        let response = reqwest::get(format!("{base}/nowhere")).await.unwrap();
        assert_eq!(response.status(), 404);
    }
}
