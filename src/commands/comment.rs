//! Submit a comment

use anyhow::Result;

use crate::content::{CommentSubmission, ContentSource};

/// Submit `submission` and print the endpoint's reply
pub async fn run(source: &dyn ContentSource, submission: &CommentSubmission) -> Result<()> {
    let reply = submit(source, submission).await?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

pub async fn submit(
    source: &dyn ContentSource,
    submission: &CommentSubmission,
) -> Result<serde_json::Value> {
    tracing::info!("Submitting comment on '{}'", submission.slug);
    Ok(source.submit_comment(submission).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::StaticSource;

    #[tokio::test]
    async fn test_submit() {
        let source = StaticSource::sample();
        let submission = CommentSubmission {
            name: "Eve".to_string(),
            email: "eve@example.com".to_string(),
            comment: "Hello".to_string(),
            slug: "second".to_string(),
        };

        let reply = submit(&source, &submission).await.unwrap();
        assert_eq!(reply["createComment"]["name"], "Eve");
        assert_eq!(source.submitted.lock().unwrap()[0], submission);
    }
}
