//! The engagement simulation: comments, auto-likes, and drafted replies.

use crate::studio::Studio;
use futures::future::join_all;
use tracing::{error, info, instrument};
use vetrina_core::{Comment, Sentiment};
use vetrina_error::VetrinaResult;
use vetrina_interface::GenerationDriver;

/// Mark positive comments auto-liked and make sure each carries a reply.
///
/// The service-provided reply wins; a deterministic local thank-you fills in
/// when it is absent. Neutral and negative comments are left untouched.
fn process_comments(comments: Vec<Comment>) -> Vec<Comment> {
    comments
        .into_iter()
        .map(|mut comment| {
            if comment.sentiment == Sentiment::Positive {
                comment.auto_liked = true;
                let missing = comment
                    .auto_reply
                    .as_deref()
                    .map(str::is_empty)
                    .unwrap_or(true);
                if missing {
                    comment.auto_reply = Some(format!(
                        "Thanks so much, @{}! Glad you enjoyed it.",
                        comment.author
                    ));
                }
            }
            comment
        })
        .collect()
}

impl<D: GenerationDriver> Studio<D> {
    /// Simulate audience comments for every post that has none.
    ///
    /// Posts already carrying comments or with a fetch in flight are skipped;
    /// the in-flight marker is what makes a concurrent second invocation a
    /// no-op rather than a duplicate fetch. Fetches run concurrently and
    /// results are applied per post, so completion order never matters.
    /// Per-post failures are logged and skipped.
    #[instrument(skip(self))]
    pub async fn run_engagement(&self) -> VetrinaResult<()> {
        let targets = {
            let mut guard = self.state.write().await;
            let state = &mut *guard;
            let targets: Vec<_> = state
                .posts
                .iter()
                .filter(|post| {
                    post.comments().is_empty() && !state.engagement_in_flight.contains(post.id())
                })
                .map(|post| {
                    (
                        post.id().clone(),
                        post.title().clone(),
                        post.description().clone(),
                    )
                })
                .collect();
            for (id, _, _) in &targets {
                state.engagement_in_flight.insert(id.clone());
            }
            targets
        };
        if targets.is_empty() {
            return Ok(());
        }

        let driver = &self.driver;
        let fetches = targets.into_iter().map(|(id, title, description)| async move {
            let result = driver.simulate_comments(&title, &description).await;
            (id, result)
        });
        let results = join_all(fetches).await;

        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let mut populated = 0usize;
        for (id, result) in results {
            state.engagement_in_flight.remove(&id);
            match result {
                Ok(comments) => {
                    if let Some(post) = state.post_mut(&id) {
                        post.set_comments(process_comments(comments));
                        populated += 1;
                    }
                }
                Err(err) => {
                    error!(post = %id, error = %err, "Comment simulation failed");
                }
            }
        }
        info!(populated, "Engagement pass complete");
        Ok(())
    }
}
